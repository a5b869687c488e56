//! New Record Form Component
//!
//! Controlled name/field form with inline validation messages.

use leptos::prelude::*;

use crud_store::{Repository, StoreError};

use crate::context::use_app_context;
use crate::store::{
    store_add_record, store_replace_records, store_set_error, use_list_store, ListStateStoreFields,
};

/// Form for appending a record to the list
#[component]
pub fn NewRecordForm() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_list_store();

    let (name, set_name) = signal(String::new());
    let (field, set_field) = signal(String::new());
    let (name_error, set_name_error) = signal(None::<&'static str>);
    let (field_error, set_field_error) = signal(None::<&'static str>);

    let add_record = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name_value = name.get_untracked();
        let field_value = field.get_untracked();

        let repo = ctx.repository();
        match repo.add(&name_value, &field_value) {
            Ok(record) => {
                log::info!("[LIST] added record {}", record.id);
                set_name_error.set(None);
                set_field_error.set(None);
                // The table may be missing rows from a failed load; resync it from storage
                let stale = store.storage_error().with_untracked(|e| e.is_some());
                if !stale {
                    store_add_record(&store, record);
                } else {
                    match repo.list() {
                        Ok(records) => {
                            store_set_error(&store, None);
                            store_replace_records(&store, records);
                        }
                        Err(e) => {
                            log::error!("[LIST] reload after add failed: {}", e);
                            store_set_error(&store, Some(e.to_string()));
                        }
                    }
                }
                set_name.set(String::new());
                set_field.set(String::new());
            }
            Err(StoreError::Invalid(errors)) => {
                set_name_error.set(errors.name);
                set_field_error.set(errors.field);
            }
            Err(e) => {
                log::error!("[LIST] add failed: {}", e);
                store_set_error(&store, Some(e.to_string()));
            }
        }
    };

    let input_class = |error: ReadSignal<Option<&'static str>>| {
        move || if error.get().is_some() { "text-input invalid" } else { "text-input" }
    };

    view! {
        <form class="new-record-form" on:submit=add_record>
            <div class="form-row">
                <label for="name">"Name:"</label>
                <input
                    type="text"
                    id="name"
                    name="name"
                    class=input_class(name_error)
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                />
                {move || name_error.get().map(|msg| view! { <p class="field-error">{msg}</p> })}
            </div>

            <div class="form-row">
                <label for="field">"Field:"</label>
                <input
                    type="text"
                    id="field"
                    name="field"
                    class=input_class(field_error)
                    prop:value=move || field.get()
                    on:input=move |ev| set_field.set(event_target_value(&ev))
                />
                {move || field_error.get().map(|msg| view! { <p class="field-error">{msg}</p> })}
            </div>

            <button type="submit" class="btn btn-primary">"Add"</button>
        </form>
    }
}
