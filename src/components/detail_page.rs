//! Detail Page
//!
//! `/users/:id`: one record with edit and delete actions. Leaving the page
//! (back or delete) is a full document navigation to `/`.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crud_store::{Record, RecordId, Repository, RowMode, StoreError};

use crate::components::DetailRow;
use crate::context::{hard_navigate, use_app_context};
use crate::routes::LIST_PATH;

#[component]
pub fn DetailPage() -> impl IntoView {
    let ctx = use_app_context();
    let params = use_params_map();

    let (record, set_record) = signal(None::<Record>);
    let (error, set_error) = signal(None::<String>);
    let mode = RwSignal::new(RowMode::Viewing);

    // Load the routed record whenever the id changes
    Effect::new(move |_| {
        let id = params.with(|p| p.get("id")).map(RecordId::from);
        mode.set(RowMode::Viewing);
        let Some(id) = id else {
            set_record.set(None);
            return;
        };

        match ctx.repository().find_by_id(&id) {
            Ok(found) => {
                log::info!("[DETAIL] {} -> {}", id, if found.is_some() { "found" } else { "missing" });
                set_error.set(None);
                set_record.set(found);
            }
            Err(e) => {
                log::error!("[DETAIL] load failed: {}", e);
                set_error.set(Some(e.to_string()));
                set_record.set(None);
            }
        }
    });

    let on_edit = Callback::new(move |_: ()| {
        if let Some(current) = record.get_untracked() {
            mode.set(RowMode::begin(&current));
        }
    });

    let on_cancel = Callback::new(move |_: ()| mode.update(RowMode::cancel));

    let on_save = Callback::new(move |_: ()| {
        let repo = ctx.repository();
        let mut next = mode.get_untracked();
        match next.save(&repo) {
            Ok(Some(saved)) => {
                log::info!("[DETAIL] saved {}", saved.id);
                set_error.set(None);
                set_record.set(Some(saved));
            }
            Ok(None) => {}
            Err(StoreError::Invalid(errors)) => {
                log::debug!("[DETAIL] save rejected: {}", errors);
            }
            Err(e) => {
                log::error!("[DETAIL] save failed: {}", e);
                set_error.set(Some(e.to_string()));
            }
        }
        mode.set(next);
    });

    let on_delete = Callback::new(move |_: ()| {
        let Some(current) = record.get_untracked() else {
            return;
        };
        match ctx.repository().delete(&current.id) {
            Ok(_) => {
                log::info!("[DETAIL] deleted {}", current.id);
                hard_navigate(LIST_PATH);
            }
            Err(e) => {
                log::error!("[DETAIL] delete failed: {}", e);
                set_error.set(Some(e.to_string()));
            }
        }
    });

    view! {
        <div class="page">
            <button class="btn btn-back" on:click=move |_| hard_navigate(LIST_PATH)>
                "Back to Main Page"
            </button>
            <h2 class="page-title">"User Details : "</h2>

            {move || error.get().map(|msg| view! { <p class="storage-error">{msg}</p> })}

            <Show
                when=move || record.with(|r| r.is_some())
                fallback=|| view! { <p class="no-data">"No data found for this user."</p> }
            >
                <table class="record-table">
                    <thead>
                        <tr>
                            <th>"Name"</th>
                            <th>"Field"</th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <DetailRow
                            record=record
                            mode=mode
                            on_edit=on_edit
                            on_save=on_save
                            on_cancel=on_cancel
                            on_delete=on_delete
                        />
                    </tbody>
                </table>
            </Show>
        </div>
    }
}
