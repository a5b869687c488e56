//! List Page
//!
//! `/`: add form plus the table of every stored record.

use leptos::prelude::*;
use reactive_stores::Store;

use crud_store::Repository;

use crate::components::{NewRecordForm, RecordTable};
use crate::context::use_app_context;
use crate::store::{store_replace_records, store_set_error, ListState, ListStateStoreFields};

#[component]
pub fn ListPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = Store::new(ListState::default());
    provide_context(store);

    // Load records on mount
    Effect::new(move |_| match ctx.repository().list() {
        Ok(records) => {
            log::info!("[LIST] loaded {} records", records.len());
            store_replace_records(&store, records);
        }
        Err(e) => {
            log::error!("[LIST] load failed: {}", e);
            store_set_error(&store, Some(e.to_string()));
        }
    });

    view! {
        <div class="page">
            <h2 class="page-title">"CRUD in Leptos :"</h2>

            {move || store.storage_error().get().map(|msg| view! {
                <p class="storage-error">{msg}</p>
            })}

            <NewRecordForm />
            <RecordTable />
        </div>
    }
}
