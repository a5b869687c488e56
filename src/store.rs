//! List Page State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crud_store::Record;

/// Records shown by the list page
#[derive(Clone, Debug, Default, Store)]
pub struct ListState {
    /// All records in insertion order
    pub records: Vec<Record>,
    /// Storage read/write failure to show above the table
    pub storage_error: Option<String>,
}

/// Type alias for the store
pub type ListStore = Store<ListState>;

/// Get the list store from context
pub fn use_list_store() -> ListStore {
    expect_context::<ListStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace everything with a freshly loaded snapshot
pub fn store_replace_records(store: &ListStore, records: Vec<Record>) {
    *store.records().write() = records;
}

/// Append a record that has already been persisted
pub fn store_add_record(store: &ListStore, record: Record) {
    store.records().write().push(record);
}

pub fn store_set_error(store: &ListStore, error: Option<String>) {
    *store.storage_error().write() = error;
}
