//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crud_store::{JsonSnapshotStore, RecordRepository};

use crate::config::AppConfig;
use crate::storage::LocalStorage;

/// Repository type every page uses
pub type BrowserRepository = RecordRepository<JsonSnapshotStore<LocalStorage>>;

/// App-wide values provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    config: StoredValue<AppConfig>,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config: StoredValue::new(config),
        }
    }

    /// Fresh repository over the configured storage key.
    ///
    /// Pages build one per operation; every call re-reads storage.
    pub fn repository(&self) -> BrowserRepository {
        self.config.with_value(|config| {
            RecordRepository::new(JsonSnapshotStore::new(LocalStorage, config.storage_key.clone()))
        })
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

/// Full document navigation, dropping all client-side state
pub fn hard_navigate(path: &str) {
    if let Err(e) = window().location().set_href(path) {
        log::error!("[NAV] failed to navigate to {}: {:?}", path, e);
    }
}
