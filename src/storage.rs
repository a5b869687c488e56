//! Browser Storage Backend
//!
//! `window.localStorage` behind the store's key-value port.

use crud_store::{KeyValueBackend, StoreError, StoreResult};
use wasm_bindgen::JsValue;

/// Handle-free backend; the `Storage` object is looked up per call so this
/// type can sit in Leptos context.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> StoreResult<web_sys::Storage> {
        let window = web_sys::window().ok_or_else(|| StoreError::Unavailable("no window".to_string()))?;
        window
            .local_storage()
            .map_err(|e| StoreError::Unavailable(js_error(e)))?
            .ok_or_else(|| StoreError::Unavailable("localStorage is disabled".to_string()))
    }
}

impl KeyValueBackend for LocalStorage {
    fn get_item(&self, key: &str) -> StoreResult<Option<String>> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| StoreError::Unavailable(js_error(e)))
    }

    fn set_item(&self, key: &str, value: &str) -> StoreResult<()> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| StoreError::Write(js_error(e)))
    }
}

fn js_error(value: JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
