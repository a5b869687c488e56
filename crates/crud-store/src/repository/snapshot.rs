//! JSON Snapshot Store
//!
//! Serializes the whole collection as one JSON array under a single key.

use crate::domain::{Collection, Record};
use crate::error::{StoreError, StoreResult};

use super::traits::{KeyValueBackend, StoragePort};

/// Key the browser build stores its collection under
pub const DEFAULT_STORAGE_KEY: &str = "data";

/// [`StoragePort`] over any [`KeyValueBackend`]
#[derive(Debug, Clone)]
pub struct JsonSnapshotStore<B> {
    backend: B,
    key: String,
}

impl<B: KeyValueBackend> JsonSnapshotStore<B> {
    pub fn new(backend: B, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}

impl<B: KeyValueBackend> StoragePort for JsonSnapshotStore<B> {
    fn load(&self) -> StoreResult<Collection> {
        let Some(raw) = self.backend.get_item(&self.key)? else {
            log::debug!("no snapshot under '{}', starting empty", self.key);
            return Ok(Vec::new());
        };

        match serde_json::from_str::<Collection>(&raw) {
            Ok(records) => {
                log::debug!("loaded {} records from '{}'", records.len(), self.key);
                Ok(records)
            }
            Err(source) => {
                log::warn!("snapshot under '{}' is malformed: {}", self.key, source);
                Err(StoreError::Corrupt {
                    key: self.key.clone(),
                    source,
                })
            }
        }
    }

    fn save(&self, records: &[Record]) -> StoreResult<()> {
        let json = serde_json::to_string(records).map_err(|e| StoreError::Write(e.to_string()))?;
        self.backend.set_item(&self.key, &json)?;
        log::debug!("saved {} records to '{}'", records.len(), self.key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MemoryBackend;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_absent_key_is_empty() {
        let store = JsonSnapshotStore::new(MemoryBackend::new(), DEFAULT_STORAGE_KEY);
        assert_eq!(store.load().unwrap(), Vec::new());
    }

    #[test]
    fn test_round_trip_keeps_order() {
        let store = JsonSnapshotStore::new(MemoryBackend::new(), DEFAULT_STORAGE_KEY);
        let records = vec![
            Record::with_id("b".into(), "Bob", "Ops"),
            Record::with_id("a".into(), "Alice", "Eng"),
        ];
        store.save(&records).unwrap();
        assert_eq!(store.load().unwrap(), records);
    }

    #[test]
    fn test_malformed_snapshot_is_reported() {
        let backend = MemoryBackend::with_entry(DEFAULT_STORAGE_KEY, "{not json");
        let store = JsonSnapshotStore::new(backend, DEFAULT_STORAGE_KEY);
        match store.load() {
            Err(StoreError::Corrupt { key, .. }) => assert_eq!(key, DEFAULT_STORAGE_KEY),
            other => panic!("expected Corrupt, got {:?}", other),
        }
    }

    #[test]
    fn test_wrong_shape_is_reported() {
        let backend = MemoryBackend::with_entry(DEFAULT_STORAGE_KEY, r#"{"id":"1"}"#);
        let store = JsonSnapshotStore::new(backend, DEFAULT_STORAGE_KEY);
        assert!(matches!(store.load(), Err(StoreError::Corrupt { .. })));
    }

    #[test]
    fn test_keys_are_isolated() {
        let backend = MemoryBackend::new();
        let first = JsonSnapshotStore::new(backend.clone(), "first");
        let second = JsonSnapshotStore::new(backend, "second");
        first.save(&[Record::new("Alice", "Eng")]).unwrap();
        assert!(second.load().unwrap().is_empty());
    }
}
