//! Record Repository
//!
//! The one place that reads, transforms and writes the record collection.
//! Both the list page and the detail page go through it.

use crate::domain::{validate, Record, RecordId};
use crate::error::{StoreError, StoreResult};

use super::traits::{Repository, StoragePort};

/// Repository over a whole-collection [`StoragePort`]
///
/// Each mutation loads the complete snapshot, changes it and saves the
/// complete snapshot back, including when the result is empty.
#[derive(Debug, Clone)]
pub struct RecordRepository<S> {
    storage: S,
}

impl<S: StoragePort> RecordRepository<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Validate form input and append a new record with a fresh id
    pub fn add(&self, name: &str, field: &str) -> StoreResult<Record> {
        validate(name, field)?;
        self.create(Record::new(name, field))
    }

    /// Validate edited values and write them over the record with `id`
    pub fn edit(&self, id: &RecordId, name: &str, field: &str) -> StoreResult<Record> {
        validate(name, field)?;
        self.update(&Record::with_id(id.clone(), name, field))
    }
}

impl<S: StoragePort> Repository<Record> for RecordRepository<S> {
    fn create(&self, record: Record) -> StoreResult<Record> {
        let mut records = self.storage.load()?;
        records.push(record.clone());
        self.storage.save(&records)?;
        log::info!("added record {} ({} total)", record.id, records.len());
        Ok(record)
    }

    fn find_by_id(&self, id: &RecordId) -> StoreResult<Option<Record>> {
        Ok(self.storage.load()?.into_iter().find(|r| &r.id == id))
    }

    fn list(&self) -> StoreResult<Vec<Record>> {
        self.storage.load()
    }

    fn update(&self, record: &Record) -> StoreResult<Record> {
        let mut records = self.storage.load()?;
        let slot = records
            .iter_mut()
            .find(|r| r.id == record.id)
            .ok_or_else(|| StoreError::NotFound(record.id.clone()))?;
        *slot = record.clone();
        self.storage.save(&records)?;
        log::info!("updated record {}", record.id);
        Ok(record.clone())
    }

    fn delete(&self, id: &RecordId) -> StoreResult<bool> {
        let mut records = self.storage.load()?;
        let before = records.len();
        records.retain(|r| &r.id != id);
        if records.len() == before {
            log::debug!("delete of unknown record {} ignored", id);
            return Ok(false);
        }
        self.storage.save(&records)?;
        log::info!("deleted record {} ({} left)", id, records.len());
        Ok(true)
    }
}
