//! Row Edit State
//!
//! Viewing -> Editing -> (Save | Cancel) -> Viewing, for the one record the
//! detail page shows.

use crate::domain::{Record, RecordId};
use crate::error::{StoreError, StoreResult, ValidationErrors};
use crate::repository::{RecordRepository, StoragePort};

/// Uncommitted edits for one record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditDraft {
    pub id: RecordId,
    pub name: String,
    pub field: String,
    /// Messages from the last rejected save
    pub errors: ValidationErrors,
}

impl EditDraft {
    pub fn from_record(record: &Record) -> Self {
        Self {
            id: record.id.clone(),
            name: record.name.clone(),
            field: record.field.clone(),
            errors: ValidationErrors::default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RowMode {
    #[default]
    Viewing,
    Editing(EditDraft),
}

impl RowMode {
    /// Enter edit mode seeded with the record's current values
    pub fn begin(record: &Record) -> Self {
        RowMode::Editing(EditDraft::from_record(record))
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, RowMode::Editing(_))
    }

    pub fn draft(&self) -> Option<&EditDraft> {
        match self {
            RowMode::Editing(draft) => Some(draft),
            RowMode::Viewing => None,
        }
    }

    pub fn draft_mut(&mut self) -> Option<&mut EditDraft> {
        match self {
            RowMode::Editing(draft) => Some(draft),
            RowMode::Viewing => None,
        }
    }

    /// Drop local edits; nothing is written
    pub fn cancel(&mut self) {
        *self = RowMode::Viewing;
    }

    /// Commit the draft through the repository.
    ///
    /// On success the row returns to Viewing and the stored record is
    /// returned. Rejected input keeps the row in Editing with the messages
    /// attached to the draft. Saving while Viewing is a no-op.
    pub fn save<S: StoragePort>(&mut self, repo: &RecordRepository<S>) -> StoreResult<Option<Record>> {
        let Some(draft) = self.draft_mut() else {
            return Ok(None);
        };

        match repo.edit(&draft.id, &draft.name, &draft.field) {
            Ok(record) => {
                *self = RowMode::Viewing;
                Ok(Some(record))
            }
            Err(StoreError::Invalid(errors)) => {
                draft.errors = errors;
                Err(StoreError::Invalid(errors))
            }
            Err(e) => Err(e),
        }
    }
}
