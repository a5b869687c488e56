//! CRUD Record Store
//!
//! Layered architecture:
//! - domain: Record entity, identifiers and input validation
//! - repository: storage port, JSON snapshot codec and the shared record repository
//! - edit: row edit state machine used by the detail page
//!
//! Nothing here touches the browser; the UI crate plugs `localStorage`
//! in through [`repository::KeyValueBackend`].

pub mod domain;
pub mod edit;
pub mod error;
pub mod repository;

pub use domain::{validate, Collection, Entity, Record, RecordId};
pub use edit::{EditDraft, RowMode};
pub use error::{StoreError, StoreResult, ValidationErrors};
pub use repository::{
    JsonSnapshotStore, KeyValueBackend, MemoryBackend, RecordRepository, Repository, StoragePort,
    DEFAULT_STORAGE_KEY,
};
