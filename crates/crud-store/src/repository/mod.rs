//! Repository Layer
//!
//! Data access abstractions and implementations.

mod traits;
mod snapshot;
mod memory;
mod record_repo;


pub use traits::{KeyValueBackend, Repository, StoragePort};
pub use snapshot::{JsonSnapshotStore, DEFAULT_STORAGE_KEY};
pub use memory::MemoryBackend;
pub use record_repo::RecordRepository;
