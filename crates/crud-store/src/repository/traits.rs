//! Repository Layer - Core Traits
//!
//! Defines the abstract interfaces for data access.
//! Implementations can use browser storage, in-memory maps, etc.

use crate::domain::{Collection, Entity, Record};
use crate::error::StoreResult;

/// Core repository trait for CRUD operations
///
/// Generic over any Entity type. All operations are synchronous: the
/// storage behind them is too.
pub trait Repository<T: Entity> {
    /// Insert a new entity at the end of the collection
    fn create(&self, entity: T) -> StoreResult<T>;

    /// Find entity by ID
    fn find_by_id(&self, id: &T::Id) -> StoreResult<Option<T>>;

    /// List all entities in insertion order
    fn list(&self) -> StoreResult<Vec<T>>;

    /// Replace an existing entity matched by ID
    fn update(&self, entity: &T) -> StoreResult<T>;

    /// Delete entity by ID, returns whether anything was removed
    fn delete(&self, id: &T::Id) -> StoreResult<bool>;
}

/// Whole-collection persistence port
///
/// Every call moves a complete snapshot; there are no partial writes.
pub trait StoragePort {
    /// Read the full collection; an absent snapshot is an empty collection
    fn load(&self) -> StoreResult<Collection>;

    /// Overwrite the stored snapshot
    fn save(&self, records: &[Record]) -> StoreResult<()>;
}

/// Synchronous string key-value store (the shape of `window.localStorage`)
pub trait KeyValueBackend {
    fn get_item(&self, key: &str) -> StoreResult<Option<String>>;

    fn set_item(&self, key: &str, value: &str) -> StoreResult<()>;
}
