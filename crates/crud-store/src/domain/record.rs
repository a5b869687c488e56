//! Record Entity
//!
//! A single name/field entry in the managed collection.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::entity::Entity;

/// Record identifier
///
/// Generated ids are hyphenated UUID v4 strings, but anything read back
/// from storage or a route is accepted as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    /// Fresh random identifier
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for RecordId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// A persisted name/field record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Unique identifier
    pub id: RecordId,
    /// Display name
    pub name: String,
    /// Free-form field value (e.g. department)
    pub field: String,
}

/// Ordered set of records, the unit of persistence
pub type Collection = Vec<Record>;

impl Record {
    /// Create a record with a freshly generated id
    pub fn new(name: impl Into<String>, field: impl Into<String>) -> Self {
        Self::with_id(RecordId::generate(), name, field)
    }

    pub fn with_id(id: RecordId, name: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            field: field.into(),
        }
    }
}

impl Entity for Record {
    type Id = RecordId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_creation() {
        let record = Record::new("Alice", "Eng");
        assert_eq!(record.name, "Alice");
        assert_eq!(record.field, "Eng");
        assert_eq!(record.id().as_str().len(), 36);
    }

    #[test]
    fn test_generated_ids_differ() {
        let a = RecordId::generate();
        let b = RecordId::generate();
        assert_ne!(a, b);
    }

    #[test]
    fn test_wire_shape() {
        let record = Record::with_id("42".into(), "Bob", "Ops");
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"id":"42","name":"Bob","field":"Ops"}"#);
    }

    #[test]
    fn test_non_uuid_ids_are_accepted() {
        let record: Record =
            serde_json::from_str(r#"{"id":"legacy-1","name":"Eve","field":"QA"}"#).unwrap();
        assert_eq!(record.id, RecordId::from("legacy-1"));
    }
}
