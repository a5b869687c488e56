//! Domain Layer
//!
//! Contains the record entity and its core abstractions.
//! This layer has no storage knowledge (serde only for the wire shape).

mod entity;
mod record;
mod validation;

pub use entity::Entity;
pub use record::{Collection, Record, RecordId};
pub use validation::{validate, FIELD_REQUIRED, NAME_REQUIRED};
