//! Store Errors

use thiserror::Error;

use crate::domain::RecordId;

/// Common result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Per-input validation messages; `None` means that input is fine
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Error)]
#[error("{}", self.joined())]
pub struct ValidationErrors {
    pub name: Option<&'static str>,
    pub field: Option<&'static str>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.field.is_none()
    }

    fn joined(&self) -> String {
        let messages: Vec<&str> = [self.name, self.field].into_iter().flatten().collect();
        messages.join(", ")
    }
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    #[error("stored data under key '{key}' is malformed: {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write storage: {0}")]
    Write(String),

    #[error("record not found: {0}")]
    NotFound(RecordId),

    #[error("invalid input: {0}")]
    Invalid(#[from] ValidationErrors),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_display_joins_messages() {
        let err = ValidationErrors {
            name: Some("Name is required"),
            field: Some("Field is required"),
        };
        assert_eq!(err.to_string(), "Name is required, Field is required");
    }

    #[test]
    fn test_invalid_wraps_validation() {
        let err: StoreError = ValidationErrors {
            name: None,
            field: Some("Field is required"),
        }
        .into();
        assert_eq!(err.to_string(), "invalid input: Field is required");
    }
}
