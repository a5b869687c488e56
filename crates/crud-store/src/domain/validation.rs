//! Input Validation
//!
//! Non-empty checks shared by the add form and the detail edit row.

use crate::error::ValidationErrors;

pub const NAME_REQUIRED: &str = "Name is required";
pub const FIELD_REQUIRED: &str = "Field is required";

/// Check that both inputs are non-empty after trimming.
///
/// Every failing input gets its own message so the form can show them inline.
pub fn validate(name: &str, field: &str) -> Result<(), ValidationErrors> {
    let errors = ValidationErrors {
        name: name.trim().is_empty().then_some(NAME_REQUIRED),
        field: field.trim().is_empty().then_some(FIELD_REQUIRED),
    };

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
