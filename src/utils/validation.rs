//! Input validation utilities

use crate::{
    constants::error_messages,
    error::{AppError, AppResult},
};

/// Return the field value, or the missing-field validation error
pub fn require_field(value: Option<&str>) -> AppResult<&str> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(AppError::Validation(
            error_messages::MISSING_REQUIRED_FIELD.to_string(),
        )),
    }
}
