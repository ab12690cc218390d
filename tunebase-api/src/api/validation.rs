//! Request field validation
//!
//! Request structs deserialize every field as `Option` so that a missing
//! field is reported by name instead of as a generic extractor failure.

use tunebase_common::db::MAX_NAME_LEN;

use crate::error::{ApiError, ApiResult};

/// Unwrap a required field
pub fn require<T>(value: Option<T>, field: &str) -> ApiResult<T> {
    value.ok_or_else(|| ApiError::BadRequest(format!("Missing required field '{}'", field)))
}

/// Unwrap a required name: present, not blank, at most 64 characters
pub fn require_name(value: Option<String>, field: &str) -> ApiResult<String> {
    let name = require(value, field)?;
    if name.trim().is_empty() {
        return Err(ApiError::BadRequest(format!("Field '{}' must not be blank", field)));
    }
    check_length(&name, field)?;
    Ok(name)
}

/// Check an optional name against the length limit
pub fn optional_name(value: Option<String>, field: &str) -> ApiResult<Option<String>> {
    if let Some(name) = &value {
        check_length(name, field)?;
    }
    Ok(value)
}

fn check_length(name: &str, field: &str) -> ApiResult<()> {
    if name.chars().count() > MAX_NAME_LEN {
        return Err(ApiError::BadRequest(format!(
            "Field '{}' exceeds {} characters",
            field, MAX_NAME_LEN
        )));
    }
    Ok(())
}
