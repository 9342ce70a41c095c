//! Pure field validators shared by the create and update paths.
//!
//! Each validator either accepts the input (returning the normalized
//! value) or rejects it with a `CoreError::Validation` carrying the
//! caller-supplied error code and a human-readable message.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::CoreError;

/// `local@domain` with at least one dot in the domain part.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

/// Accept a non-empty string; returns the trimmed value.
pub fn non_empty(value: &str, field: &str, code: &str) -> Result<String, CoreError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CoreError::validation(
            code,
            format!("{field} is required and must be a non-empty string"),
        ));
    }
    Ok(trimmed.to_string())
}

/// Accept a strictly positive 64-bit integer.
pub fn positive_i64(value: i64, field: &str, code: &str) -> Result<i64, CoreError> {
    if value <= 0 {
        return Err(CoreError::validation(
            code,
            format!("{field} must be a positive number"),
        ));
    }
    Ok(value)
}

/// Accept a strictly positive 32-bit integer.
pub fn positive_i32(value: i32, field: &str, code: &str) -> Result<i32, CoreError> {
    if value <= 0 {
        return Err(CoreError::validation(
            code,
            format!("{field} must be a positive number"),
        ));
    }
    Ok(value)
}

/// Accept a value from a fixed literal set; returns the trimmed value.
pub fn one_of(value: &str, allowed: &[&str], field: &str, code: &str) -> Result<String, CoreError> {
    let trimmed = value.trim();
    if !allowed.contains(&trimmed) {
        return Err(CoreError::validation(
            code,
            format!("{field} must be one of: {}", allowed.join(", ")),
        ));
    }
    Ok(trimmed.to_string())
}

/// Accept a well-formed email address; returns it trimmed and lowercased.
///
/// An empty value is reported with `missing_code`, a malformed one with
/// `invalid_code` -- the two map to different public error codes.
pub fn email(
    value: &str,
    field: &str,
    missing_code: &str,
    invalid_code: &str,
) -> Result<String, CoreError> {
    let trimmed = non_empty(value, field, missing_code)?;
    if !EMAIL_RE.is_match(&trimmed) {
        return Err(CoreError::validation(
            invalid_code,
            "Invalid email format".to_string(),
        ));
    }
    Ok(trimmed.to_lowercase())
}
