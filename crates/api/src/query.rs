//! Shared query-string parsing for API handlers.
//!
//! Query parameters arrive as raw strings so the contract's error codes can
//! be produced: a malformed `id` is a 400 `INVALID_ID`, while malformed
//! optional numeric filters and `limit`/`offset` are silently ignored and
//! fall back to their defaults.

use haven_core::error::CoreError;
use haven_core::types::DbId;
use serde::Deserialize;

use crate::error::AppError;

/// `?id=` parameter shared by the get/update/delete surfaces.
#[derive(Debug, Deserialize)]
pub struct IdParam {
    pub id: Option<String>,
}

/// Parse a required positive ID parameter.
///
/// Missing values report `MISSING_ID`; non-numeric or non-positive values
/// report `INVALID_ID`. The `label` names the resource in the message.
pub fn require_id(raw: &Option<String>, label: &str) -> Result<DbId, AppError> {
    match raw {
        Some(value) => parse_id(value, label),
        None => Err(AppError::Core(CoreError::validation(
            "MISSING_ID",
            format!("{label} ID is required"),
        ))),
    }
}

/// Parse a positive ID from a raw string, rejecting anything else.
pub fn parse_id(raw: &str, label: &str) -> Result<DbId, AppError> {
    match raw.trim().parse::<DbId>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(AppError::Core(CoreError::validation(
            "INVALID_ID",
            format!("Invalid {label} ID"),
        ))),
    }
}

/// Parse an optional i64 filter; malformed values are ignored.
pub fn opt_i64(raw: &Option<String>) -> Option<i64> {
    raw.as_deref().and_then(|v| v.trim().parse::<i64>().ok())
}

/// Parse an optional i32 filter; malformed values are ignored.
pub fn opt_i32(raw: &Option<String>) -> Option<i32> {
    raw.as_deref().and_then(|v| v.trim().parse::<i32>().ok())
}

/// Parse an optional boolean flag; anything other than `true`/`false` is
/// ignored.
pub fn flag(raw: &Option<String>) -> Option<bool> {
    match raw.as_deref().map(str::trim) {
        Some("true") => Some(true),
        Some("false") => Some(false),
        _ => None,
    }
}

/// Normalize an optional text filter: trims, and drops empty strings and
/// the wildcard value `all`.
pub fn filter_value(raw: &Option<String>) -> Option<String> {
    raw.as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty() && *v != "all")
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use haven_core::error::CoreError;

    fn validation_code(err: AppError) -> String {
        match err {
            AppError::Core(CoreError::Validation { code, .. }) => code,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn require_id_accepts_positive_numbers() {
        assert_eq!(require_id(&Some("42".into()), "property").unwrap(), 42);
    }

    #[test]
    fn require_id_missing_and_invalid_codes() {
        assert_eq!(validation_code(require_id(&None, "property").unwrap_err()), "MISSING_ID");
        assert_eq!(
            validation_code(require_id(&Some("abc".into()), "property").unwrap_err()),
            "INVALID_ID"
        );
        assert_eq!(
            validation_code(require_id(&Some("0".into()), "property").unwrap_err()),
            "INVALID_ID"
        );
        assert_eq!(
            validation_code(require_id(&Some("-3".into()), "property").unwrap_err()),
            "INVALID_ID"
        );
    }

    #[test]
    fn malformed_optional_numbers_are_ignored() {
        assert_eq!(opt_i64(&Some("250000".into())), Some(250_000));
        assert_eq!(opt_i64(&Some("cheap".into())), None);
        assert_eq!(opt_i32(&Some("2".into())), Some(2));
        assert_eq!(opt_i32(&Some("two".into())), None);
        assert_eq!(opt_i64(&None), None);
    }

    #[test]
    fn flag_only_accepts_booleans() {
        assert_eq!(flag(&Some("true".into())), Some(true));
        assert_eq!(flag(&Some("false".into())), Some(false));
        assert_eq!(flag(&Some("yes".into())), None);
        assert_eq!(flag(&None), None);
    }

    #[test]
    fn filter_value_drops_empty_and_wildcard() {
        assert_eq!(filter_value(&Some("house".into())), Some("house".to_string()));
        assert_eq!(filter_value(&Some(" all ".into())), None);
        assert_eq!(filter_value(&Some("  ".into())), None);
        assert_eq!(filter_value(&None), None);
    }
}
