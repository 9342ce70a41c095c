use crate::types::DbId;

/// Domain-level error type shared across the workspace.
///
/// `Validation` and `Conflict` carry the public error `code` because the
/// API contract pins a field-specific code for every rejected input
/// (e.g. `MISSING_TITLE`, `DUPLICATE_FAVORITE`).
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{entity} not found (id {id})")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {message}")]
    Validation { code: String, message: String },

    #[error("Conflict: {message}")]
    Conflict { code: String, message: String },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Build a `Validation` error from a code and human-readable message.
    pub fn validation(code: impl Into<String>, message: impl Into<String>) -> Self {
        CoreError::Validation {
            code: code.into(),
            message: message.into(),
        }
    }

    /// Build a `Conflict` error from a code and human-readable message.
    pub fn conflict(code: impl Into<String>, message: impl Into<String>) -> Self {
        CoreError::Conflict {
            code: code.into(),
            message: message.into(),
        }
    }
}
