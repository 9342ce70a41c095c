use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use haven_core::error::CoreError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce the uniform `{error, code}` JSON
/// failure body.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `haven_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(format!("Invalid request body: {}", rejection.body_text()))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, .. } => (
                    StatusCode::NOT_FOUND,
                    not_found_code(entity),
                    format!("{entity} not found"),
                ),
                CoreError::Validation { code, message } => {
                    (StatusCode::BAD_REQUEST, code.as_str(), message.clone())
                }
                CoreError::Conflict { code, message } => {
                    (StatusCode::CONFLICT, code.as_str(), message.clone())
                }
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        format!("Internal server error: {msg}"),
                    )
                }
            },

            AppError::Database(err) => classify_sqlx_error(err),

            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Map a missing entity to its contract error code.
fn not_found_code(entity: &str) -> &'static str {
    match entity {
        "Property" => "PROPERTY_NOT_FOUND",
        "Order" => "ORDER_NOT_FOUND",
        "Inquiry" => "INQUIRY_NOT_FOUND",
        "Favorite" => "FAVORITE_NOT_FOUND",
        "Cart item" => "CART_ITEM_NOT_FOUND",
        _ => "NOT_FOUND",
    }
}

/// Classify a sqlx error into an HTTP status, error code, and message.
///
/// - `RowNotFound` maps to 404.
/// - Unique constraint violations (constraint name starting with `uq_`) map
///   to 409; the favorites/cart constraints get their contract codes so a
///   raced insert reports the same shape as the handler pre-check.
/// - Everything else maps to 500 carrying the underlying error text.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        ),
        sqlx::Error::Database(db_err) => {
            // PostgreSQL unique constraint violation: error code 23505
            if db_err.code().as_deref() == Some("23505") {
                let constraint = db_err.constraint().unwrap_or("unknown");
                match constraint {
                    "uq_favorites_user_property" => {
                        return (
                            StatusCode::CONFLICT,
                            "DUPLICATE_FAVORITE",
                            "Property is already in favorites".to_string(),
                        )
                    }
                    "uq_cart_items_user_property" => {
                        return (
                            StatusCode::CONFLICT,
                            "DUPLICATE_CART_ITEM",
                            "Property is already in cart".to_string(),
                        )
                    }
                    c if c.starts_with("uq_") => {
                        return (
                            StatusCode::CONFLICT,
                            "CONFLICT",
                            format!("Duplicate value violates unique constraint: {c}"),
                        )
                    }
                    _ => {}
                }
            }
            tracing::error!(error = %db_err, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                format!("Internal server error: {db_err}"),
            )
        }
        other => {
            tracing::error!(error = %other, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                format!("Internal server error: {other}"),
            )
        }
    }
}
