use haven_core::types::DbId;
use haven_db::models::order::Order;

/// Errors surfaced by the client store and its HTTP backend.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The server answered with an `{error, code}` failure body.
    #[error("{message} ({code})")]
    Api {
        status: u16,
        code: String,
        message: String,
    },

    /// The request never produced a usable response.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Local identity file could not be read or written.
    #[error("Identity file error: {0}")]
    Identity(#[from] std::io::Error),
}

impl ClientError {
    /// True when the server reported a 404 for the addressed resource.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ClientError::Api { status: 404, .. })
    }
}

/// Aggregate result of a partially failed checkout.
///
/// Orders in `created` were placed; `failures` pairs each failed property
/// with its error. Nothing is rolled back.
#[derive(Debug, thiserror::Error)]
#[error("checkout placed {} orders, {} failed", created.len(), failures.len())]
pub struct CheckoutError {
    pub created: Vec<Order>,
    pub failures: Vec<(DbId, ClientError)>,
}
