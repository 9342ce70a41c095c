//! Shared response envelope types for API handlers.
//!
//! Entity-specific envelopes (`{ "property": ... }`, `{ "orders": [...],
//! "count": N }`) live next to their handlers; the shapes here are the
//! ones every resource shares.

use serde::Serialize;

/// Plain `{ "message": ... }` success body, used by delete endpoints.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// Bulk-delete body: `{ "message": ..., "deletedCount": N }`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkDeleteResponse {
    pub message: &'static str,
    pub deleted_count: u64,
}
