//! Route definitions for property inquiries.

use axum::routing::get;
use axum::Router;

use crate::handlers::inquiry;
use crate::state::AppState;

/// ```text
/// GET    /inquiries         -> list_inquiries (or single via ?id=)
/// POST   /inquiries         -> create_inquiry
/// PUT    /inquiries?id=     -> update_inquiry
/// DELETE /inquiries?id=     -> delete_inquiry
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/inquiries",
        get(inquiry::list_inquiries)
            .post(inquiry::create_inquiry)
            .put(inquiry::update_inquiry)
            .delete(inquiry::delete_inquiry),
    )
}
