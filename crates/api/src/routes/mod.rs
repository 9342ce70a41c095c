//! Route definitions, one file per resource.

use axum::Router;

use crate::state::AppState;

pub mod cart;
pub mod favorite;
pub mod health;
pub mod inquiry;
pub mod order;
pub mod property;

/// Assemble all resource routers. Mounted at the server root; `/health`
/// is merged separately by the router builder.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(property::router())
        .merge(order::router())
        .merge(inquiry::router())
        .merge(favorite::router())
        .merge(cart::router())
}
