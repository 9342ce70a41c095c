//! Route definitions for checkout orders.

use axum::routing::get;
use axum::Router;

use crate::handlers::order;
use crate::state::AppState;

/// ```text
/// GET    /orders         -> list_orders (or single via ?id=)
/// POST   /orders         -> create_order
/// PUT    /orders?id=     -> update_order
/// DELETE /orders?id=     -> delete_order
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/orders",
        get(order::list_orders)
            .post(order::create_order)
            .put(order::update_order)
            .delete(order::delete_order),
    )
}
