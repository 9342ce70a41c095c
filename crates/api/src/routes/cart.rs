//! Route definitions for the per-user cart.

use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::cart;
use crate::state::AppState;

/// ```text
/// GET    /cart?userIdentifier=                -> list_cart
/// POST   /cart                                -> add_cart_item
/// DELETE /cart?userIdentifier=&propertyId=    -> delete_cart_item
/// DELETE /cart/clear?userIdentifier=          -> clear_cart
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/cart",
            get(cart::list_cart)
                .post(cart::add_cart_item)
                .delete(cart::delete_cart_item),
        )
        .route("/cart/clear", delete(cart::clear_cart))
}
