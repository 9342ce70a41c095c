//! Route definitions for the property resource.
//!
//! Two addressing surfaces share one handler layer:
//! - `?id=` on `/properties` (get/update/delete by query parameter)
//! - `/properties/{id}` path routes

use axum::routing::get;
use axum::Router;

use crate::handlers::property;
use crate::state::AppState;

/// ```text
/// GET    /properties         -> list_properties (or single via ?id=)
/// POST   /properties         -> create_property
/// PUT    /properties?id=     -> update_property
/// DELETE /properties?id=     -> delete_property
/// GET    /properties/{id}    -> get_property
/// PUT    /properties/{id}    -> update_property_by_path
/// DELETE /properties/{id}    -> delete_property_by_path
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/properties",
            get(property::list_properties)
                .post(property::create_property)
                .put(property::update_property)
                .delete(property::delete_property),
        )
        .route(
            "/properties/{id}",
            get(property::get_property)
                .put(property::update_property_by_path)
                .delete(property::delete_property_by_path),
        )
}
