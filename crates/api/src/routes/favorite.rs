//! Route definitions for per-user favorites.

use axum::routing::get;
use axum::Router;

use crate::handlers::favorite;
use crate::state::AppState;

/// ```text
/// GET    /favorites?userIdentifier=               -> list_favorites
/// POST   /favorites                               -> create_favorite
/// DELETE /favorites?userIdentifier=&propertyId=   -> delete_favorite
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/favorites",
        get(favorite::list_favorites)
            .post(favorite::create_favorite)
            .delete(favorite::delete_favorite),
    )
}
