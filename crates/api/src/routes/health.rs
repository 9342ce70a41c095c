//! Liveness endpoint, mounted at the server root alongside the resources.

use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
}

/// Reports "degraded" rather than failing the request when the database
/// probe errors, so load balancers still get a readable body.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = haven_db::health_check(&state.pool).await.is_ok();

    Json(HealthResponse {
        status: if db_healthy { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
