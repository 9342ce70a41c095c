//! Handlers for checkout orders.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use haven_core::error::CoreError;
use haven_core::types::DbId;
use haven_db::models::order::{CreateOrder, Order, OrderFilter, UpdateOrder};
use haven_db::repositories::OrderRepo;

use super::ensure_property_exists;
use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::query::{self, IdParam};
use crate::response::MessageResponse;
use crate::state::AppState;

/// Raw query parameters for `GET /orders`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderListParams {
    pub id: Option<String>,
    pub status: Option<String>,
    pub property_id: Option<String>,
    pub limit: Option<String>,
    pub offset: Option<String>,
}

#[derive(Serialize)]
struct OrderEnvelope {
    order: Order,
}

#[derive(Serialize)]
struct OrderWithMessage {
    order: Order,
    message: &'static str,
}

#[derive(Serialize)]
struct OrderListEnvelope {
    orders: Vec<Order>,
    count: i64,
}

/// GET /orders
///
/// With `?id=` returns a single order; otherwise a filtered list, newest
/// first, with its total match count.
pub async fn list_orders(
    State(state): State<AppState>,
    Query(params): Query<OrderListParams>,
) -> AppResult<impl IntoResponse> {
    if let Some(ref raw) = params.id {
        let id = query::parse_id(raw, "order")?;
        let order = fetch_order(&state, id).await?;
        return Ok(Json(OrderEnvelope { order }).into_response());
    }

    let filter = OrderFilter {
        status: query::filter_value(&params.status),
        property_id: query::opt_i64(&params.property_id),
    };

    let orders = OrderRepo::list(
        &state.pool,
        &filter,
        query::opt_i64(&params.limit),
        query::opt_i64(&params.offset),
    )
    .await?;
    let count = OrderRepo::count(&state.pool, &filter).await?;

    Ok(Json(OrderListEnvelope { orders, count }).into_response())
}

/// POST /orders
pub async fn create_order(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateOrder>,
) -> AppResult<impl IntoResponse> {
    let validated = input.validate()?;
    ensure_property_exists(&state, validated.property_id).await?;

    let order = OrderRepo::insert(&state.pool, &validated).await?;

    tracing::info!(
        order_id = order.id,
        property_id = order.property_id,
        "Order created"
    );

    Ok((
        StatusCode::CREATED,
        Json(OrderWithMessage {
            order,
            message: "Order created successfully",
        }),
    ))
}

/// PUT /orders?id=
pub async fn update_order(
    State(state): State<AppState>,
    Query(params): Query<IdParam>,
    AppJson(input): AppJson<UpdateOrder>,
) -> AppResult<impl IntoResponse> {
    let id = query::require_id(&params.id, "order")?;

    fetch_order(&state, id).await?;

    let patch = input.validate()?;
    if patch.is_empty() {
        return Err(AppError::Core(CoreError::validation(
            "NO_UPDATES",
            "No valid fields provided for update".to_string(),
        )));
    }
    if let Some(property_id) = patch.property_id {
        ensure_property_exists(&state, property_id).await?;
    }

    let order = OrderRepo::update(&state.pool, id, &patch)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Order", id }))?;

    tracing::info!(order_id = id, "Order updated");

    Ok(Json(OrderWithMessage {
        order,
        message: "Order updated successfully",
    }))
}

/// DELETE /orders?id=
pub async fn delete_order(
    State(state): State<AppState>,
    Query(params): Query<IdParam>,
) -> AppResult<impl IntoResponse> {
    let id = query::require_id(&params.id, "order")?;

    let deleted = OrderRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound { entity: "Order", id }));
    }

    tracing::info!(order_id = id, "Order deleted");

    Ok(Json(MessageResponse {
        message: "Order deleted successfully",
    }))
}

async fn fetch_order(state: &AppState, id: DbId) -> Result<Order, AppError> {
    OrderRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Order", id }))
}
