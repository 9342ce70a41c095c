//! Handlers for the per-user cart.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use haven_core::error::CoreError;
use haven_db::models::cart_item::{CartItem, CreateCartItem};
use haven_db::repositories::CartItemRepo;

use super::ensure_property_exists;
use super::favorite::{parse_property_id, require_property_id, require_user_identifier};
use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::response::{BulkDeleteResponse, MessageResponse};
use crate::state::AppState;

/// Query parameters for the cart surface.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartParams {
    pub user_identifier: Option<String>,
    pub property_id: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CartItemWithMessage {
    cart_item: CartItem,
    message: &'static str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CartListEnvelope {
    cart_items: Vec<CartItem>,
    count: i64,
}

/// GET /cart?userIdentifier=
pub async fn list_cart(
    State(state): State<AppState>,
    Query(params): Query<CartParams>,
) -> AppResult<impl IntoResponse> {
    let user_identifier = require_user_identifier(&params.user_identifier)?;

    let cart_items = CartItemRepo::list_by_user(&state.pool, &user_identifier).await?;
    let count = cart_items.len() as i64;

    Ok(Json(CartListEnvelope { cart_items, count }))
}

/// POST /cart
pub async fn add_cart_item(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateCartItem>,
) -> AppResult<impl IntoResponse> {
    let user_identifier = require_user_identifier(&input.user_identifier)?;
    let property_id = require_property_id(input.property_id)?;

    ensure_property_exists(&state, property_id).await?;

    if CartItemRepo::exists(&state.pool, &user_identifier, property_id).await? {
        return Err(AppError::Core(CoreError::conflict(
            "DUPLICATE_CART_ITEM",
            "Property is already in cart".to_string(),
        )));
    }

    let cart_item = CartItemRepo::insert(&state.pool, &user_identifier, property_id).await?;

    tracing::info!(property_id, user = %user_identifier, "Cart item added");

    Ok((
        StatusCode::CREATED,
        Json(CartItemWithMessage {
            cart_item,
            message: "Property added to cart",
        }),
    ))
}

/// DELETE /cart?userIdentifier=&propertyId=
pub async fn delete_cart_item(
    State(state): State<AppState>,
    Query(params): Query<CartParams>,
) -> AppResult<impl IntoResponse> {
    let user_identifier = require_user_identifier(&params.user_identifier)?;
    let property_id = match params.property_id {
        Some(ref raw) => parse_property_id(raw)?,
        None => {
            return Err(AppError::Core(CoreError::validation(
                "MISSING_PROPERTY_ID",
                "Property ID is required".to_string(),
            )))
        }
    };

    let deleted = CartItemRepo::delete(&state.pool, &user_identifier, property_id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Cart item",
            id: property_id,
        }));
    }

    tracing::info!(property_id, user = %user_identifier, "Cart item removed");

    Ok(Json(MessageResponse {
        message: "Property removed from cart",
    }))
}

/// DELETE /cart/clear?userIdentifier=
///
/// Removes every cart row for the user; clearing an empty cart succeeds
/// with a zero count.
pub async fn clear_cart(
    State(state): State<AppState>,
    Query(params): Query<CartParams>,
) -> AppResult<impl IntoResponse> {
    let user_identifier = require_user_identifier(&params.user_identifier)?;

    let deleted_count = CartItemRepo::clear_for_user(&state.pool, &user_identifier).await?;

    tracing::info!(deleted_count, user = %user_identifier, "Cart cleared");

    Ok(Json(BulkDeleteResponse {
        message: "Cart cleared successfully",
        deleted_count,
    }))
}
