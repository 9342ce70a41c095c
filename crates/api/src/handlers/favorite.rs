//! Handlers for per-user favorites.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use haven_core::error::CoreError;
use haven_core::types::DbId;
use haven_db::models::favorite::{CreateFavorite, Favorite};
use haven_db::repositories::FavoriteRepo;

use super::ensure_property_exists;
use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::response::MessageResponse;
use crate::state::AppState;

/// Query parameters for the favorites surface.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteParams {
    pub user_identifier: Option<String>,
    pub property_id: Option<String>,
}

#[derive(Serialize)]
struct FavoriteWithMessage {
    favorite: Favorite,
    message: &'static str,
}

#[derive(Serialize)]
struct FavoriteListEnvelope {
    favorites: Vec<Favorite>,
    count: i64,
}

/// GET /favorites?userIdentifier=
pub async fn list_favorites(
    State(state): State<AppState>,
    Query(params): Query<FavoriteParams>,
) -> AppResult<impl IntoResponse> {
    let user_identifier = require_user_identifier(&params.user_identifier)?;

    let favorites = FavoriteRepo::list_by_user(&state.pool, &user_identifier).await?;
    let count = favorites.len() as i64;

    Ok(Json(FavoriteListEnvelope { favorites, count }))
}

/// POST /favorites
pub async fn create_favorite(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateFavorite>,
) -> AppResult<impl IntoResponse> {
    let user_identifier = require_user_identifier(&input.user_identifier)?;
    let property_id = require_property_id(input.property_id)?;

    ensure_property_exists(&state, property_id).await?;

    if FavoriteRepo::exists(&state.pool, &user_identifier, property_id).await? {
        return Err(AppError::Core(CoreError::conflict(
            "DUPLICATE_FAVORITE",
            "Property is already in favorites".to_string(),
        )));
    }

    let favorite = FavoriteRepo::insert(&state.pool, &user_identifier, property_id).await?;

    tracing::info!(property_id, user = %user_identifier, "Favorite added");

    Ok((
        StatusCode::CREATED,
        Json(FavoriteWithMessage {
            favorite,
            message: "Property added to favorites",
        }),
    ))
}

/// DELETE /favorites?userIdentifier=&propertyId=
///
/// Addresses the row by (user, property), not by row id.
pub async fn delete_favorite(
    State(state): State<AppState>,
    Query(params): Query<FavoriteParams>,
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

    let deleted = FavoriteRepo::delete(&state.pool, &user_identifier, property_id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Favorite",
            id: property_id,
        }));
    }

    tracing::info!(property_id, user = %user_identifier, "Favorite removed");

    Ok(Json(MessageResponse {
        message: "Property removed from favorites",
    }))
}

// ---------------------------------------------------------------------------
// Helpers (shared with the cart handlers)
// ---------------------------------------------------------------------------

pub(crate) fn require_user_identifier(raw: &Option<String>) -> Result<String, AppError> {
    match raw.as_deref().map(str::trim) {
        Some(value) if !value.is_empty() => Ok(value.to_string()),
        Some(_) => Err(AppError::Core(CoreError::validation(
            "INVALID_USER_IDENTIFIER",
            "User identifier must be a non-empty string".to_string(),
        ))),
        None => Err(AppError::Core(CoreError::validation(
            "MISSING_USER_IDENTIFIER",
            "User identifier is required".to_string(),
        ))),
    }
}

pub(crate) fn require_property_id(raw: Option<DbId>) -> Result<DbId, AppError> {
    match raw {
        Some(id) if id > 0 => Ok(id),
        Some(_) => Err(AppError::Core(CoreError::validation(
            "INVALID_PROPERTY_ID",
            "Property ID must be a positive number".to_string(),
        ))),
        None => Err(AppError::Core(CoreError::validation(
            "MISSING_PROPERTY_ID",
            "Property ID is required".to_string(),
        ))),
    }
}

pub(crate) fn parse_property_id(raw: &str) -> Result<DbId, AppError> {
    match raw.trim().parse::<DbId>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(AppError::Core(CoreError::validation(
            "INVALID_PROPERTY_ID",
            "Property ID must be a positive number".to_string(),
        ))),
    }
}
