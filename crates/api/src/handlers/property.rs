//! Handlers for the property listing resource.
//!
//! Serves both addressing surfaces: `?id=` on the resource root and
//! `/properties/{id}` path routes. Both go through the same repository,
//! so a write through one is immediately visible through the other.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use haven_core::error::CoreError;
use haven_core::types::DbId;
use haven_db::models::property::{CreateProperty, Property, PropertyFilter, UpdateProperty};
use haven_db::repositories::PropertyRepo;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::query::{self, IdParam};
use crate::response::MessageResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Query parameters and envelopes
// ---------------------------------------------------------------------------

/// Raw query parameters for `GET /properties`. Numeric values arrive as
/// strings so malformed filters can be ignored instead of rejecting the
/// whole request.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyListParams {
    pub id: Option<String>,
    pub search: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
    pub location: Option<String>,
    #[serde(rename = "type")]
    pub property_type: Option<String>,
    pub min_bedrooms: Option<String>,
    pub min_bathrooms: Option<String>,
    pub status: Option<String>,
    pub featured: Option<String>,
    pub limit: Option<String>,
    pub offset: Option<String>,
}

#[derive(Serialize)]
struct PropertyEnvelope {
    property: Property,
}

#[derive(Serialize)]
struct PropertyWithMessage {
    property: Property,
    message: &'static str,
}

#[derive(Serialize)]
struct PropertyListEnvelope {
    properties: Vec<Property>,
    count: i64,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /properties
///
/// With `?id=` returns a single property; otherwise a filtered, paginated
/// list with its total match count.
pub async fn list_properties(
    State(state): State<AppState>,
    Query(params): Query<PropertyListParams>,
) -> AppResult<impl IntoResponse> {
    if let Some(ref raw) = params.id {
        let id = query::parse_id(raw, "property")?;
        let property = fetch_property(&state, id).await?;
        return Ok(Json(PropertyEnvelope { property }).into_response());
    }

    let filter = PropertyFilter {
        search: text_filter(&params.search),
        min_price: query::opt_i64(&params.min_price),
        max_price: query::opt_i64(&params.max_price),
        location: text_filter(&params.location),
        property_type: query::filter_value(&params.property_type),
        min_bedrooms: query::opt_i32(&params.min_bedrooms),
        min_bathrooms: query::opt_i32(&params.min_bathrooms),
        status: query::filter_value(&params.status),
        featured: query::flag(&params.featured),
    };

    let properties = PropertyRepo::list(
        &state.pool,
        &filter,
        query::opt_i64(&params.limit),
        query::opt_i64(&params.offset),
    )
    .await?;
    let count = PropertyRepo::count(&state.pool, &filter).await?;

    Ok(Json(PropertyListEnvelope { properties, count }).into_response())
}

/// GET /properties/{id}
pub async fn get_property(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let id = query::parse_id(&raw_id, "property")?;
    let property = fetch_property(&state, id).await?;
    Ok(Json(PropertyEnvelope { property }))
}

/// POST /properties
pub async fn create_property(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateProperty>,
) -> AppResult<impl IntoResponse> {
    let validated = input.validate()?;
    let property = PropertyRepo::insert(&state.pool, &validated).await?;

    tracing::info!(property_id = property.id, title = %property.title, "Property created");

    Ok((
        StatusCode::CREATED,
        Json(PropertyWithMessage {
            property,
            message: "Property created successfully",
        }),
    ))
}

/// PUT /properties?id=
pub async fn update_property(
    State(state): State<AppState>,
    Query(params): Query<IdParam>,
    AppJson(input): AppJson<UpdateProperty>,
) -> AppResult<impl IntoResponse> {
    let id = query::require_id(&params.id, "property")?;
    apply_property_update(&state, id, input).await
}

/// PUT /properties/{id}
pub async fn update_property_by_path(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    AppJson(input): AppJson<UpdateProperty>,
) -> AppResult<impl IntoResponse> {
    let id = query::parse_id(&raw_id, "property")?;
    apply_property_update(&state, id, input).await
}

/// DELETE /properties?id=
pub async fn delete_property(
    State(state): State<AppState>,
    Query(params): Query<IdParam>,
) -> AppResult<impl IntoResponse> {
    let id = query::require_id(&params.id, "property")?;
    apply_property_delete(&state, id).await
}

/// DELETE /properties/{id}
pub async fn delete_property_by_path(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let id = query::parse_id(&raw_id, "property")?;
    apply_property_delete(&state, id).await
}

// ---------------------------------------------------------------------------
// Shared logic
// ---------------------------------------------------------------------------

async fn fetch_property(state: &AppState, id: DbId) -> Result<Property, AppError> {
    PropertyRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Property",
            id,
        }))
}

async fn apply_property_update(
    state: &AppState,
    id: DbId,
    input: UpdateProperty,
) -> AppResult<axum::response::Response> {
    if !PropertyRepo::exists(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Property",
            id,
        }));
    }

    let patch = input.validate()?;
    if patch.is_empty() {
        return Err(AppError::Core(CoreError::validation(
            "NO_UPDATES",
            "No valid fields provided for update".to_string(),
        )));
    }

    let property = PropertyRepo::update(&state.pool, id, &patch)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Property",
            id,
        }))?;

    tracing::info!(property_id = id, "Property updated");

    Ok(Json(PropertyWithMessage {
        property,
        message: "Property updated successfully",
    })
    .into_response())
}

async fn apply_property_delete(state: &AppState, id: DbId) -> AppResult<axum::response::Response> {
    let deleted = PropertyRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Property",
            id,
        }));
    }

    tracing::info!(property_id = id, "Property deleted");

    Ok(Json(MessageResponse {
        message: "Property deleted successfully",
    })
    .into_response())
}

/// Trim a free-text parameter, dropping empty values but keeping `all`
/// (which is only a wildcard for the enum-valued filters).
fn text_filter(raw: &Option<String>) -> Option<String> {
    raw.as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
