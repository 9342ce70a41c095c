//! Handlers for property inquiries.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use haven_core::domain::INQUIRY_STATUSES;
use haven_core::error::CoreError;
use haven_core::types::DbId;
use haven_core::validation;
use haven_db::models::inquiry::{CreateInquiry, Inquiry, InquiryFilter, UpdateInquiry};
use haven_db::repositories::InquiryRepo;

use super::ensure_property_exists;
use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::query::{self, IdParam};
use crate::response::MessageResponse;
use crate::state::AppState;

/// Raw query parameters for `GET /inquiries`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InquiryListParams {
    pub id: Option<String>,
    pub status: Option<String>,
    pub property_id: Option<String>,
    pub limit: Option<String>,
    pub offset: Option<String>,
}

#[derive(Serialize)]
struct InquiryEnvelope {
    inquiry: Inquiry,
}

#[derive(Serialize)]
struct InquiryWithMessage {
    inquiry: Inquiry,
    message: &'static str,
}

#[derive(Serialize)]
struct InquiryListEnvelope {
    inquiries: Vec<Inquiry>,
    count: i64,
}

/// GET /inquiries
///
/// With `?id=` returns a single inquiry; otherwise a filtered list,
/// newest first. Unlike the numeric filters, an unknown `status` value
/// is rejected rather than ignored.
pub async fn list_inquiries(
    State(state): State<AppState>,
    Query(params): Query<InquiryListParams>,
) -> AppResult<impl IntoResponse> {
    if let Some(ref raw) = params.id {
        let id = query::parse_id(raw, "inquiry")?;
        let inquiry = fetch_inquiry(&state, id).await?;
        return Ok(Json(InquiryEnvelope { inquiry }).into_response());
    }

    let status = match query::filter_value(&params.status) {
        Some(value) => Some(validation::one_of(
            &value,
            INQUIRY_STATUSES,
            "Status",
            "INVALID_STATUS",
        )?),
        None => None,
    };

    let filter = InquiryFilter {
        status,
        property_id: query::opt_i64(&params.property_id),
    };

    let inquiries = InquiryRepo::list(
        &state.pool,
        &filter,
        query::opt_i64(&params.limit),
        query::opt_i64(&params.offset),
    )
    .await?;
    let count = InquiryRepo::count(&state.pool, &filter).await?;

    Ok(Json(InquiryListEnvelope { inquiries, count }).into_response())
}

/// POST /inquiries
pub async fn create_inquiry(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateInquiry>,
) -> AppResult<impl IntoResponse> {
    let validated = input.validate()?;
    ensure_property_exists(&state, validated.property_id).await?;

    let inquiry = InquiryRepo::insert(&state.pool, &validated).await?;

    tracing::info!(
        inquiry_id = inquiry.id,
        property_id = inquiry.property_id,
        "Inquiry created"
    );

    Ok((
        StatusCode::CREATED,
        Json(InquiryWithMessage {
            inquiry,
            message: "Inquiry submitted successfully",
        }),
    ))
}

/// PUT /inquiries?id=
pub async fn update_inquiry(
    State(state): State<AppState>,
    Query(params): Query<IdParam>,
    AppJson(input): AppJson<UpdateInquiry>,
) -> AppResult<impl IntoResponse> {
    let id = query::require_id(&params.id, "inquiry")?;

    fetch_inquiry(&state, id).await?;

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

    let inquiry = InquiryRepo::update(&state.pool, id, &patch)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Inquiry",
            id,
        }))?;

    tracing::info!(inquiry_id = id, "Inquiry updated");

    Ok(Json(InquiryWithMessage {
        inquiry,
        message: "Inquiry updated successfully",
    }))
}

/// DELETE /inquiries?id=
pub async fn delete_inquiry(
    State(state): State<AppState>,
    Query(params): Query<IdParam>,
) -> AppResult<impl IntoResponse> {
    let id = query::require_id(&params.id, "inquiry")?;

    let deleted = InquiryRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Inquiry",
            id,
        }));
    }

    tracing::info!(inquiry_id = id, "Inquiry deleted");

    Ok(Json(MessageResponse {
        message: "Inquiry deleted successfully",
    }))
}

async fn fetch_inquiry(state: &AppState, id: DbId) -> Result<Inquiry, AppError> {
    InquiryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Inquiry",
            id,
        }))
}
