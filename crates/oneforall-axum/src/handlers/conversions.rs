//! Conversion request handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use oneforall_core::ConversionRequest;

use crate::dto::{ApiResponse, ConversionResponse, CreateConversionRequest};
use crate::error::{HttpError, not_found_as};
use crate::extract::JsonBody;
use crate::state::AppState;

/// Record a new conversion request.
pub async fn request(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<CreateConversionRequest>,
) -> Result<(StatusCode, Json<ApiResponse<ConversionResponse>>), HttpError> {
    let created = state.core.conversions().request(req.into()).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(
            "Conversion request created successfully",
            ConversionResponse::queued(&created),
        )),
    ))
}

/// Get the status of one conversion request.
pub async fn status(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<ConversionResponse>>, HttpError> {
    let record = state
        .core
        .conversions()
        .get(&id)
        .await
        .map_err(not_found_as("Conversion not found"))?;
    Ok(Json(ApiResponse::ok(
        "Conversion status retrieved",
        ConversionResponse::in_progress(&record),
    )))
}

/// List a user's conversion requests, oldest first.
pub async fn list_for_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<ApiResponse<Vec<ConversionRequest>>>, HttpError> {
    let conversions = state.core.conversions().list_for_user(&user_id).await?;
    Ok(Json(ApiResponse::ok(
        "User conversions retrieved successfully",
        conversions,
    )))
}
