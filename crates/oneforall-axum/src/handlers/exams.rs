//! Exam catalog handlers.

use axum::Json;
use axum::extract::{Path, State};
use oneforall_core::Exam;

use crate::dto::ApiResponse;
use crate::error::{HttpError, not_found_as};
use crate::state::AppState;

/// List every exam.
pub async fn list(State(state): State<AppState>) -> Result<Json<ApiResponse<Vec<Exam>>>, HttpError> {
    let exams = state.core.exams().list().await?;
    Ok(Json(ApiResponse::ok("Exams retrieved successfully", exams)))
}

/// Get one exam by id.
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Exam>>, HttpError> {
    let exam = state
        .core
        .exams()
        .get(&id)
        .await
        .map_err(not_found_as("Exam not found"))?;
    Ok(Json(ApiResponse::ok("Exam retrieved successfully", exam)))
}
