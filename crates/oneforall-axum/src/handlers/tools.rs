//! Tool catalog handlers.

use axum::Json;
use axum::extract::State;
use oneforall_core::ToolCategory;

use crate::dto::ApiResponse;
use crate::error::HttpError;
use crate::state::AppState;

/// List every tool category with its tools.
pub async fn list(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<ToolCategory>>>, HttpError> {
    let tools = state.core.tools().list().await?;
    Ok(Json(ApiResponse::ok("Tools retrieved successfully", tools)))
}
