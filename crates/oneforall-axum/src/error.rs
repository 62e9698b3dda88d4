//! Axum-specific error types and mappings.
//!
//! Maps `CoreError` to HTTP status codes and renders every failure as an
//! [`ApiResponse`] envelope with `success: false`.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use oneforall_core::{CoreError, RepositoryError};
use thiserror::Error;

use crate::dto::ApiResponse;

/// Axum-specific error type.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Bad request (invalid input).
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl HttpError {
    /// Status code this error is rendered with.
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            Self::NotFound(msg) | Self::BadRequest(msg) | Self::Internal(msg) => msg,
        };

        (status, Json(ApiResponse::failure(message))).into_response()
    }
}

impl From<CoreError> for HttpError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Repository(repo_err) => repo_err.into(),
            CoreError::Validation(msg) => Self::BadRequest(msg),
        }
    }
}

impl From<RepositoryError> for HttpError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound(msg) => Self::NotFound(msg),
            other => {
                tracing::error!(error = %other, "Request failed in storage");
                Self::Internal(other.to_string())
            }
        }
    }
}

/// Map a `CoreError`, reporting a miss with the fixed client-facing `message`.
///
/// ```ignore
/// state.core.exams().get(&id).await.map_err(not_found_as("Exam not found"))?;
/// ```
pub fn not_found_as(message: &'static str) -> impl FnOnce(CoreError) -> HttpError {
    move |err| {
        if err.is_not_found() {
            HttpError::NotFound(message.to_string())
        } else {
            err.into()
        }
    }
}
