//! Route definitions and router construction.
//!
//! Axum 0.8 uses brace syntax for path parameters: `{id}`, `{user_id}`.

use std::sync::Arc;

use axum::http::HeaderValue;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::bootstrap::{AxumContext, CorsConfig};
use crate::dto::HealthResponse;
use crate::error::HttpError;
use crate::handlers;
use crate::state::AppState;

/// Build CORS layer from configuration.
fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    match config {
        CorsConfig::AllowAll => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
        CorsConfig::AllowOrigins(origins) => {
            let allowed: Vec<HeaderValue> = origins
                .iter()
                .filter_map(|o| match o.parse::<HeaderValue>() {
                    Ok(value) => Some(value),
                    Err(_) => {
                        tracing::warn!(origin = %o, "Ignoring invalid CORS origin");
                        None
                    }
                })
                .collect();
            CorsLayer::new()
                .allow_origin(allowed)
                .allow_methods(Any)
                .allow_headers(Any)
        }
    }
}

/// Build all API routes without the `/api` prefix (for nesting under `/api`).
pub(crate) fn api_routes() -> Router<AppState> {
    Router::new()
        // Exams API
        .route("/exams", get(handlers::exams::list))
        .route("/exams/{id}", get(handlers::exams::get))
        // Tools API
        .route("/tools", get(handlers::tools::list))
        // Conversions API
        .route("/conversions/request", post(handlers::conversions::request))
        .route("/conversions/{id}", get(handlers::conversions::status))
        .route(
            "/conversions/user/{user_id}",
            get(handlers::conversions::list_for_user),
        )
}

/// Create the main Axum router: `/health` plus everything under `/api`.
///
/// Layers, outermost first: CORS, request tracing, panic recovery.
pub fn create_router(ctx: AxumContext, cors_config: &CorsConfig) -> Router {
    let state: AppState = Arc::new(ctx);

    Router::new()
        .route("/health", get(health_check))
        .nest("/api", api_routes())
        .with_state(state)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(build_cors_layer(cors_config))
}

/// Health check endpoint.
pub(crate) async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::running())
}

/// Turn a handler panic into a 500 envelope.
pub fn handle_panic(err: Box<dyn std::any::Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic payload");
    tracing::error!(panic = detail, "Request handler panicked");

    HttpError::Internal("Internal server error".to_string()).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    async fn explode() -> &'static str {
        panic!("handler exploded")
    }

    #[tokio::test]
    async fn test_panicking_handler_yields_500_envelope() {
        let app = Router::new()
            .route("/explode", get(explode))
            .route("/health", get(health_check))
            .layer(CatchPanicLayer::custom(handle_panic));

        let response = app
            .clone()
            .oneshot(Request::builder().uri("/explode").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value["success"], false);
        assert_eq!(value["error"], "Internal server error");

        // The service keeps answering after a panic
        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
