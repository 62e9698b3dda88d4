//! Liveness check body.

use serde::Serialize;

/// Body of `GET /health`.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: &'static str,
}

impl HealthResponse {
    pub const fn running() -> Self {
        Self {
            status: "ok",
            message: "1forall backend is running",
        }
    }
}
