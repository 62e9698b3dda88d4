//! Shared fixtures for router integration tests.

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use http_body_util::BodyExt;
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use oneforall_axum::bootstrap::{CorsConfig, ServerConfig, bootstrap};
use oneforall_axum::routes::create_router;
use oneforall_core::UploadLimits;

pub const EXAMS_JSON: &str = r#"[
  {
    "id": "neet",
    "title": "NEET",
    "icon": "🩺",
    "description": "National Eligibility cum Entrance Test",
    "documents": [
      {"id": "photo", "name": "Photograph", "size": "10-200 KB", "format": "JPG", "max_size": 204800, "required": true}
    ],
    "created_at": "2024-01-01T00:00:00Z",
    "updated_at": "2024-01-01T00:00:00Z"
  },
  {
    "id": "jee-main",
    "title": "JEE Main",
    "icon": "📐",
    "description": "Joint Entrance Examination",
    "documents": [],
    "created_at": "2024-01-01T00:00:00Z",
    "updated_at": "2024-01-01T00:00:00Z"
  }
]"#;

pub const TOOLS_JSON: &str = r#"[
  {
    "id": "image",
    "category": "Image Tools",
    "icon": "🖼️",
    "tools": [
      {"id": "compress", "category": "image", "icon": "📦", "name": "Compress", "description": "Shrink images", "logo": "compress.png"}
    ]
  }
]"#;

/// A data directory seeded with the sample catalogs.
pub fn seeded_data_dir() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("exams.json"), EXAMS_JSON).unwrap();
    std::fs::write(dir.path().join("tools.json"), TOOLS_JSON).unwrap();
    dir
}

pub fn test_config(data_dir: &TempDir, cors: CorsConfig) -> ServerConfig {
    ServerConfig {
        port: 0, // Not used in tests
        data_dir: data_dir.path().to_path_buf(),
        cors,
        upload_limits: UploadLimits::default(),
    }
}

/// Router over a freshly seeded data directory.
pub async fn test_app() -> (Router, TempDir) {
    test_app_with_cors(CorsConfig::AllowAll).await
}

pub async fn test_app_with_cors(cors: CorsConfig) -> (Router, TempDir) {
    let dir = seeded_data_dir();
    let config = test_config(&dir, cors.clone());
    let ctx = bootstrap(config).await.unwrap();
    (create_router(ctx, &cors), dir)
}

pub async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone().oneshot(request).await.unwrap()
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let response = send(app, Request::builder().uri(uri).body(Body::empty()).unwrap()).await;
    split(response).await
}

pub async fn post_json(app: &Router, uri: &str, body: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_owned()))
        .unwrap();
    split(send(app, request).await).await
}

async fn split(response: Response<Body>) -> (StatusCode, Value) {
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&body)
        .unwrap_or_else(|e| panic!("expected JSON body ({e}): {}", String::from_utf8_lossy(&body)));
    (status, value)
}
