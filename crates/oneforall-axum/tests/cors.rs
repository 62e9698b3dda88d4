//! Integration tests for CORS handling.

mod common;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};

use common::{send, test_app, test_app_with_cors};
use oneforall_axum::CorsConfig;

fn preflight(origin: &str) -> Request<Body> {
    Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/conversions/request")
        .header(header::ORIGIN, origin)
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn preflight_is_answered_for_any_origin_by_default() {
    let (app, _dir) = test_app().await;

    let response = send(&app, preflight("http://localhost:8081")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
}

#[tokio::test]
async fn simple_requests_carry_cors_headers() {
    let (app, _dir) = test_app().await;

    let request = Request::builder()
        .uri("/api/exams")
        .header(header::ORIGIN, "http://localhost:8081")
        .body(Body::empty())
        .unwrap();
    let response = send(&app, request).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(
        response
            .headers()
            .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN)
    );
}

#[tokio::test]
async fn configured_origins_are_enforced() {
    let (app, _dir) =
        test_app_with_cors(CorsConfig::AllowOrigins(vec!["https://1forall.in".into()])).await;

    let allowed = send(&app, preflight("https://1forall.in")).await;
    assert_eq!(
        allowed.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "https://1forall.in"
    );

    let denied = send(&app, preflight("https://evil.example")).await;
    assert!(
        !denied
            .headers()
            .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN)
    );
}
