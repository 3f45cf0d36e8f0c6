//! Integration tests for the Axum web adapter.
//!
//! These tests drive the real router (real probe, short liveness delay)
//! through `tower::ServiceExt::oneshot` without binding a socket.

use std::time::Duration;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use tower::ServiceExt;

use syscheck_axum::{CorsConfig, ServerConfig, bootstrap, create_router};
use syscheck_core::CheckConfig;

/// Router over a healthy host with a test-sized liveness delay.
fn test_app() -> Router {
    let config = ServerConfig {
        port: 0, // Not used - requests go through oneshot
        check: CheckConfig {
            liveness_delay: Duration::from_millis(10),
            ..CheckConfig::default()
        },
        cors: CorsConfig::AllowAll,
    };
    create_router(bootstrap(&config), &config.cors)
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_endpoint_returns_ok() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&body[..], b"OK");
}

#[tokio::test]
async fn quick_test_without_name_is_bad_request() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/test/quick")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Name parameter is required");
}

#[tokio::test]
async fn quick_test_greets_valid_name() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/test/quick?name=Al")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert!(json["message"].as_str().unwrap().contains("Al"));
    assert_eq!(json["name"], "Al");
    assert!(json["timestamp"].as_str().is_some());
}

#[tokio::test]
async fn quick_test_short_name_is_a_failing_verdict_not_an_error() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/test/quick?name=A")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    // The orchestrator decided - HTTP-wise this request succeeded
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "Name must be at least 2 characters long");
}

#[tokio::test]
async fn system_test_with_blank_name_is_bad_request() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/test")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"name": ""}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Name is required");
}

#[tokio::test]
async fn system_test_resolves_for_valid_name() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/test")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"name": "Bob"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert!(json["message"].as_str().unwrap().contains("Bob"));
}

#[tokio::test]
async fn status_endpoint_returns_snapshot() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/status")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["cpuCount"].as_u64().unwrap() >= 1);
}
