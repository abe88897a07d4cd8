//! Health Check API Tests

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::json;

use crate::common::{test_settings, TestApp};

#[tokio::test]
async fn test_gateway_health_check_returns_ok() {
    let app = TestApp::gateway(&test_settings());
    let server = TestServer::new(app.router).unwrap();

    let response = server.get("/health").await;

    response.assert_status_ok();
    response.assert_json(&json!({"status": "ok"}));
}

/// Health does not depend on the providers being reachable.
#[tokio::test]
async fn test_resolver_health_check_returns_ok() {
    let app = TestApp::resolver(&test_settings());
    let server = TestServer::new(app.router).unwrap();

    let response = server.get("/health").await;

    response.assert_status_ok();
    response.assert_json(&json!({"status": "ok"}));
}

#[tokio::test]
async fn test_health_rejects_post() {
    let app = TestApp::gateway(&test_settings());

    let response = app.post_json("/health", "{}").await;

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}
