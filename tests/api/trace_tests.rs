//! Trace Context Propagation Tests
//!
//! An OpenTelemetry-backed subscriber is installed for the current thread so
//! request spans carry real span contexts.

use axum::http::StatusCode;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::trace::SdkTracerProvider;
use serde_json::json;
use tracing::subscriber::DefaultGuard;
use tracing_subscriber::layer::SubscriberExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::common::{gateway_settings, resolver_settings, TestApp};

const TRACE_ID: &str = "4bf92f3577b34da6a3ce929d0e0e4736";
const INBOUND: &str = "00-4bf92f3577b34da6a3ce929d0e0e4736-00f067aa0ba902b7-01";

/// Thread-local subscriber with an OpenTelemetry layer.
fn otel_subscriber() -> (SdkTracerProvider, DefaultGuard) {
    let provider = SdkTracerProvider::builder().build();
    let subscriber = tracing_subscriber::registry()
        .with(tracing_opentelemetry::layer().with_tracer(provider.tracer("cep-test")));
    let guard = tracing::subscriber::set_default(subscriber);
    (provider, guard)
}

async fn outbound_traceparents(server: &MockServer) -> Vec<String> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .filter_map(|request| {
            request
                .headers
                .get("traceparent")
                .and_then(|value| value.to_str().ok())
                .map(str::to_owned)
        })
        .collect()
}

fn assert_same_trace(traceparent: &str) {
    let parts: Vec<&str> = traceparent.split('-').collect();
    assert_eq!(parts.len(), 4, "malformed traceparent {traceparent}");
    assert_eq!(parts[1], TRACE_ID);
    // A new span on our side, not the caller's span echoed back
    assert_ne!(parts[2], "00f067aa0ba902b7");
}

#[tokio::test]
async fn test_gateway_forwards_inbound_trace() {
    let (_provider, _guard) = otel_subscriber();
    let resolver = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&resolver)
        .await;

    let app = TestApp::gateway(&gateway_settings(&resolver.uri()));
    let response = app
        .post_json_with_headers("/cep", r#"{"cep":"01001000"}"#, &[("traceparent", INBOUND)])
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let traceparents = outbound_traceparents(&resolver).await;
    assert_eq!(traceparents.len(), 1);
    assert_same_trace(&traceparents[0]);
}

#[tokio::test]
async fn test_resolver_forwards_inbound_trace_to_providers() {
    let (_provider, _guard) = otel_subscriber();
    let stubs = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/01001000/json/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"localidade": "São Paulo"})))
        .mount(&stubs)
        .await;
    Mock::given(method("GET"))
        .and(path("/current.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "location": {"name": "Sao Paulo"},
            "current": {"temp_c": 20.0, "temp_f": 68.0}
        })))
        .mount(&stubs)
        .await;

    let app = TestApp::resolver(&resolver_settings(&stubs.uri(), Some("test-key")));
    let response = app
        .post_json_with_headers("/weather", r#"{"cep":"01001000"}"#, &[("traceparent", INBOUND)])
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let traceparents = outbound_traceparents(&stubs).await;
    assert_eq!(traceparents.len(), 2, "location and weather calls both carry context");
    for traceparent in &traceparents {
        assert_same_trace(traceparent);
    }
}
