//! Common Test Utilities
//!
//! Shared helpers, fixtures, and test infrastructure.

#![allow(dead_code)]

use std::net::SocketAddr;

use axum::{
    body::{to_bytes, Body, Bytes},
    http::Request,
    response::Response,
    Router,
};
use tower::ServiceExt;

use cep_weather::config::{
    GatewaySettings, ResolverSettings, ServerSettings, ServiceRole, Settings, TelemetrySettings,
};
use cep_weather::startup::{build_router, Application};

/// Settings pointing at local stubs, with span export disabled.
pub fn test_settings() -> Settings {
    Settings {
        server: ServerSettings {
            host: "127.0.0.1".into(),
            port: 0,
        },
        gateway: GatewaySettings {
            resolver_url: "http://127.0.0.1:1".into(),
            timeout_secs: 5,
        },
        resolver: ResolverSettings {
            location_base_url: "http://127.0.0.1:1".into(),
            weather_base_url: "http://127.0.0.1:1".into(),
            weather_api_key: None,
            lookup_timeout_secs: 5,
        },
        telemetry: TelemetrySettings {
            enabled: false,
            otlp_endpoint: "http://localhost:4317".into(),
            service_name: "cep-test".into(),
        },
        environment: "test".into(),
    }
}

/// Gateway settings forwarding to `resolver_url`.
pub fn gateway_settings(resolver_url: &str) -> Settings {
    let mut settings = test_settings();
    settings.gateway.resolver_url = resolver_url.into();
    settings
}

/// Resolver settings using `stub_url` for both providers.
pub fn resolver_settings(stub_url: &str, weather_api_key: Option<&str>) -> Settings {
    let mut settings = test_settings();
    settings.resolver.location_base_url = stub_url.into();
    settings.resolver.weather_base_url = stub_url.into();
    settings.resolver.weather_api_key = weather_api_key.map(str::to_string);
    settings
}

/// Test application builder
pub struct TestApp {
    pub router: Router,
}

impl TestApp {
    pub fn gateway(settings: &Settings) -> Self {
        Self {
            router: build_router(ServiceRole::Gateway, settings).unwrap(),
        }
    }

    pub fn resolver(settings: &Settings) -> Self {
        Self {
            router: build_router(ServiceRole::Resolver, settings).unwrap(),
        }
    }

    /// Make a GET request to the application
    pub async fn get(&self, uri: &str) -> Response {
        self.request("GET", uri, Body::empty()).await
    }

    /// Make a POST request with JSON body
    pub async fn post_json(&self, uri: &str, body: &str) -> Response {
        self.router
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("Content-Type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    /// Make a POST request with JSON body and extra headers
    pub async fn post_json_with_headers(
        &self,
        uri: &str,
        body: &str,
        headers: &[(&str, &str)],
    ) -> Response {
        let mut builder = Request::builder()
            .method("POST")
            .uri(uri)
            .header("Content-Type", "application/json");
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }

        self.router
            .clone()
            .oneshot(builder.body(Body::from(body.to_string())).unwrap())
            .await
            .unwrap()
    }

    pub async fn request(&self, method: &str, uri: &str, body: Body) -> Response {
        self.router
            .clone()
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .body(body)
                    .unwrap(),
            )
            .await
            .unwrap()
    }
}

/// Collect a response body.
pub async fn body_bytes(response: Response) -> Bytes {
    to_bytes(response.into_body(), usize::MAX).await.unwrap()
}

/// Collect a response body as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

/// Start a real service on an ephemeral port and return its address.
pub async fn spawn_app(role: ServiceRole, settings: Settings) -> SocketAddr {
    let application = Application::build(role, settings).await.unwrap();
    let addr = application.local_addr().unwrap();
    tokio::spawn(application.run_until_stopped());
    addr
}
