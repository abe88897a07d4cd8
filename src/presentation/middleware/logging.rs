//! Request Tracing Middleware
//!
//! One span per inbound request. The span's parent is the remote caller's
//! span when the request carries a `traceparent` header, so a gateway request
//! and the resolver work it triggers end up in a single trace.

use std::sync::Arc;
use std::time::Duration;

use axum::{body::Body, http::Request, http::Response};
use tower_http::{
    classify::{ServerErrorsAsFailures, SharedClassifier},
    trace::{DefaultOnRequest, MakeSpan, TraceLayer},
};
use tracing::{field::Empty, Level, Span};

use crate::shared::trace_context::TracePropagator;

/// Span factory that parents each request span on the inbound trace context.
#[derive(Debug, Clone)]
pub struct RequestSpan {
    propagator: Arc<TracePropagator>,
    service: Arc<str>,
}

impl RequestSpan {
    pub fn new(propagator: Arc<TracePropagator>, service: &str) -> Self {
        Self {
            propagator,
            service: Arc::from(service),
        }
    }
}

impl<B> MakeSpan<B> for RequestSpan {
    fn make_span(&mut self, request: &Request<B>) -> Span {
        let span = tracing::info_span!(
            "http_request",
            service = %self.service,
            method = %request.method(),
            uri = %request.uri().path(),
            status = Empty,
            latency_ms = Empty,
            trace_id = Empty,
        );

        self.propagator.set_parent(&span, request.headers());
        span
    }
}

/// Records status and latency on the request span.
pub fn record_response(response: &Response<Body>, latency: Duration, span: &Span) {
    span.record("status", response.status().as_u16());
    span.record("latency_ms", latency.as_millis() as u64);
    tracing::info!(parent: span, status = response.status().as_u16(), "request completed");
}

pub type RequestTraceLayer = TraceLayer<
    SharedClassifier<ServerErrorsAsFailures>,
    RequestSpan,
    DefaultOnRequest,
    fn(&Response<Body>, Duration, &Span),
>;

/// Create the request tracing layer for a service.
pub fn create_trace_layer(propagator: Arc<TracePropagator>, service: &str) -> RequestTraceLayer {
    TraceLayer::new_for_http()
        .make_span_with(RequestSpan::new(propagator, service))
        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
        .on_response(record_response as fn(&Response<Body>, Duration, &Span))
}
