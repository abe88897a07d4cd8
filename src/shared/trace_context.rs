//! W3C Trace Context propagation over HTTP headers.
//!
//! A `TracePropagator` is built once at startup and handed to the request
//! span factory (extraction) and to every outbound client (injection). No
//! global propagator is installed.

use axum::http::{HeaderMap, HeaderName, HeaderValue};
use opentelemetry::{
    propagation::{Extractor, Injector, TextMapPropagator},
    trace::TraceContextExt,
    Context,
};
use opentelemetry_sdk::propagation::TraceContextPropagator;
use tracing::{field, Span};
use tracing_opentelemetry::OpenTelemetrySpanExt;

/// W3C Trace Context header name
pub const TRACEPARENT: &str = "traceparent";

/// Adapter for extracting W3C Trace Context from HTTP headers
struct HeadersExtractor<'a>(&'a HeaderMap);

impl Extractor for HeadersExtractor<'_> {
    fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(|v| v.to_str().ok())
    }

    fn keys(&self) -> Vec<&str> {
        self.0.keys().map(|k| k.as_str()).collect()
    }
}

/// Adapter for injecting W3C Trace Context into HTTP headers
struct HeadersInjector<'a>(&'a mut HeaderMap);

impl Injector for HeadersInjector<'_> {
    fn set(&mut self, key: &str, value: String) {
        if let (Ok(name), Ok(val)) = (
            HeaderName::from_bytes(key.as_bytes()),
            HeaderValue::from_str(&value),
        ) {
            self.0.insert(name, val);
        }
    }
}

/// Carries trace context across the gateway -> resolver -> provider hops.
#[derive(Debug, Clone)]
pub struct TracePropagator {
    inner: TraceContextPropagator,
}

impl Default for TracePropagator {
    fn default() -> Self {
        Self::new()
    }
}

impl TracePropagator {
    pub fn new() -> Self {
        Self {
            inner: TraceContextPropagator::new(),
        }
    }

    /// Inject the OpenTelemetry context of `span` into outbound headers.
    ///
    /// Adds nothing when the span is not backed by an OpenTelemetry layer.
    pub fn inject(&self, span: &Span, headers: &mut HeaderMap) {
        self.inject_context(&span.context(), headers);
    }

    pub fn inject_context(&self, cx: &Context, headers: &mut HeaderMap) {
        self.inner.inject_context(cx, &mut HeadersInjector(headers));
    }

    /// Extract the remote parent context from inbound headers.
    pub fn extract(&self, headers: &HeaderMap) -> Context {
        self.inner.extract(&HeadersExtractor(headers))
    }

    /// Make the remote caller's span the parent of `span`.
    ///
    /// `span` should declare an empty `trace_id` field; it is filled for log
    /// correlation when the headers carry a valid context.
    pub fn set_parent(&self, span: &Span, headers: &HeaderMap) {
        let parent = self.extract(headers);
        let span_context = parent.span().span_context().clone();

        if span_context.is_valid() {
            span.record("trace_id", field::display(span_context.trace_id()));
        }

        let _ = span.set_parent(parent);
    }
}
