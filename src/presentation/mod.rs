//! Presentation Layer
//!
//! HTTP routes, handlers and request tracing middleware for both services.

pub mod http;
pub mod middleware;
