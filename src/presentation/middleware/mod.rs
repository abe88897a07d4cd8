//! Middleware
//!
//! Tower middleware for request processing.

pub mod logging;

pub use logging::{create_trace_layer, RequestSpan};
