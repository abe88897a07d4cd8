//! HTTP Presentation
//!
//! Routers, handlers and extractors for the gateway and resolver services.

pub mod extractors;
pub mod handlers;
pub mod routes;
