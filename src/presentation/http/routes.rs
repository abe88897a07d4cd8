//! Route Configuration
//!
//! One router per service. Both expose `GET /health`; a wrong method on the
//! work route is answered with a JSON 405.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers;
use crate::startup::{GatewayState, ResolverState};

/// Create the gateway router
pub fn create_gateway_router(state: GatewayState) -> Router {
    Router::new()
        .route(
            "/cep",
            post(handlers::cep::forward_cep).fallback(handlers::method_not_allowed),
        )
        .route("/health", get(handlers::health::health_check))
        .with_state(state)
}

/// Create the resolver router
pub fn create_resolver_router(state: ResolverState) -> Router {
    Router::new()
        .route(
            "/weather",
            post(handlers::weather::get_weather).fallback(handlers::method_not_allowed),
        )
        .route("/health", get(handlers::health::health_check))
        .with_state(state)
}
