//! HTTP Handlers
//!
//! Request handlers for both services.

pub mod cep;
pub mod health;
pub mod weather;

use crate::shared::error::AppError;

/// Fallback for any method other than the one a route accepts.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
