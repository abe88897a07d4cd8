//! Application Error Types
//!
//! Centralized error handling with Axum integration. Every client-facing
//! failure is rendered as `{"message": ...}` with one of a fixed set of
//! messages; internal detail stays in logs and spans.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

pub const MSG_INVALID_BODY: &str = "invalid request body";
pub const MSG_METHOD_NOT_ALLOWED: &str = "method not allowed";
pub const MSG_INVALID_ZIPCODE: &str = "invalid zipcode";
pub const MSG_ZIPCODE_NOT_FOUND: &str = "can not find zipcode";
pub const MSG_INTERNAL: &str = "internal server error";

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Body did not parse as the expected JSON shape
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Method not allowed")]
    MethodNotAllowed,

    /// Postal code is not exactly eight digits
    #[error("Invalid zipcode")]
    InvalidZipcode,

    /// Location provider explicitly reported no match
    #[error("Zipcode not found")]
    NotFound,

    /// Any upstream or internal failure; the detail is never sent to the client
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::InvalidZipcode => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The canonical message sent to the client.
    pub fn client_message(&self) -> &'static str {
        match self {
            AppError::BadRequest(_) => MSG_INVALID_BODY,
            AppError::MethodNotAllowed => MSG_METHOD_NOT_ALLOWED,
            AppError::InvalidZipcode => MSG_INVALID_ZIPCODE,
            AppError::NotFound => MSG_ZIPCODE_NOT_FOUND,
            AppError::Internal(_) => MSG_INTERNAL,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::BadRequest(detail) => tracing::debug!("Rejected request body: {}", detail),
            AppError::Internal(detail) => tracing::debug!("Internal error: {}", detail),
            _ => {}
        }

        let body = ErrorResponse {
            message: self.client_message().into(),
        };

        (self.status(), Json(body)).into_response()
    }
}
