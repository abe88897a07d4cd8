//! Custom Extractors
//!
//! Axum extractors for request parsing.

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};

use crate::application::dto::CepRequest;
use crate::shared::error::AppError;

/// `{"cep": ...}` body parsed as JSON regardless of the declared content type.
///
/// Rejects with `AppError::BadRequest` when the body is unreadable or does
/// not have the expected shape.
#[derive(Debug, Clone)]
pub struct CepPayload(pub CepRequest);

impl<S> FromRequest<S> for CepPayload
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;

        // Derived struct deserialization also accepts a JSON array.
        let value = serde_json::from_slice::<serde_json::Value>(&bytes)
            .map_err(|e| AppError::BadRequest(e.to_string()))?;
        if !value.is_object() {
            return Err(AppError::BadRequest("body is not a JSON object".into()));
        }

        let payload = serde_json::from_value::<CepRequest>(value)
            .map_err(|e| AppError::BadRequest(e.to_string()))?;

        Ok(Self(payload))
    }
}
