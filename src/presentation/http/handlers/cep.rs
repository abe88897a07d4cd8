//! Gateway Handlers
//!
//! `POST /cep` validates the postal code and relays the resolver's answer.

use axum::{
    body::Body,
    extract::State,
    http::{header::CONTENT_TYPE, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use tracing::{error, instrument};

use crate::domain::{RelayedResponse, ZipCode};
use crate::presentation::http::extractors::CepPayload;
use crate::shared::error::AppError;
use crate::startup::GatewayState;

const DEFAULT_CONTENT_TYPE: &str = "application/json";

/// Validate the postal code and forward it to the resolver.
///
/// Invalid codes are answered here with 422; the resolver is never called
/// for them.
#[instrument(name = "handle-cep-request", skip_all, fields(cep = %body.cep))]
pub async fn forward_cep(
    State(state): State<GatewayState>,
    CepPayload(body): CepPayload,
) -> Result<Response, AppError> {
    let zipcode = ZipCode::parse(&body.cep).map_err(|_| AppError::InvalidZipcode)?;

    let relayed = state.resolver.resolve(&zipcode).await.map_err(|e| {
        error!(error = %e, "resolver call failed");
        AppError::Internal(e.to_string())
    })?;

    relay(relayed)
}

/// Rebuild the resolver's response unchanged.
fn relay(relayed: RelayedResponse) -> Result<Response, AppError> {
    let status = StatusCode::from_u16(relayed.status).map_err(|e| {
        error!(status = relayed.status, "resolver returned an invalid status");
        AppError::Internal(e.to_string())
    })?;

    let content_type = relayed
        .content_type
        .as_deref()
        .and_then(|value| HeaderValue::from_str(value).ok())
        .unwrap_or_else(|| HeaderValue::from_static(DEFAULT_CONTENT_TYPE));

    Ok((status, [(CONTENT_TYPE, content_type)], Body::from(relayed.body)).into_response())
}
