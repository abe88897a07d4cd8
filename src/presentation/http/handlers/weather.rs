//! Resolver Handlers

use axum::{extract::State, Json};
use tracing::instrument;

use crate::application::dto::WeatherResponse;
use crate::application::services::WeatherError;
use crate::domain::ZipCode;
use crate::presentation::http::extractors::CepPayload;
use crate::shared::error::AppError;
use crate::startup::ResolverState;

/// Resolve the current weather for a postal code.
///
/// The code is validated again; callers other than the gateway are not
/// trusted to have done it.
#[instrument(name = "handle-weather-request", skip_all, fields(cep = %body.cep))]
pub async fn get_weather(
    State(state): State<ResolverState>,
    CepPayload(body): CepPayload,
) -> Result<Json<WeatherResponse>, AppError> {
    let zipcode = ZipCode::parse(&body.cep).map_err(|_| AppError::InvalidZipcode)?;

    let report = state
        .weather_service
        .weather_for(&zipcode)
        .await
        .map_err(|e| match e {
            WeatherError::ZipcodeNotFound => AppError::NotFound,
            e => AppError::Internal(e.to_string()),
        })?;

    Ok(Json(WeatherResponse::from(report)))
}
