//! WeatherAPI current-conditions client.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::http::{HeaderMap, StatusCode};
use reqwest::Client;
use serde::Deserialize;
use tracing::{field, instrument, warn, Span};

use super::{build_client, join_url, provider_error};
use crate::domain::{celsius_to_kelvin, CurrentWeather, ProviderError, WeatherProvider};
use crate::shared::trace_context::TracePropagator;

#[derive(Debug, Deserialize)]
struct CurrentPayload {
    location: LocationPayload,
    current: ConditionsPayload,
}

#[derive(Debug, Deserialize)]
struct LocationPayload {
    #[serde(default)]
    name: String,
}

#[derive(Debug, Deserialize)]
struct ConditionsPayload {
    temp_c: f64,
    temp_f: f64,
}

impl From<CurrentPayload> for CurrentWeather {
    fn from(payload: CurrentPayload) -> Self {
        Self {
            celsius: payload.current.temp_c,
            fahrenheit: payload.current.temp_f,
            city: payload.location.name,
        }
    }
}

/// Live `WeatherProvider` backed by `GET {base}/current.json`.
#[derive(Clone)]
pub struct WeatherApiClient {
    client: Client,
    base_url: String,
    api_key: String,
    propagator: Arc<TracePropagator>,
}

impl std::fmt::Debug for WeatherApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherApiClient")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

impl WeatherApiClient {
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
        propagator: Arc<TracePropagator>,
    ) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: build_client(timeout)?,
            base_url: base_url.into(),
            api_key: api_key.into(),
            propagator,
        })
    }

    fn url_for(&self, city: &str) -> String {
        format!(
            "{}?key={}&q={}&aqi=no",
            join_url(&self.base_url, "current.json"),
            urlencoding::encode(&self.api_key),
            urlencoding::encode(city)
        )
    }
}

#[async_trait]
impl WeatherProvider for WeatherApiClient {
    #[instrument(
        name = "get-weather-from-api",
        skip_all,
        fields(
            location = %city,
            mock_data = false,
            temp_celsius = field::Empty,
            temp_fahrenheit = field::Empty,
            temp_kelvin = field::Empty,
        )
    )]
    async fn current(&self, city: &str) -> Result<CurrentWeather, ProviderError> {
        let mut headers = HeaderMap::new();
        self.propagator.inject(&Span::current(), &mut headers);

        let response = self
            .client
            .get(self.url_for(city))
            .headers(headers)
            .send()
            .await
            .map_err(provider_error)?;

        let status = response.status();
        if status != StatusCode::OK {
            match response.text().await {
                Ok(body) => warn!(status = status.as_u16(), body = %body, "weather provider rejected request"),
                Err(e) => warn!(status = status.as_u16(), error = %e, "weather provider rejected request, body unreadable"),
            }
            return Err(ProviderError::UnexpectedStatus(status.as_u16()));
        }

        let payload: CurrentPayload = response.json().await.map_err(provider_error)?;
        let reading = CurrentWeather::from(payload);

        let span = Span::current();
        span.record("temp_celsius", reading.celsius);
        span.record("temp_fahrenheit", reading.fahrenheit);
        span.record("temp_kelvin", celsius_to_kelvin(reading.celsius));

        Ok(reading)
    }

    fn kind(&self) -> &'static str {
        "weatherapi"
    }
}
