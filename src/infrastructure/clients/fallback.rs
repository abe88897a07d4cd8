//! Weather provider used when no credential is configured.
//!
//! Never touches the network. Lets the whole pipeline run without a live
//! weather account while keeping the conversion path identical.

use async_trait::async_trait;
use tracing::{info, instrument};

use crate::domain::{celsius_to_fahrenheit, CurrentWeather, ProviderError, WeatherProvider};

/// Fixed reading returned for every city.
pub const MOCK_CELSIUS: f64 = 22.5;

#[derive(Debug, Clone, Copy, Default)]
pub struct FallbackWeatherProvider;

impl FallbackWeatherProvider {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl WeatherProvider for FallbackWeatherProvider {
    #[instrument(name = "mock-weather", skip_all, fields(location = %city, mock_data = true))]
    async fn current(&self, city: &str) -> Result<CurrentWeather, ProviderError> {
        info!("no weather credential configured, returning mock reading");

        Ok(CurrentWeather {
            celsius: MOCK_CELSIUS,
            fahrenheit: celsius_to_fahrenheit(MOCK_CELSIUS),
            city: city.to_owned(),
        })
    }

    fn kind(&self) -> &'static str {
        "mock"
    }
}
