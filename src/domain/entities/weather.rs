//! Weather readings, the assembled report, and the provider contract.

use async_trait::async_trait;

use crate::domain::{ProviderError, Temperature};

/// Current conditions as returned by a weather provider.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentWeather {
    /// Temperature in Celsius; the only value conversion is based on
    pub celsius: f64,

    /// Provider's own Fahrenheit reading, kept for observability
    pub fahrenheit: f64,

    /// Canonical location name as reported by the provider (may be empty)
    pub city: String,
}

/// The final result for one postal code.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReport {
    pub city: String,
    pub temperature: Temperature,
}

impl WeatherReport {
    /// Assemble a report from a reading.
    ///
    /// The provider's city name wins; `resolved_city` is used when the
    /// provider leaves it blank.
    pub fn assemble(reading: CurrentWeather, resolved_city: &str) -> Self {
        let city = if reading.city.trim().is_empty() {
            resolved_city.to_owned()
        } else {
            reading.city
        };

        Self {
            city,
            temperature: Temperature::from_celsius(reading.celsius),
        }
    }
}

/// Source of current weather for a named city.
///
/// Implemented by the live HTTP client and by the mock used when no
/// credential is configured.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    /// Fetch current conditions for `city`.
    async fn current(&self, city: &str) -> Result<CurrentWeather, ProviderError>;

    /// Short name of the implementation, for startup logs.
    fn kind(&self) -> &'static str;
}
