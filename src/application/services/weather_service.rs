//! Weather Service
//!
//! Orchestrates the resolver pipeline: postal code to city, city to current
//! weather, weather to a three-scale report.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info, instrument};

use crate::domain::{LocationLookup, ProviderError, WeatherProvider, WeatherReport, ZipCode};

/// Weather service trait
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WeatherService: Send + Sync {
    /// Resolve the current weather for a postal code.
    async fn weather_for(&self, zipcode: &ZipCode) -> Result<WeatherReport, WeatherError>;
}

/// Weather service errors
#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    #[error("can not find zipcode")]
    ZipcodeNotFound,

    #[error("location lookup failed: {0}")]
    Location(#[source] ProviderError),

    #[error("weather lookup failed: {0}")]
    Weather(#[source] ProviderError),
}

/// WeatherService implementation
pub struct WeatherServiceImpl<L, W>
where
    L: LocationLookup + ?Sized,
    W: WeatherProvider + ?Sized,
{
    locations: Arc<L>,
    weather: Arc<W>,
}

impl<L, W> WeatherServiceImpl<L, W>
where
    L: LocationLookup + ?Sized,
    W: WeatherProvider + ?Sized,
{
    pub fn new(locations: Arc<L>, weather: Arc<W>) -> Self {
        Self { locations, weather }
    }
}

#[async_trait]
impl<L, W> WeatherService for WeatherServiceImpl<L, W>
where
    L: LocationLookup + ?Sized,
    W: WeatherProvider + ?Sized,
{
    #[instrument(name = "resolve-weather", skip_all, fields(cep = %zipcode, city = tracing::field::Empty))]
    async fn weather_for(&self, zipcode: &ZipCode) -> Result<WeatherReport, WeatherError> {
        // Weather depends on the city, so the two lookups stay sequential.
        let city = match self.locations.city_for(zipcode).await {
            Ok(city) => city,
            Err(e) if e.is_not_found() => {
                info!("zipcode not known to location provider");
                return Err(WeatherError::ZipcodeNotFound);
            }
            Err(e) => {
                error!(error = %e, "location lookup failed");
                return Err(WeatherError::Location(e));
            }
        };
        tracing::Span::current().record("city", city.as_str());

        let reading = self.weather.current(&city).await.map_err(|e| {
            error!(error = %e, "weather lookup failed");
            WeatherError::Weather(e)
        })?;

        Ok(WeatherReport::assemble(reading, &city))
    }
}
