//! # Domain Entities
//!
//! Per-request data flowing through the pipeline, and the contracts of the
//! external collaborators that produce it.
//!
//! ## Entities
//!
//! - **CurrentWeather**: a raw provider reading
//! - **WeatherReport**: city plus temperature in three scales
//! - **RelayedResponse**: a resolver response as seen by the gateway
//!
//! ## Collaborator Traits
//!
//! - **LocationLookup**: postal code to city
//! - **WeatherProvider**: city to current weather
//! - **WeatherResolver**: postal code to a complete resolver response
//!
//! The traits are implemented in the infrastructure layer, following the
//! dependency inversion principle.

mod location;
mod relay;
mod weather;

pub use location::LocationLookup;
pub use relay::{RelayedResponse, WeatherResolver};
pub use weather::{CurrentWeather, WeatherProvider, WeatherReport};

#[cfg(test)]
pub use location::MockLocationLookup;
#[cfg(test)]
pub use relay::MockWeatherResolver;
#[cfg(test)]
pub use weather::MockWeatherProvider;
