//! Application Services
//!
//! Business logic services that coordinate domain operations.
//!
//! ## Available Services
//!
//! - **WeatherService**: location lookup, weather lookup and conversion

pub mod weather_service;

pub use weather_service::{WeatherError, WeatherService, WeatherServiceImpl};

#[cfg(test)]
pub use weather_service::MockWeatherService;
