//! Outbound HTTP Clients
//!
//! `reqwest` implementations of the domain collaborator traits:
//!
//! - **ViaCepClient**: `LocationLookup` against a ViaCEP-shaped API
//! - **WeatherApiClient**: `WeatherProvider` against a WeatherAPI-shaped API
//! - **FallbackWeatherProvider**: `WeatherProvider` returning a fixed reading
//! - **HttpResolverClient**: `WeatherResolver`, used by the gateway
//!
//! Each client owns one `reqwest::Client` built at startup with its own
//! timeout, and injects the current trace context into every request.

mod fallback;
mod resolver;
mod viacep;
mod weather_api;

pub use fallback::{FallbackWeatherProvider, MOCK_CELSIUS};
pub use resolver::HttpResolverClient;
pub use viacep::ViaCepClient;
pub use weather_api::WeatherApiClient;

use std::time::Duration;

use reqwest::Client;

use crate::domain::ProviderError;

const USER_AGENT: &str = concat!("cep-weather/", env!("CARGO_PKG_VERSION"));

/// Build an HTTP client whose every request is bounded by `timeout`.
pub(crate) fn build_client(timeout: Duration) -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .build()
}

/// Join a base URL and a path without doubling the slash.
pub(crate) fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Map a `reqwest` failure to the provider error taxonomy.
pub(crate) fn provider_error(err: reqwest::Error) -> ProviderError {
    if err.is_timeout() {
        ProviderError::Timeout
    } else if err.is_decode() {
        ProviderError::Decode(err.to_string())
    } else {
        ProviderError::Transport(err.to_string())
    }
}
