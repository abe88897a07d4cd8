//! # Configuration Module
//!
//! This module handles application configuration loading and management.
//! Configuration can be loaded from:
//! - Environment variables (prefixed with APP__, plus the well-known
//!   `SERVICE_B_URL`, `WEATHER_API_KEY` and `OTEL_EXPORTER_OTLP_ENDPOINT`)
//! - Configuration files (config/default.toml, config/{environment}.toml)
//! - .env files (via dotenvy)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use cep_weather::config::{ServiceRole, Settings};
//!
//! let settings = Settings::load(ServiceRole::Gateway)?;
//! println!("Gateway will listen on {}", settings.server_addr());
//! ```

mod settings;

pub use settings::*;
