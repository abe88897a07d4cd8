//! Application settings and configuration structures.

use std::fmt;
use std::time::Duration;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Placeholder credential shipped in sample env files; treated as "not configured".
pub const WEATHER_API_KEY_PLACEHOLDER: &str = "your_weather_api_key_here";

/// Which of the two services this process runs as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceRole {
    /// Front-facing service: validates and forwards to the resolver
    Gateway,
    /// Back-end service: location lookup, weather lookup, conversion
    Resolver,
}

impl ServiceRole {
    /// Default listening port for the role.
    pub fn default_port(self) -> u16 {
        match self {
            ServiceRole::Gateway => 8080,
            ServiceRole::Resolver => 8081,
        }
    }

    /// Default `service.name` reported to the trace collector.
    pub fn default_service_name(self) -> &'static str {
        match self {
            ServiceRole::Gateway => "cep-gateway",
            ServiceRole::Resolver => "cep-resolver",
        }
    }
}

impl fmt::Display for ServiceRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceRole::Gateway => f.write_str("gateway"),
            ServiceRole::Resolver => f.write_str("resolver"),
        }
    }
}

/// Root configuration structure containing all application settings.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Server configuration (host, port)
    pub server: ServerSettings,

    /// Gateway -> resolver forwarding
    pub gateway: GatewaySettings,

    /// Resolver -> external providers
    pub resolver: ResolverSettings,

    /// Trace export configuration
    pub telemetry: TelemetrySettings,

    /// Current environment (development, staging, production)
    pub environment: String,
}

/// Server binding configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    /// Host address to bind to (e.g., "0.0.0.0")
    pub host: String,

    /// Port number to listen on (0 picks an ephemeral port)
    pub port: u16,
}

/// Gateway forwarding configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct GatewaySettings {
    /// Base URL of the resolver service
    pub resolver_url: String,

    /// Timeout for the whole resolver round-trip, in seconds
    pub timeout_secs: u64,
}

/// Resolver provider configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ResolverSettings {
    /// Base URL of the postal-code lookup (`{base}/{cep}/json/`)
    pub location_base_url: String,

    /// Base URL of the weather provider (`{base}/current.json`)
    pub weather_base_url: String,

    /// Weather provider credential; absent means the mock provider is used
    pub weather_api_key: Option<String>,

    /// Timeout applied to each provider call, in seconds
    pub lookup_timeout_secs: u64,
}

/// OpenTelemetry export configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct TelemetrySettings {
    /// Export spans over OTLP when true
    pub enabled: bool,

    /// OTLP gRPC collector endpoint
    pub otlp_endpoint: String,

    /// `service.name` resource attribute
    pub service_name: String,
}

impl Settings {
    /// Load settings for the given role from environment variables and configuration files.
    ///
    /// The loading order is:
    /// 1. built-in defaults
    /// 2. config/default.toml (base configuration)
    /// 3. config/{RUN_ENV}.toml (environment-specific overrides)
    /// 4. `APP__` prefixed environment variables
    /// 5. Well-known simple variables (`SERVICE_B_URL`, `WEATHER_API_KEY`, ...)
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if configuration cannot be loaded or parsed,
    /// or if a value fails validation.
    pub fn load(role: ServiceRole) -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let environment = std::env::var("RUN_ENV").unwrap_or_else(|_| "development".into());

        Config::builder()
            .set_default("environment", environment.clone())?
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", i64::from(role.default_port()))?
            .set_default("gateway.resolver_url", "http://localhost:8081")?
            .set_default("gateway.timeout_secs", 30)?
            .set_default("resolver.location_base_url", "https://viacep.com.br/ws")?
            .set_default("resolver.weather_base_url", "http://api.weatherapi.com/v1")?
            .set_default("resolver.lookup_timeout_secs", 10)?
            .set_default("telemetry.enabled", true)?
            .set_default("telemetry.otlp_endpoint", "http://localhost:4317")?
            .set_default("telemetry.service_name", role.default_service_name())?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // APP__GATEWAY__TIMEOUT_SECS=5 -> gateway.timeout_secs = 5
            .add_source(
                Environment::default()
                    .prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("server.host", std::env::var("SERVER_HOST").ok())?
            .set_override_option("server.port", std::env::var("SERVER_PORT").ok())?
            .set_override_option("gateway.resolver_url", std::env::var("SERVICE_B_URL").ok())?
            .set_override_option(
                "resolver.location_base_url",
                std::env::var("LOCATION_API_URL").ok(),
            )?
            .set_override_option(
                "resolver.weather_base_url",
                std::env::var("WEATHER_API_URL").ok(),
            )?
            .set_override_option(
                "resolver.weather_api_key",
                std::env::var("WEATHER_API_KEY").ok(),
            )?
            .set_override_option(
                "telemetry.otlp_endpoint",
                std::env::var("OTEL_EXPORTER_OTLP_ENDPOINT").ok(),
            )?
            .set_override_option(
                "telemetry.service_name",
                std::env::var("OTEL_SERVICE_NAME").ok(),
            )?
            .build()?
            .try_deserialize()
            .and_then(|settings: Self| {
                settings.validate()?;
                Ok(settings)
            })
    }

    /// Reject values the services cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.gateway.timeout_secs == 0 || self.resolver.lookup_timeout_secs == 0 {
            return Err(ConfigError::Message(
                "timeouts must be at least one second".into(),
            ));
        }

        for (key, url) in [
            ("gateway.resolver_url", &self.gateway.resolver_url),
            ("resolver.location_base_url", &self.resolver.location_base_url),
            ("resolver.weather_base_url", &self.resolver.weather_base_url),
        ] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ConfigError::Message(format!(
                    "{} must be an http(s) URL, got '{}'",
                    key, url
                )));
            }
        }

        Ok(())
    }

    /// Get the full server address as a string.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl GatewaySettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl ResolverSettings {
    pub fn lookup_timeout(&self) -> Duration {
        Duration::from_secs(self.lookup_timeout_secs)
    }

    /// The weather credential, if one is really configured.
    ///
    /// Blank values and the sample placeholder count as unset.
    pub fn weather_credential(&self) -> Option<&str> {
        self.weather_api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty() && *key != WEATHER_API_KEY_PLACEHOLDER)
    }
}

impl TelemetrySettings {
    /// Collector endpoint with a scheme; bare `host:port` values get `http://`.
    pub fn endpoint_url(&self) -> String {
        if self.otlp_endpoint.contains("://") {
            self.otlp_endpoint.clone()
        } else {
            format!("http://{}", self.otlp_endpoint)
        }
    }
}
