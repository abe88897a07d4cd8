//! # CEP Weather
//!
//! Two cooperating HTTP services that turn a Brazilian postal code (CEP)
//! into the current temperature of its city:
//!
//! - **gateway** (`POST /cep`): validates the code and forwards it
//! - **resolver** (`POST /weather`): looks up the city, then its weather,
//!   and reports Celsius, Fahrenheit and Kelvin
//!
//! Both services share one W3C trace per request and export spans over OTLP.
//!
//! ## Architecture
//!
//! - **Domain Layer**: value objects, entities and collaborator traits
//! - **Application Layer**: the weather service and DTOs
//! - **Infrastructure Layer**: outbound HTTP clients
//! - **Presentation Layer**: routers, handlers and request tracing
//!
//! ## Module Structure
//!
//! ```text
//! cep_weather/
//! +-- config/         Configuration management
//! +-- domain/         ZipCode, Temperature, lookup traits
//! +-- application/    WeatherService and DTOs
//! +-- infrastructure/ ViaCEP, WeatherAPI and resolver clients
//! +-- presentation/   HTTP routes and middleware
//! +-- shared/         Errors and trace-context propagation
//! ```

// Configuration module
pub mod config;

// Domain layer - Core rules
pub mod domain;

// Application layer - Services
pub mod application;

// Infrastructure layer - External implementations
pub mod infrastructure;

// Presentation layer - HTTP handlers
pub mod presentation;

// Shared utilities
pub mod shared;

// Application startup and state management
pub mod startup;

// Telemetry and observability
pub mod telemetry;
