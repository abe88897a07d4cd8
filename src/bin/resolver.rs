//! # CEP Resolver
//!
//! Back-end service: postal code to city, city to weather, weather to a
//! three-scale temperature report.

use anyhow::Result;
use tracing::info;

use cep_weather::config::{ServiceRole, Settings};
use cep_weather::startup::Application;

#[tokio::main]
async fn main() -> Result<()> {
    let role = ServiceRole::Resolver;

    let settings = Settings::load(role)?;
    let _telemetry = cep_weather::telemetry::init_tracing(&settings.telemetry)?;

    info!(
        host = %settings.server.host,
        port = %settings.server.port,
        location_api = %settings.resolver.location_base_url,
        environment = %settings.environment,
        "Configuration loaded"
    );

    let application = Application::build(role, settings).await?;

    info!("Resolver ready to accept connections");
    application.run_until_stopped().await?;

    Ok(())
}
