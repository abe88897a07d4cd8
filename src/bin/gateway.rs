//! # CEP Gateway
//!
//! Front-facing service: validates postal codes and forwards them to the
//! resolver.

use anyhow::Result;
use tracing::info;

use cep_weather::config::{ServiceRole, Settings};
use cep_weather::startup::Application;

#[tokio::main]
async fn main() -> Result<()> {
    let role = ServiceRole::Gateway;

    // Load configuration from environment and config files
    let settings = Settings::load(role)?;

    // Keep the guard alive so spans are flushed on exit
    let _telemetry = cep_weather::telemetry::init_tracing(&settings.telemetry)?;

    info!(
        host = %settings.server.host,
        port = %settings.server.port,
        resolver = %settings.gateway.resolver_url,
        environment = %settings.environment,
        "Configuration loaded"
    );

    let application = Application::build(role, settings).await?;

    info!("Gateway ready to accept connections");
    application.run_until_stopped().await?;

    Ok(())
}
