//! Application Startup
//!
//! State assembly and server initialization for both services.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use tokio::net::TcpListener;

use crate::application::services::{WeatherService, WeatherServiceImpl};
use crate::config::{ServiceRole, Settings};
use crate::domain::{LocationLookup, WeatherProvider, WeatherResolver};
use crate::infrastructure::clients::{
    FallbackWeatherProvider, HttpResolverClient, ViaCepClient, WeatherApiClient,
};
use crate::presentation::http::routes;
use crate::presentation::middleware::logging;
use crate::shared::trace_context::TracePropagator;

/// Gateway state shared across handlers
#[derive(Clone)]
pub struct GatewayState {
    pub resolver: Arc<dyn WeatherResolver>,
}

/// Resolver state shared across handlers
#[derive(Clone)]
pub struct ResolverState {
    pub weather_service: Arc<dyn WeatherService>,
}

/// Build the gateway state: one HTTP client for the resolver.
pub fn gateway_state(settings: &Settings, propagator: Arc<TracePropagator>) -> Result<GatewayState> {
    let resolver = HttpResolverClient::new(
        &settings.gateway.resolver_url,
        settings.gateway.timeout(),
        propagator,
    )
    .context("failed to build resolver client")?;

    tracing::info!(endpoint = %resolver.endpoint(), "Forwarding to resolver");

    Ok(GatewayState {
        resolver: Arc::new(resolver),
    })
}

/// Build the resolver state, picking the live or fallback weather provider.
pub fn resolver_state(settings: &Settings, propagator: Arc<TracePropagator>) -> Result<ResolverState> {
    let resolver = &settings.resolver;

    let locations: Arc<dyn LocationLookup> = Arc::new(
        ViaCepClient::new(
            resolver.location_base_url.clone(),
            resolver.lookup_timeout(),
            propagator.clone(),
        )
        .context("failed to build location client")?,
    );

    let weather: Arc<dyn WeatherProvider> = match resolver.weather_credential() {
        Some(key) => Arc::new(
            WeatherApiClient::new(
                resolver.weather_base_url.clone(),
                key,
                resolver.lookup_timeout(),
                propagator,
            )
            .context("failed to build weather client")?,
        ),
        None => {
            tracing::warn!("WEATHER_API_KEY not configured, serving mock weather data");
            Arc::new(FallbackWeatherProvider::new())
        }
    };

    tracing::info!(provider = weather.kind(), "Weather provider selected");

    Ok(ResolverState {
        weather_service: Arc::new(WeatherServiceImpl::new(locations, weather)),
    })
}

/// Build the router for a role, including request tracing.
pub fn build_router(role: ServiceRole, settings: &Settings) -> Result<Router> {
    let propagator = Arc::new(TracePropagator::new());
    let trace_layer =
        logging::create_trace_layer(propagator.clone(), &settings.telemetry.service_name);

    let router = match role {
        ServiceRole::Gateway => routes::create_gateway_router(gateway_state(settings, propagator)?),
        ServiceRole::Resolver => {
            routes::create_resolver_router(resolver_state(settings, propagator)?)
        }
    };

    Ok(router.layer(trace_layer))
}

/// Application instance
pub struct Application {
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application from settings
    pub async fn build(role: ServiceRole, settings: Settings) -> Result<Self> {
        let router = build_router(role, &settings)?;

        // Bind to address; port 0 picks a free port
        let addr = settings.server_addr();
        let listener = TcpListener::bind(&addr)
            .await
            .with_context(|| format!("failed to bind {}", addr))?;
        tracing::info!(role = %role, "Listening on {}", listener.local_addr()?);

        Ok(Self { listener, router })
    }

    /// Run the server until stopped
    pub async fn run_until_stopped(self) -> Result<()> {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;
        Ok(())
    }

    /// Get the bound address
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
