//! Gateway -> resolver forwarding client.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::http::{header::CONTENT_TYPE, HeaderMap};
use reqwest::Client;
use tracing::{debug, instrument, Span};

use super::{build_client, join_url};
use crate::application::dto::CepRequest;
use crate::domain::{ForwardError, RelayedResponse, WeatherResolver, ZipCode};
use crate::shared::trace_context::TracePropagator;

/// `WeatherResolver` that POSTs `{"cep": ...}` to `{resolver_url}/weather`.
#[derive(Debug, Clone)]
pub struct HttpResolverClient {
    client: Client,
    endpoint: String,
    propagator: Arc<TracePropagator>,
}

impl HttpResolverClient {
    pub fn new(
        resolver_url: &str,
        timeout: Duration,
        propagator: Arc<TracePropagator>,
    ) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: build_client(timeout)?,
            endpoint: join_url(resolver_url, "weather"),
            propagator,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

fn forward_error(err: reqwest::Error) -> ForwardError {
    if err.is_timeout() {
        ForwardError::Timeout
    } else {
        ForwardError::Transport(err.to_string())
    }
}

#[async_trait]
impl WeatherResolver for HttpResolverClient {
    #[instrument(name = "forward-to-resolver", skip_all, fields(cep = %zipcode, status = tracing::field::Empty))]
    async fn resolve(&self, zipcode: &ZipCode) -> Result<RelayedResponse, ForwardError> {
        let mut headers = HeaderMap::new();
        self.propagator.inject(&Span::current(), &mut headers);

        let response = self
            .client
            .post(&self.endpoint)
            .headers(headers)
            .json(&CepRequest::new(zipcode.as_str()))
            .send()
            .await
            .map_err(forward_error)?;

        let status = response.status().as_u16();
        Span::current().record("status", status);

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);

        let body = response.bytes().await.map_err(|e| {
            if e.is_timeout() {
                ForwardError::Timeout
            } else {
                ForwardError::Body(e.to_string())
            }
        })?;

        debug!(status, bytes = body.len(), "resolver responded");

        Ok(RelayedResponse {
            status,
            content_type,
            body: body.to_vec(),
        })
    }
}
