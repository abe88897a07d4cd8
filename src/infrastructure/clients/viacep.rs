//! ViaCEP location lookup.
//!
//! `GET {base}/{cep}/json/` answers 200 for every well-formed code. Unknown
//! codes come back as `{"erro": true}` (older deployments send the string
//! `"true"`), so the flag, not the status, signals not-found.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::http::{HeaderMap, StatusCode};
use reqwest::Client;
use serde::{Deserialize, Deserializer};
use tracing::{debug, instrument, Span};

use super::{build_client, join_url, provider_error};
use crate::domain::{LocationLookup, ProviderError, ZipCode};
use crate::shared::trace_context::TracePropagator;

/// Subset of the ViaCEP payload the pipeline reads.
#[derive(Debug, Deserialize)]
struct ViaCepPayload {
    #[serde(default)]
    localidade: String,

    #[serde(default, deserialize_with = "deserialize_flag")]
    erro: bool,
}

/// Accept `true` as well as `"true"`.
fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Text(String),
    }

    Ok(match Flag::deserialize(deserializer)? {
        Flag::Bool(flag) => flag,
        Flag::Text(text) => text.eq_ignore_ascii_case("true"),
    })
}

impl ViaCepPayload {
    fn into_city(self) -> Result<String, ProviderError> {
        if self.erro {
            return Err(ProviderError::NotFound);
        }

        let city = self.localidade.trim();
        if city.is_empty() {
            return Err(ProviderError::Malformed("empty localidade".into()));
        }

        Ok(city.to_owned())
    }
}

/// ViaCEP-backed `LocationLookup`.
#[derive(Debug, Clone)]
pub struct ViaCepClient {
    client: Client,
    base_url: String,
    propagator: Arc<TracePropagator>,
}

impl ViaCepClient {
    pub fn new(
        base_url: impl Into<String>,
        timeout: Duration,
        propagator: Arc<TracePropagator>,
    ) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: build_client(timeout)?,
            base_url: base_url.into(),
            propagator,
        })
    }

    fn url_for(&self, zipcode: &ZipCode) -> String {
        join_url(&self.base_url, &format!("{}/json/", zipcode))
    }
}

#[async_trait]
impl LocationLookup for ViaCepClient {
    #[instrument(
        name = "get-location-from-cep",
        skip_all,
        fields(cep = %zipcode, location = tracing::field::Empty)
    )]
    async fn city_for(&self, zipcode: &ZipCode) -> Result<String, ProviderError> {
        let mut headers = HeaderMap::new();
        self.propagator.inject(&Span::current(), &mut headers);

        let response = self
            .client
            .get(self.url_for(zipcode))
            .headers(headers)
            .send()
            .await
            .map_err(provider_error)?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(ProviderError::UnexpectedStatus(status.as_u16()));
        }

        let payload: ViaCepPayload = response.json().await.map_err(provider_error)?;
        let city = payload.into_city()?;

        Span::current().record("location", city.as_str());
        debug!(city = %city, "zipcode resolved");

        Ok(city)
    }
}
