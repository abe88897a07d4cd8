//! Gateway-side view of the resolver.

use async_trait::async_trait;

use crate::domain::{ForwardError, ZipCode};

/// A resolver response captured for verbatim relay to the client.
#[derive(Debug, Clone, PartialEq)]
pub struct RelayedResponse {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

/// Downstream service that turns a postal code into a weather response.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WeatherResolver: Send + Sync {
    async fn resolve(&self, zipcode: &ZipCode) -> Result<RelayedResponse, ForwardError>;
}
