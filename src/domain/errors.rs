//! Failure kinds of the outbound collaborators.
//!
//! These keep the cause of a failure for logs and spans. Client-facing
//! mapping happens in the presentation layer, where every variant except
//! `ProviderError::NotFound` collapses to a generic 500.

/// Errors returned by the location and weather providers.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProviderError {
    /// The provider answered and explicitly reported no match
    #[error("no match reported by provider")]
    NotFound,

    #[error("provider call timed out")]
    Timeout,

    #[error("transport error: {0}")]
    Transport(String),

    #[error("provider returned status {0}")]
    UnexpectedStatus(u16),

    #[error("could not decode provider response: {0}")]
    Decode(String),

    /// Decoded, but missing data the pipeline needs
    #[error("malformed provider response: {0}")]
    Malformed(String),
}

impl ProviderError {
    /// True for the one outcome that is not an upstream failure.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ProviderError::NotFound)
    }
}

/// Errors raised while forwarding a request from the gateway to the resolver.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ForwardError {
    #[error("resolver call timed out")]
    Timeout,

    #[error("failed to reach resolver: {0}")]
    Transport(String),

    #[error("failed to read resolver response body: {0}")]
    Body(String),
}
