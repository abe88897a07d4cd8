//! Request DTOs
//!
//! Data structures for API request bodies.

use serde::{Deserialize, Serialize};

/// Postal-code request, accepted by the gateway and forwarded to the resolver.
///
/// A missing `cep` field becomes an empty string so it fails format
/// validation (422) rather than body parsing (400).
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CepRequest {
    #[serde(default)]
    pub cep: String,
}

impl CepRequest {
    pub fn new(cep: impl Into<String>) -> Self {
        Self { cep: cep.into() }
    }
}
