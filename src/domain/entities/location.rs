//! Postal-code to city resolution contract.

use async_trait::async_trait;

use crate::domain::{ProviderError, ZipCode};

/// Maps a postal code to the name of its city.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LocationLookup: Send + Sync {
    /// Resolve `zipcode` to a non-empty city name.
    ///
    /// Returns `ProviderError::NotFound` only when the provider explicitly
    /// reports that the code does not exist.
    async fn city_for(&self, zipcode: &ZipCode) -> Result<String, ProviderError>;
}
