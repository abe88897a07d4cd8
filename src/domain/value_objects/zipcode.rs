//! Brazilian postal code (CEP) value object.
//!
//! A CEP is exactly eight ASCII digits with no separators. Validation is
//! purely syntactic: a well-formed code may still be unknown to the
//! location provider.

use std::fmt;

use serde::Serialize;

/// Number of digits in a CEP.
pub const ZIPCODE_LENGTH: usize = 8;

/// A syntactically valid CEP.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ZipCode(String);

/// Returned when a string is not exactly eight ASCII digits.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("zipcode must be exactly 8 digits")]
pub struct InvalidZipCode;

impl ZipCode {
    /// Parse a raw string, accepting only `^[0-9]{8}$`.
    pub fn parse(raw: &str) -> Result<Self, InvalidZipCode> {
        if Self::is_valid(raw) {
            Ok(Self(raw.to_owned()))
        } else {
            Err(InvalidZipCode)
        }
    }

    /// Check the format without allocating.
    pub fn is_valid(raw: &str) -> bool {
        raw.len() == ZIPCODE_LENGTH && raw.bytes().all(|b| b.is_ascii_digit())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ZipCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ZipCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ZipCode {
    type Error = InvalidZipCode;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if Self::is_valid(&value) {
            Ok(Self(value))
        } else {
            Err(InvalidZipCode)
        }
    }
}
