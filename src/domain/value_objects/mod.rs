//! # Domain Value Objects
//!
//! Immutable value types that represent domain concepts without identity.
//!
//! ## Value Objects
//!
//! - **ZipCode**: an 8-digit Brazilian postal code (CEP)
//! - **Temperature**: a reading in Celsius, Fahrenheit and Kelvin

mod temperature;
mod zipcode;

pub use temperature::*;
pub use zipcode::*;
