//! # Domain Layer
//!
//! The domain layer holds the rules of the pipeline that do not depend on
//! HTTP, providers or configuration.
//!
//! ## Structure
//!
//! - **entities**: per-request data and collaborator traits
//! - **value_objects**: `ZipCode` and `Temperature`
//! - **errors**: failure kinds of the outbound calls
//!
//! ## Design Principles
//!
//! - No dependencies on infrastructure or presentation layers
//! - Invariants are enforced by constructors (`ZipCode::parse`,
//!   `Temperature::from_celsius`)
//! - Collaborator traits define the contracts the infrastructure fulfils

pub mod entities;
pub mod errors;
pub mod value_objects;

// Re-export commonly used types
pub use entities::*;
pub use errors::*;
pub use value_objects::*;
