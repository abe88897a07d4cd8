//! Application Layer
//!
//! Contains the resolver orchestration service and the data transfer objects
//! exchanged with clients and between the two services.

pub mod dto;
pub mod services;
