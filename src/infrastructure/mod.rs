//! Infrastructure Layer
//!
//! Contains implementations for external services:
//! - Postal-code lookup (ViaCEP)
//! - Weather lookup (WeatherAPI, or a fixed fallback reading)
//! - The gateway's client for the resolver service

pub mod clients;
