//! Response DTOs
//!
//! Data structures for API response bodies.

use serde::{Deserialize, Serialize};

use crate::domain::WeatherReport;

/// Successful weather response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherResponse {
    pub city: String,

    #[serde(rename = "temp_C")]
    pub temp_c: f64,

    #[serde(rename = "temp_F")]
    pub temp_f: f64,

    #[serde(rename = "temp_K")]
    pub temp_k: f64,
}

impl From<WeatherReport> for WeatherResponse {
    fn from(report: WeatherReport) -> Self {
        Self {
            city: report.city,
            temp_c: report.temperature.celsius(),
            temp_f: report.temperature.fahrenheit(),
            temp_k: report.temperature.kelvin(),
        }
    }
}
