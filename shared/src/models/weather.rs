//! Weather data models

use serde::{Deserialize, Serialize};

/// Current conditions plus a short daily forecast for one city
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeatherReport {
    pub city: String,
    pub country: String,
    pub temp: i32,
    pub feels_like: i32,
    pub description: String,
    pub humidity: i32,
    /// Wind speed in km/h
    pub wind_speed: i32,
    /// Sea-level pressure in hPa
    pub pressure: i32,
    pub icon: String,
    pub forecast: Vec<ForecastDay>,
}

/// One day of the condensed forecast
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ForecastDay {
    pub day: String,
    pub icon: String,
    pub max_temp: i32,
    pub min_temp: i32,
}

impl ForecastDay {
    pub fn new(day: &str, icon: &str, max_temp: i32, min_temp: i32) -> Self {
        Self {
            day: day.to_string(),
            icon: icon.to_string(),
            max_temp,
            min_temp,
        }
    }
}

/// A single raw forecast sample as reported by the provider (3-hour step)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ForecastSample {
    /// Unix timestamp in seconds, UTC
    pub timestamp: i64,
    pub temperature: f64,
    /// Provider condition group, e.g. `Clear` or `Rain`
    pub condition: String,
}

impl ForecastSample {
    pub fn new(timestamp: i64, temperature: f64, condition: impl Into<String>) -> Self {
        Self {
            timestamp,
            temperature,
            condition: condition.into(),
        }
    }
}
