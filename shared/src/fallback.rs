//! Hardcoded sample data served when the live provider cannot be reached

use crate::models::{ForecastDay, WeatherReport};

/// City the fallback report describes
pub const FALLBACK_CITY: &str = "Islamabad";

/// Fixed three-day forecast
pub fn fallback_forecast() -> Vec<ForecastDay> {
    vec![
        ForecastDay::new("Tomorrow", "sun", 28, 18),
        ForecastDay::new("Day 2", "cloud", 24, 16),
        ForecastDay::new("Day 3", "cloud-rain", 22, 14),
    ]
}

/// Fixed report for the default city, including [`fallback_forecast`]
pub fn fallback_report() -> WeatherReport {
    WeatherReport {
        city: FALLBACK_CITY.to_string(),
        country: "PK".to_string(),
        temp: 25,
        feels_like: 28,
        description: "Clear Sky".to_string(),
        humidity: 65,
        wind_speed: 12,
        pressure: 1013,
        icon: "sun".to_string(),
        forecast: fallback_forecast(),
    }
}
