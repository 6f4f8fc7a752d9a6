//! Weather service combining live provider data with fallback data

use chrono::Utc;
use shared::{bucket_forecast, fallback_forecast, fallback_report, WeatherReport};

use crate::error::AppResult;
use crate::external::weather::WeatherClient;

/// Weather service for building dashboard reports
#[derive(Clone)]
pub struct WeatherService {
    weather_client: WeatherClient,
}

impl WeatherService {
    /// Create a new WeatherService instance
    pub fn new(weather_client: WeatherClient) -> Self {
        Self { weather_client }
    }

    /// Build a live report for a city.
    ///
    /// Fails when the current conditions cannot be fetched. A failed forecast
    /// call only swaps in the fixed fallback forecast.
    pub async fn report_for_city(&self, city: &str) -> AppResult<WeatherReport> {
        let current = self.weather_client.get_current(city).await?;

        let forecast = match self.weather_client.get_forecast(city).await {
            Ok(series) => bucket_forecast(&series.samples, series.timezone_offset_seconds, Utc::now()),
            Err(e) => {
                tracing::warn!(city, error = %e, "Forecast unavailable, using fallback forecast");
                fallback_forecast()
            }
        };

        Ok(current.into_report(forecast))
    }

    /// Report for the configured default city; never fails
    pub async fn default_report(&self) -> WeatherReport {
        let city = &self.weather_client.config().default_city;
        match self.report_for_city(city).await {
            Ok(report) => report,
            Err(e) => {
                tracing::warn!(city = %city, error = %e, "Serving fallback weather data");
                fallback_report()
            }
        }
    }
}
