//! Weather API client for fetching weather data
//!
//! Integrates with OpenWeatherMap API for current conditions and forecasts,
//! querying both endpoints by city name.

use std::time::Duration;

use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;
use shared::{icon_for, mps_to_kmh, round_reading, title_case, ForecastDay, ForecastSample, WeatherReport};

use crate::config::WeatherConfig;
use crate::error::{AppError, AppResult};

/// Message used when the provider rejects a request without explaining why
const GENERIC_API_ERROR: &str = "Weather data error";

/// Weather API client
#[derive(Clone)]
pub struct WeatherClient {
    client: Client,
    config: WeatherConfig,
}

/// Current conditions for a city, in provider units
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentConditions {
    pub city: String,
    pub country: String,
    pub temperature: f64,
    pub feels_like: f64,
    pub humidity: i32,
    pub pressure: i32,
    pub wind_speed_mps: f64,
    pub condition: String,
    pub description: String,
    pub timezone_offset_seconds: i32,
}

/// Raw forecast series for a city
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastSeries {
    pub timezone_offset_seconds: i32,
    pub samples: Vec<ForecastSample>,
}

/// OpenWeatherMap API response for current weather
#[derive(Debug, Deserialize)]
struct OWMCurrentResponse {
    name: String,
    weather: Vec<OWMWeather>,
    main: OWMMain,
    wind: OWMWind,
    sys: OWMSys,
    timezone: i32,
}

#[derive(Debug, Deserialize)]
struct OWMWeather {
    main: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct OWMMain {
    temp: f64,
    feels_like: f64,
    pressure: i32,
    humidity: i32,
}

#[derive(Debug, Deserialize)]
struct OWMWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OWMSys {
    country: String,
}

/// OpenWeatherMap API response for forecast
#[derive(Debug, Deserialize)]
struct OWMForecastResponse {
    city: OWMCity,
    list: Vec<OWMForecastItem>,
}

#[derive(Debug, Deserialize)]
struct OWMCity {
    timezone: i32,
}

#[derive(Debug, Deserialize)]
struct OWMForecastItem {
    dt: i64,
    main: OWMForecastMain,
    weather: Vec<OWMWeather>,
}

#[derive(Debug, Deserialize)]
struct OWMForecastMain {
    temp: f64,
}

/// Error body returned alongside non-200 statuses
#[derive(Debug, Deserialize)]
struct OWMErrorResponse {
    message: Option<String>,
}

impl WeatherClient {
    /// Create a new WeatherClient from provider configuration
    pub fn new(config: WeatherConfig) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &WeatherConfig {
        &self.config
    }

    /// Fetch current conditions for a city query such as `London` or `Islamabad,Pakistan`
    pub async fn get_current(&self, city: &str) -> AppResult<CurrentConditions> {
        let response = self
            .client
            .get(&self.config.current_url)
            .query(&[
                ("q", city),
                ("appid", self.config.api_key.as_str()),
                ("units", self.config.units.as_str()),
            ])
            .send()
            .await
            .map_err(|e| AppError::Unexpected(format!("Weather API request failed: {}", e)))?;

        let response = Self::check_status(response).await?;

        let data: OWMCurrentResponse = response
            .json()
            .await
            .map_err(|e| AppError::Unexpected(format!("Failed to parse weather response: {}", e)))?;

        Self::convert_current_response(data)
    }

    /// Fetch the 3-hourly forecast series for a city query
    pub async fn get_forecast(&self, city: &str) -> AppResult<ForecastSeries> {
        let count = self.config.forecast_count.to_string();
        let response = self
            .client
            .get(&self.config.forecast_url)
            .query(&[
                ("q", city),
                ("appid", self.config.api_key.as_str()),
                ("units", self.config.units.as_str()),
                ("cnt", count.as_str()),
            ])
            .send()
            .await
            .map_err(|e| AppError::Unexpected(format!("Forecast API request failed: {}", e)))?;

        let response = Self::check_status(response).await?;

        let data: OWMForecastResponse = response
            .json()
            .await
            .map_err(|e| AppError::Unexpected(format!("Failed to parse forecast response: {}", e)))?;

        Self::convert_forecast_response(data)
    }

    /// Turn any non-200 status into `RemoteApi`, carrying the provider's message
    async fn check_status(response: Response) -> AppResult<Response> {
        let status = response.status();
        if status == StatusCode::OK {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<OWMErrorResponse>(&body)
            .ok()
            .and_then(|e| e.message)
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| GENERIC_API_ERROR.to_string());

        tracing::debug!(%status, %message, "Weather API returned an error");
        Err(AppError::RemoteApi(message))
    }

    /// Convert OpenWeatherMap current response to our format
    fn convert_current_response(data: OWMCurrentResponse) -> AppResult<CurrentConditions> {
        let weather = data
            .weather
            .into_iter()
            .next()
            .ok_or_else(|| AppError::Unexpected("Weather response has no conditions".to_string()))?;

        Ok(CurrentConditions {
            city: data.name,
            country: data.sys.country,
            temperature: data.main.temp,
            feels_like: data.main.feels_like,
            humidity: data.main.humidity,
            pressure: data.main.pressure,
            wind_speed_mps: data.wind.speed,
            condition: weather.main,
            description: weather.description,
            timezone_offset_seconds: data.timezone,
        })
    }

    /// Convert OpenWeatherMap forecast response to our format
    fn convert_forecast_response(data: OWMForecastResponse) -> AppResult<ForecastSeries> {
        let samples = data
            .list
            .into_iter()
            .map(|item| {
                let weather = item.weather.into_iter().next().ok_or_else(|| {
                    AppError::Unexpected(format!("Forecast sample at {} has no conditions", item.dt))
                })?;
                Ok(ForecastSample::new(item.dt, item.main.temp, weather.main))
            })
            .collect::<AppResult<Vec<_>>>()?;

        Ok(ForecastSeries {
            timezone_offset_seconds: data.city.timezone,
            samples,
        })
    }
}

impl CurrentConditions {
    /// Build the display report, rounding readings and converting wind to km/h
    pub fn into_report(self, forecast: Vec<ForecastDay>) -> WeatherReport {
        WeatherReport {
            icon: icon_for(&self.condition).to_string(),
            description: title_case(&self.description),
            city: self.city,
            country: self.country,
            temp: round_reading(self.temperature),
            feels_like: round_reading(self.feels_like),
            humidity: self.humidity,
            wind_speed: mps_to_kmh(self.wind_speed_mps),
            pressure: self.pressure,
            forecast,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn conditions(temp: f64, feels_like: f64, wind: f64) -> CurrentConditions {
        CurrentConditions {
            city: "London".to_string(),
            country: "GB".to_string(),
            temperature: temp,
            feels_like,
            humidity: 81,
            pressure: 1012,
            wind_speed_mps: wind,
            condition: "Rain".to_string(),
            description: "light rain".to_string(),
            timezone_offset_seconds: 3600,
        }
    }

    #[test]
    fn test_current_response_parsing() {
        let body = serde_json::json!({
            "coord": {"lon": -0.13, "lat": 51.51},
            "weather": [{"id": 500, "main": "Rain", "description": "light rain", "icon": "10d"}],
            "main": {"temp": 12.7, "feels_like": 11.9, "temp_min": 11.0, "temp_max": 14.0,
                     "pressure": 1012, "humidity": 81},
            "wind": {"speed": 4.1, "deg": 240},
            "sys": {"country": "GB", "sunrise": 1760000000, "sunset": 1760040000},
            "timezone": 3600,
            "name": "London",
            "cod": 200
        });
        let data: OWMCurrentResponse = serde_json::from_value(body).unwrap();
        let current = WeatherClient::convert_current_response(data).unwrap();

        assert_eq!(current.city, "London");
        assert_eq!(current.country, "GB");
        assert_eq!(current.condition, "Rain");
        assert_eq!(current.timezone_offset_seconds, 3600);
        assert_eq!(current.pressure, 1012);
    }

    #[test]
    fn test_forecast_response_parsing() {
        let body = serde_json::json!({
            "cod": "200",
            "cnt": 2,
            "list": [
                {"dt": 1760900400, "main": {"temp": 20.5, "humidity": 60},
                 "weather": [{"main": "Clear", "description": "clear sky"}]},
                {"dt": 1760911200, "main": {"temp": 18.0},
                 "weather": [{"main": "Rain", "description": "light rain"}]}
            ],
            "city": {"name": "Islamabad", "country": "PK", "timezone": 18000}
        });
        let data: OWMForecastResponse = serde_json::from_value(body).unwrap();
        let series = WeatherClient::convert_forecast_response(data).unwrap();

        assert_eq!(series.timezone_offset_seconds, 18000);
        assert_eq!(series.samples.len(), 2);
        assert_eq!(series.samples[0], ForecastSample::new(1760900400, 20.5, "Clear"));
        assert_eq!(series.samples[1].condition, "Rain");
    }

    #[test]
    fn test_current_response_requires_fields() {
        // no sys.country
        let body = serde_json::json!({
            "weather": [{"main": "Clear", "description": "clear sky"}],
            "main": {"temp": 20.0, "feels_like": 20.0, "pressure": 1010, "humidity": 50},
            "wind": {"speed": 1.0},
            "sys": {},
            "timezone": 0,
            "name": "X"
        });
        assert!(serde_json::from_value::<OWMCurrentResponse>(body).is_err());
    }

    #[test]
    fn test_empty_conditions_are_unexpected() {
        let body = serde_json::json!({
            "weather": [],
            "main": {"temp": 20.0, "feels_like": 20.0, "pressure": 1010, "humidity": 50},
            "wind": {"speed": 1.0},
            "sys": {"country": "GB"},
            "timezone": 0,
            "name": "X"
        });
        let data: OWMCurrentResponse = serde_json::from_value(body).unwrap();
        assert!(matches!(
            WeatherClient::convert_current_response(data),
            Err(AppError::Unexpected(_))
        ));

        let body = serde_json::json!({
            "list": [{"dt": 1760911200, "main": {"temp": 18.0}, "weather": []}],
            "city": {"timezone": 0}
        });
        let data: OWMForecastResponse = serde_json::from_value(body).unwrap();
        assert!(matches!(
            WeatherClient::convert_forecast_response(data),
            Err(AppError::Unexpected(_))
        ));
    }

    #[test]
    fn test_into_report() {
        let report = conditions(12.7, 11.4, 4.1).into_report(Vec::new());

        assert_eq!(report.city, "London");
        assert_eq!(report.temp, 13);
        assert_eq!(report.feels_like, 11);
        assert_eq!(report.wind_speed, 15); // 14.76 km/h
        assert_eq!(report.description, "Light Rain");
        assert_eq!(report.icon, "cloud-rain");
        assert_eq!(report.humidity, 81);
        assert_eq!(report.pressure, 1012);
        assert!(report.forecast.is_empty());
    }

    #[test]
    fn test_new_client_keeps_config() {
        let config = WeatherConfig::with_base_url("KEY", "http://localhost:1");
        let client = WeatherClient::new(config).unwrap();
        assert_eq!(client.config().api_key, "KEY");
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_report_fields_are_rounded_readings(
            temp in -40.0f64..50.0,
            feels_like in -50.0f64..60.0,
            wind in 0.0f64..50.0,
        ) {
            let report = conditions(temp, feels_like, wind).into_report(Vec::new());
            prop_assert_eq!(report.temp, round_reading(temp));
            prop_assert_eq!(report.feels_like, round_reading(feels_like));
            prop_assert_eq!(report.wind_speed, round_reading(wind * 3.6));
            prop_assert_eq!(report.pressure, 1012);
        }
    }
}
