//! Configuration management for the Skycast weather dashboard
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with SKYCAST_ prefix
//! 4. `OPENWEATHER_API_KEY` for the provider credential

use config::{ConfigError, Environment, File};
use serde::Deserialize;

/// Conventional variable holding the OpenWeatherMap key
pub const API_KEY_ENV: &str = "OPENWEATHER_API_KEY";

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Weather provider configuration
    pub weather: WeatherConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct WeatherConfig {
    /// OpenWeatherMap API key
    pub api_key: String,

    /// Current conditions endpoint
    pub current_url: String,

    /// 5 day / 3 hour forecast endpoint
    pub forecast_url: String,

    /// Unit system passed to the provider (metric, imperial, standard)
    pub units: String,

    /// Number of 3-hour samples requested from the forecast endpoint
    pub forecast_count: u32,

    /// City shown on the homepage
    pub default_city: String,

    /// Outbound request timeout
    pub request_timeout_secs: u64,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment =
            std::env::var("SKYCAST_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", 5000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("weather.api_key", "")?
            .set_default("weather.current_url", WeatherConfig::DEFAULT_CURRENT_URL)?
            .set_default("weather.forecast_url", WeatherConfig::DEFAULT_FORECAST_URL)?
            .set_default("weather.units", "metric")?
            .set_default("weather.forecast_count", 24)?
            .set_default("weather.default_city", "Islamabad,Pakistan")?
            .set_default("weather.request_timeout_secs", 10)?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (SKYCAST_ prefix)
            .add_source(
                Environment::with_prefix("SKYCAST")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("weather.api_key", std::env::var(API_KEY_ENV).ok())?
            .build()?;

        config.try_deserialize()
    }
}

impl WeatherConfig {
    pub const DEFAULT_CURRENT_URL: &'static str =
        "https://api.openweathermap.org/data/2.5/weather";
    pub const DEFAULT_FORECAST_URL: &'static str =
        "https://api.openweathermap.org/data/2.5/forecast";

    /// Point both endpoints at `base_url`, keeping the provider's path layout
    pub fn with_base_url(api_key: impl Into<String>, base_url: &str) -> Self {
        let base_url = base_url.trim_end_matches('/');
        Self {
            api_key: api_key.into(),
            current_url: format!("{}/weather", base_url),
            forecast_url: format!("{}/forecast", base_url),
            ..Self::default()
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 5000,
            host: "0.0.0.0".to_string(),
        }
    }
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            current_url: Self::DEFAULT_CURRENT_URL.to_string(),
            forecast_url: Self::DEFAULT_FORECAST_URL.to_string(),
            units: "metric".to_string(),
            forecast_count: 24,
            default_city: "Islamabad,Pakistan".to_string(),
            request_timeout_secs: 10,
        }
    }
}
