//! Skycast weather dashboard - backend library
//!
//! Serves a homepage with the default city's weather and a JSON search
//! endpoint backed by OpenWeatherMap, falling back to sample data when the
//! provider is unavailable.

use std::sync::Arc;

use axum::Router;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod config;
pub mod error;
pub mod external;
pub mod handlers;
pub mod routes;
pub mod services;

pub use config::Config;
pub use error::{AppError, AppResult};

use external::WeatherClient;
use services::WeatherService;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub weather: WeatherService,
}

impl AppState {
    /// Build state from configuration, constructing the provider client
    pub fn new(config: Config) -> AppResult<Self> {
        let client = WeatherClient::new(config.weather.clone())?;
        Ok(Self {
            config: Arc::new(config),
            weather: WeatherService::new(client),
        })
    }
}

/// Create the application router with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    routes::app_routes()
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
