//! Business logic services for the Skycast weather dashboard

pub mod weather;

pub use weather::WeatherService;
