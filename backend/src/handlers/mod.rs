//! HTTP handlers

pub mod health;
pub mod pages;
pub mod weather;

pub use health::health_check;
pub use pages::index;
pub use weather::search_weather;
