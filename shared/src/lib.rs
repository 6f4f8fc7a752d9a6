//! Shared types and pure weather logic for the Skycast dashboard
//!
//! This crate holds everything that does not touch the network: the report
//! model, icon mapping, forecast bucketing, fallback data and the small
//! conversions applied to provider readings.

pub mod fallback;
pub mod forecast;
pub mod icons;
pub mod models;
pub mod units;
pub mod validation;

pub use fallback::*;
pub use forecast::*;
pub use icons::*;
pub use models::*;
pub use units::*;
pub use validation::*;
