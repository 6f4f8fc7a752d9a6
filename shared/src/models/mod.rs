//! Domain models for the weather dashboard

mod weather;

pub use weather::*;
