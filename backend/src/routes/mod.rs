//! Route definitions for the Skycast weather dashboard

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create dashboard routes
pub fn app_routes() -> Router<AppState> {
    Router::new()
        // Server-rendered homepage
        .route("/", get(handlers::index))
        // City search (form post, JSON response)
        .route("/search", post(handlers::search_weather))
        // Health check
        .route("/health", get(handlers::health_check))
}
