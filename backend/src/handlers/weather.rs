//! HTTP handlers for weather search

use axum::{
    extract::{rejection::FormRejection, State},
    Form, Json,
};
use serde::Deserialize;
use shared::{normalize_city, WeatherReport};

use crate::error::AppResult;
use crate::AppState;

/// Form body for a city search
#[derive(Debug, Deserialize)]
pub struct SearchForm {
    pub city: Option<String>,
}

/// Look up live weather for a submitted city
pub async fn search_weather(
    State(state): State<AppState>,
    form: Result<Form<SearchForm>, FormRejection>,
) -> AppResult<Json<WeatherReport>> {
    let city = match form {
        Ok(Form(form)) => form.city,
        Err(rejection) => {
            tracing::debug!("Unreadable search form: {}", rejection);
            None
        }
    };
    let city = normalize_city(city.as_deref())?;

    tracing::info!(city, "Searching weather");
    let report = state.weather.report_for_city(city).await?;
    Ok(Json(report))
}
