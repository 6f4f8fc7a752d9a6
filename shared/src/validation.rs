//! Input validation for dashboard requests

use thiserror::Error;

/// Reasons a submitted city name is rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CityError {
    #[error("City name required")]
    Missing,
}

/// Trim a submitted city name, rejecting absent or blank input.
///
/// Any non-blank name is forwarded as-is; the provider decides whether it
/// knows the city.
pub fn normalize_city(city: Option<&str>) -> Result<&str, CityError> {
    let city = city.map(str::trim).unwrap_or_default();
    if city.is_empty() {
        return Err(CityError::Missing);
    }
    Ok(city)
}
