//! Server-rendered dashboard page

use axum::{extract::State, response::Html};
use shared::{ForecastDay, WeatherReport};

use crate::AppState;

const INDEX_TEMPLATE: &str = include_str!("../../templates/index.html");

/// Homepage pre-populated with the default city's weather.
///
/// Always renders: provider failures are replaced with fallback data.
pub async fn index(State(state): State<AppState>) -> Html<String> {
    let report = state.weather.default_report().await;
    Html(render_index(&report))
}

/// Fill the index template with a report.
///
/// Placeholders are resolved in one scan of the template, so substituted
/// values are never searched for further placeholders.
pub fn render_index(report: &WeatherReport) -> String {
    let mut out = String::with_capacity(INDEX_TEMPLATE.len() + 1024);
    let mut rest = INDEX_TEMPLATE;

    while let Some(open) = rest.find("{{") {
        out.push_str(&rest[..open]);
        let after = &rest[open + 2..];
        match after.find("}}").and_then(|close| {
            placeholder_value(report, &after[..close]).map(|value| (close, value))
        }) {
            Some((close, value)) => {
                out.push_str(&value);
                rest = &after[close + 2..];
            }
            None => {
                out.push_str("{{");
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

fn placeholder_value(report: &WeatherReport, name: &str) -> Option<String> {
    let value = match name {
        "icon" => escape_html(&report.icon),
        "city" => escape_html(&report.city),
        "country" => escape_html(&report.country),
        "temp" => report.temp.to_string(),
        "feels_like" => report.feels_like.to_string(),
        "description" => escape_html(&report.description),
        "humidity" => report.humidity.to_string(),
        "wind_speed" => report.wind_speed.to_string(),
        "pressure" => report.pressure.to_string(),
        "forecast" => report.forecast.iter().map(render_day).collect(),
        _ => return None,
    };
    Some(value)
}

fn render_day(day: &ForecastDay) -> String {
    format!(
        r#"<div class="day"><div>{}</div><i class="fa-solid fa-{}"></i><div>{}&deg; / {}&deg;</div></div>"#,
        escape_html(&day.day),
        escape_html(&day.icon),
        day.max_temp,
        day.min_temp
    )
}

/// Escape text for use in HTML content and quoted attributes
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::fallback_report;

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("Clear Sky"), "Clear Sky");
        assert_eq!(
            escape_html(r#"<script>alert("x")</script>"#),
            "&lt;script&gt;alert(&quot;x&quot;)&lt;/script&gt;"
        );
        assert_eq!(escape_html("A & B's"), "A &amp; B&#x27;s");
    }

    #[test]
    fn test_render_fallback() {
        let html = render_index(&fallback_report());
        assert!(html.contains("Islamabad, PK"));
        assert!(html.contains(r#"<span id="temp">25</span>"#));
        assert!(html.contains("fa-cloud-rain"));
        assert!(html.contains("Tomorrow"));
        assert!(!html.contains("{{"));
    }

    #[test]
    fn test_render_escapes_city() {
        let mut report = fallback_report();
        report.city = "<b>Evil</b>".to_string();
        let html = render_index(&report);
        assert!(html.contains("&lt;b&gt;Evil&lt;/b&gt;"));
        assert!(!html.contains("<b>Evil</b>"));
    }

    #[test]
    fn test_render_does_not_expand_placeholders_in_values() {
        let mut report = fallback_report();
        report.city = "{{temp}}".to_string();
        report.description = "{{forecast}}".to_string();
        let html = render_index(&report);
        assert!(html.contains("{{temp}}, PK"));
        assert!(html.contains("{{forecast}}"));
        assert!(html.contains(r#"<span id="temp">25</span>"#));
        assert_eq!(html.matches("Tomorrow").count(), 1);
    }
}
