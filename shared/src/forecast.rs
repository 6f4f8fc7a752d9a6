//! Condensing 3-hourly forecast samples into per-day summaries

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, NaiveDate, Utc};

use crate::icons::icon_for;
use crate::models::{ForecastDay, ForecastSample};
use crate::units::round_reading;

/// Labels for the days following today, in order
pub const DAY_LABELS: [&str; 3] = ["Tomorrow", "Day 2", "Day 3"];

/// Calendar date of a UTC instant shifted by a timezone offset in seconds.
///
/// `None` when the shifted instant is out of range; such samples are dropped.
pub fn local_date(timestamp: i64, timezone_offset_seconds: i32) -> Option<NaiveDate> {
    timestamp
        .checked_add(i64::from(timezone_offset_seconds))
        .and_then(|t| DateTime::from_timestamp(t, 0))
        .map(|dt| dt.date_naive())
}

/// Group samples by local date and summarise the next three days.
///
/// "Today" is the city's local date at `now`. Samples for today, or further
/// out than today + 3, are ignored. A day with no samples is skipped, so the
/// result may be shorter than three entries; labels stay tied to the day
/// offset ("Day 3" is always today + 3).
pub fn bucket_forecast(
    samples: &[ForecastSample],
    timezone_offset_seconds: i32,
    now: DateTime<Utc>,
) -> Vec<ForecastDay> {
    let mut by_day: BTreeMap<NaiveDate, Vec<&ForecastSample>> = BTreeMap::new();
    for sample in samples {
        if let Some(date) = local_date(sample.timestamp, timezone_offset_seconds) {
            by_day.entry(date).or_default().push(sample);
        }
    }

    let today = (now + Duration::seconds(i64::from(timezone_offset_seconds))).date_naive();

    DAY_LABELS
        .iter()
        .enumerate()
        .filter_map(|(i, label)| {
            let day = today + Duration::days(i as i64 + 1);
            let day_samples = by_day.get(&day)?;
            summarise_day(label, day_samples)
        })
        .collect()
}

fn summarise_day(label: &str, samples: &[&ForecastSample]) -> Option<ForecastDay> {
    let condition = most_frequent_condition(samples)?;
    let (max, min) = samples.iter().fold(
        (f64::NEG_INFINITY, f64::INFINITY),
        |(max, min), s| (max.max(s.temperature), min.min(s.temperature)),
    );

    Some(ForecastDay::new(
        label,
        icon_for(condition),
        round_reading(max),
        round_reading(min),
    ))
}

/// Most common condition label; ties go to the label seen first
fn most_frequent_condition<'a>(samples: &[&'a ForecastSample]) -> Option<&'a str> {
    let mut counts: Vec<(&'a str, usize)> = Vec::new();
    for &sample in samples {
        match counts.iter_mut().find(|(c, _)| *c == sample.condition) {
            Some((_, n)) => *n += 1,
            None => counts.push((sample.condition.as_str(), 1)),
        }
    }

    let mut best: Option<(&'a str, usize)> = None;
    for (condition, count) in counts {
        if best.map_or(true, |(_, n)| count > n) {
            best = Some((condition, count));
        }
    }
    best.map(|(condition, _)| condition)
}
