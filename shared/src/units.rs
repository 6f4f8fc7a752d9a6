//! Conversions applied to raw provider readings before display

/// Round to the nearest integer, ties to even.
///
/// Readings such as 24.5 °C round to 24 and 25.5 °C to 26, which keeps
/// large batches of half-degree readings unbiased.
pub fn round_reading(value: f64) -> i32 {
    value.round_ties_even() as i32
}

/// Convert a wind speed in m/s to whole km/h
pub fn mps_to_kmh(speed_mps: f64) -> i32 {
    round_reading(speed_mps * 3.6)
}

/// Capitalise the first letter of every word, lowercasing the rest.
///
/// A word starts after any non-alphabetic character, so "light rain" becomes
/// "Light Rain" and "o'hare" becomes "O'Hare".
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for ch in text.chars() {
        if ch.is_alphabetic() {
            if at_word_start {
                out.extend(ch.to_uppercase());
            } else {
                out.extend(ch.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(ch);
            at_word_start = true;
        }
    }
    out
}
