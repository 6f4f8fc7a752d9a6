//! Mapping from provider condition groups to dashboard icon names

use serde::{Deserialize, Serialize};

/// Icons understood by the dashboard front-end
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum WeatherIcon {
    Sun,
    #[default]
    Cloud,
    CloudRain,
    Bolt,
    Snowflake,
    Smog,
}

impl WeatherIcon {
    /// Resolve a provider condition group such as `Clear` or `Haze`.
    ///
    /// Matching is case-sensitive. Anything unrecognised falls back to
    /// [`WeatherIcon::Cloud`].
    pub fn from_condition(condition: &str) -> Self {
        match condition {
            "Clear" => WeatherIcon::Sun,
            "Clouds" => WeatherIcon::Cloud,
            "Rain" => WeatherIcon::CloudRain,
            "Thunderstorm" => WeatherIcon::Bolt,
            "Snow" => WeatherIcon::Snowflake,
            "Mist" | "Smoke" | "Haze" | "Dust" | "Fog" => WeatherIcon::Smog,
            _ => WeatherIcon::default(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WeatherIcon::Sun => "sun",
            WeatherIcon::Cloud => "cloud",
            WeatherIcon::CloudRain => "cloud-rain",
            WeatherIcon::Bolt => "bolt",
            WeatherIcon::Snowflake => "snowflake",
            WeatherIcon::Smog => "smog",
        }
    }
}

impl std::fmt::Display for WeatherIcon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Icon name for a provider condition group
pub fn icon_for(condition: &str) -> &'static str {
    WeatherIcon::from_condition(condition).as_str()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const KNOWN: [(&str, &str); 10] = [
        ("Clear", "sun"),
        ("Clouds", "cloud"),
        ("Rain", "cloud-rain"),
        ("Thunderstorm", "bolt"),
        ("Snow", "snowflake"),
        ("Mist", "smog"),
        ("Smoke", "smog"),
        ("Haze", "smog"),
        ("Dust", "smog"),
        ("Fog", "smog"),
    ];

    #[test]
    fn test_known_conditions() {
        for (condition, icon) in KNOWN {
            assert_eq!(icon_for(condition), icon, "condition {condition}");
        }
    }

    #[test]
    fn test_unknown_conditions_use_default() {
        assert_eq!(icon_for("Drizzle"), "cloud");
        assert_eq!(icon_for("Tornado"), "cloud");
        assert_eq!(icon_for(""), "cloud");
        // lookup is case-sensitive
        assert_eq!(icon_for("clear"), "cloud");
    }

    #[test]
    fn test_serde_names_match_as_str() {
        let json = serde_json::to_string(&WeatherIcon::CloudRain).unwrap();
        assert_eq!(json, "\"cloud-rain\"");
        assert_eq!(WeatherIcon::Smog.to_string(), "smog");
    }

    proptest! {
        #[test]
        fn prop_unmapped_labels_resolve_to_default(label in "[A-Za-z ]{0,16}") {
            prop_assume!(!KNOWN.iter().any(|(c, _)| *c == label));
            prop_assert_eq!(icon_for(&label), "cloud");
        }

        #[test]
        fn prop_mapping_is_deterministic(idx in 0usize..KNOWN.len()) {
            let (condition, _) = KNOWN[idx];
            prop_assert_eq!(icon_for(condition), icon_for(condition));
        }
    }
}
