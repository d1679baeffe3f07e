use crate::cli::IconMode;

/// Display color attached to a category; the UI maps it to a terminal color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Green,
    Yellow,
    Orange,
    Red,
    Purple,
    Gray,
}

impl Severity {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Orange => "orange",
            Self::Red => "red",
            Self::Purple => "purple",
            Self::Gray => "gray",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UvLevel {
    Low,
    Moderate,
    High,
    VeryHigh,
    Extreme,
}

impl UvLevel {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::High => "High",
            Self::VeryHigh => "Very High",
            Self::Extreme => "Extreme",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UvCategory {
    pub level: UvLevel,
    pub color: Severity,
    pub recommendation: &'static str,
}

const UV_BANDS: [UvCategory; 5] = [
    UvCategory {
        level: UvLevel::Low,
        color: Severity::Green,
        recommendation: "Wear sunglasses on bright days",
    },
    UvCategory {
        level: UvLevel::Moderate,
        color: Severity::Yellow,
        recommendation: "Stay in shade near midday. Wear sunscreen, a hat, and sunglasses.",
    },
    UvCategory {
        level: UvLevel::High,
        color: Severity::Orange,
        recommendation: "Reduce time in the sun between 10am-4pm. Apply sunscreen every 2 hours.",
    },
    UvCategory {
        level: UvLevel::VeryHigh,
        color: Severity::Red,
        recommendation: "Minimize sun exposure between 10am-4pm. Use SPF 30+ sunscreen.",
    },
    UvCategory {
        level: UvLevel::Extreme,
        color: Severity::Purple,
        recommendation: "Avoid sun exposure between 10am-4pm. Full protective clothing recommended.",
    },
];

/// Buckets a UV index into Low [0,2], Moderate [3,5], High [6,7],
/// Very High [8,10] and Extreme (10,∞).
///
/// Fractional readings between two integer bands stay in the lower band, so
/// 2.5 is Low and 10.0 is still Very High. Negative and NaN readings are Low.
#[must_use]
pub fn classify_uv(index: f64) -> UvCategory {
    let band = if index.is_nan() || index < 3.0 {
        0
    } else if index < 6.0 {
        1
    } else if index < 8.0 {
        2
    } else if index <= 10.0 {
        3
    } else {
        4
    };
    UV_BANDS[band]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AqiCategory {
    pub label: &'static str,
    pub color: Severity,
    pub description: &'static str,
}

impl AqiCategory {
    /// Moderate and worse readings come with health recommendations.
    #[must_use]
    pub fn needs_health_advice(aqi: i64) -> bool {
        (3..=5).contains(&aqi)
    }

    #[must_use]
    pub fn reading_needs_health_advice(aqi: Option<i64>) -> bool {
        aqi.is_some_and(Self::needs_health_advice)
    }
}

const AQI_LEVELS: [(i64, AqiCategory); 5] = [
    (
        1,
        AqiCategory {
            label: "Good",
            color: Severity::Green,
            description: "Air quality is satisfactory.",
        },
    ),
    (
        2,
        AqiCategory {
            label: "Fair",
            color: Severity::Yellow,
            description: "Air quality is acceptable.",
        },
    ),
    (
        3,
        AqiCategory {
            label: "Moderate",
            color: Severity::Orange,
            description: "Sensitive groups may experience health effects.",
        },
    ),
    (
        4,
        AqiCategory {
            label: "Poor",
            color: Severity::Red,
            description: "Everyone may begin to experience health effects.",
        },
    ),
    (
        5,
        AqiCategory {
            label: "Very Poor",
            color: Severity::Purple,
            description: "Health warnings of emergency conditions.",
        },
    ),
];

const AQI_UNKNOWN: AqiCategory = AqiCategory {
    label: "Unknown",
    color: Severity::Gray,
    description: "No data available.",
};

pub const HEALTH_RECOMMENDATIONS: [&str; 4] = [
    "Reduce outdoor activities",
    "Keep windows closed",
    "Use air purifiers if available",
    "Sensitive groups should take extra precautions",
];

/// Like `classify_aqi`, with a missing index read as Unknown.
#[must_use]
pub fn classify_aqi_reading(aqi: Option<i64>) -> AqiCategory {
    aqi.map_or(AQI_UNKNOWN, classify_aqi)
}

#[must_use]
pub fn classify_aqi(aqi: i64) -> AqiCategory {
    AQI_LEVELS
        .iter()
        .find_map(|(candidate, category)| (*candidate == aqi).then_some(*category))
        .unwrap_or(AQI_UNKNOWN)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompassPoint {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

const COMPASS_POINTS: [CompassPoint; 8] = [
    CompassPoint::N,
    CompassPoint::NE,
    CompassPoint::E,
    CompassPoint::SE,
    CompassPoint::S,
    CompassPoint::SW,
    CompassPoint::W,
    CompassPoint::NW,
];

impl CompassPoint {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::N => "N",
            Self::NE => "NE",
            Self::E => "E",
            Self::SE => "SE",
            Self::S => "S",
            Self::SW => "SW",
            Self::W => "W",
            Self::NW => "NW",
        }
    }
}

/// Nearest of eight 45° sectors. A bearing that normalizes to exactly 0°
/// means the provider sent no direction, so it yields `None` rather than N.
#[must_use]
#[allow(
    clippy::float_cmp,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn compass_direction(degrees: f64) -> Option<CompassPoint> {
    if !degrees.is_finite() {
        return None;
    }
    let normalized = degrees.rem_euclid(360.0);
    if normalized == 0.0 {
        return None;
    }
    let sector = (normalized / 45.0).round() as usize % COMPASS_POINTS.len();
    Some(COMPASS_POINTS[sector])
}

#[must_use]
pub fn condition_emoji(main: &str) -> &'static str {
    condition_tokens(main).1
}

#[must_use]
pub fn condition_glyph(main: &str, mode: IconMode) -> &'static str {
    let (ascii, emoji) = condition_tokens(main);
    match mode {
        IconMode::Ascii => ascii,
        IconMode::Emoji => emoji,
    }
}

fn condition_tokens(main: &str) -> (&'static str, &'static str) {
    match main {
        "Clear" => ("SUN", "☀️"),
        "Clouds" => ("CLD", "☁️"),
        "Rain" => ("RAN", "🌧️"),
        "Drizzle" => ("DRZ", "🌦️"),
        "Thunderstorm" => ("THN", "⛈️"),
        "Snow" => ("SNW", "❄️"),
        "Mist" => ("MST", "🌫️"),
        "Fog" => ("FOG", "🌁"),
        _ => ("---", "🌈"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uv_band_boundaries() {
        assert_eq!(classify_uv(0.0).level, UvLevel::Low);
        assert_eq!(classify_uv(2.0).level, UvLevel::Low);
        assert_eq!(classify_uv(3.0).level, UvLevel::Moderate);
        assert_eq!(classify_uv(5.0).level, UvLevel::Moderate);
        assert_eq!(classify_uv(6.0).level, UvLevel::High);
        assert_eq!(classify_uv(7.0).level, UvLevel::High);
        assert_eq!(classify_uv(8.0).level, UvLevel::VeryHigh);
        assert_eq!(classify_uv(10.0).level, UvLevel::VeryHigh);
        assert_eq!(classify_uv(10.01).level, UvLevel::Extreme);
        assert_eq!(classify_uv(11.0).level, UvLevel::Extreme);
    }

    #[test]
    fn uv_fractions_stay_in_lower_band() {
        assert_eq!(classify_uv(2.5).level, UvLevel::Low);
        assert_eq!(classify_uv(5.9).level, UvLevel::Moderate);
        assert_eq!(classify_uv(7.5).level, UvLevel::High);
    }

    #[test]
    fn uv_categories_carry_color_and_advice() {
        let extreme = classify_uv(14.0);
        assert_eq!(extreme.color, Severity::Purple);
        assert!(extreme.recommendation.contains("protective clothing"));
        assert_eq!(classify_uv(f64::NAN).level, UvLevel::Low);
    }

    #[test]
    fn aqi_known_levels() {
        let labels = (1..=5)
            .map(|aqi| classify_aqi(aqi).label)
            .collect::<Vec<_>>();
        assert_eq!(labels, ["Good", "Fair", "Moderate", "Poor", "Very Poor"]);
        assert_eq!(classify_aqi(4).color, Severity::Red);
    }

    #[test]
    fn aqi_out_of_range_is_unknown() {
        for aqi in [0, 6, -1, 42] {
            let category = classify_aqi(aqi);
            assert_eq!(category.label, "Unknown");
            assert_eq!(category.color, Severity::Gray);
            assert_eq!(category.description, "No data available.");
        }
    }

    #[test]
    fn missing_aqi_is_unknown() {
        assert_eq!(classify_aqi_reading(None).label, "Unknown");
        assert_eq!(classify_aqi_reading(None).color, Severity::Gray);
        assert_eq!(classify_aqi_reading(Some(2)).label, "Fair");
    }

    #[test]
    fn health_advice_from_moderate_up() {
        assert!(!AqiCategory::needs_health_advice(2));
        assert!(AqiCategory::needs_health_advice(3));
        assert!(AqiCategory::needs_health_advice(5));
        assert!(!AqiCategory::needs_health_advice(7));
    }

    #[test]
    fn zero_degrees_means_no_direction() {
        assert_eq!(compass_direction(0.0), None);
        assert_eq!(compass_direction(360.0), None);
        assert_eq!(compass_direction(-720.0), None);
        assert_eq!(compass_direction(f64::NAN), None);
    }

    #[test]
    fn compass_sectors_round_to_nearest() {
        assert_eq!(compass_direction(44.0), Some(CompassPoint::NE));
        assert_eq!(compass_direction(46.0), Some(CompassPoint::NE));
        assert_eq!(compass_direction(90.0), Some(CompassPoint::E));
        assert_eq!(compass_direction(220.0), Some(CompassPoint::SW));
        assert_eq!(compass_direction(350.0), Some(CompassPoint::N));
        assert_eq!(compass_direction(10.0), Some(CompassPoint::N));
        assert_eq!(compass_direction(-90.0), Some(CompassPoint::W));
    }

    #[test]
    fn condition_glyphs_have_fallback() {
        assert_eq!(condition_emoji("Rain"), "🌧️");
        assert_eq!(condition_emoji("Fog"), "🌁");
        assert_eq!(condition_emoji("Haze"), "🌈");
        assert_eq!(condition_glyph("Snow", IconMode::Ascii), "SNW");
        assert_eq!(condition_glyph("Tornado", IconMode::Ascii), "---");
    }
}
