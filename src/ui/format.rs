//! Text formatting shared by the dashboard widgets and the one-shot snapshot.
//!
//! Provider numbers are shown as delivered: no rounding beyond what the
//! forecast aggregation already applied.

use chrono::{DateTime, NaiveDate, Utc};

use crate::domain::weather::DisplayZone;

pub const NOT_AVAILABLE: &str = "N/A";

#[must_use]
pub fn number(value: f64) -> String {
    format!("{value}")
}

#[must_use]
pub fn temperature(value: f64) -> String {
    format!("{}°C", number(value))
}

#[must_use]
pub fn percent(value: f64) -> String {
    format!("{}%", number(value))
}

#[must_use]
pub fn wind_speed(value: f64) -> String {
    format!("{} m/s", number(value))
}

#[must_use]
pub fn pressure(value: f64) -> String {
    format!("{} hPa", number(value))
}

#[must_use]
pub fn visibility(meters: Option<f64>) -> String {
    meters.map_or_else(
        || NOT_AVAILABLE.to_string(),
        |m| format!("{} km", number(m / 1000.0)),
    )
}

#[must_use]
pub fn concentration(value: Option<f64>) -> String {
    value.map_or_else(
        || NOT_AVAILABLE.to_string(),
        |v| format!("{} μg/m³", number(v)),
    )
}

#[must_use]
pub fn clock(zone: DisplayZone, ts: DateTime<Utc>) -> String {
    zone.localize(ts).format("%H:%M").to_string()
}

#[must_use]
pub fn optional_clock(zone: DisplayZone, ts: Option<DateTime<Utc>>) -> String {
    ts.map_or_else(|| NOT_AVAILABLE.to_string(), |ts| clock(zone, ts))
}

/// `Thursday, February 12, 2026 10:00`
#[must_use]
pub fn updated_on(zone: DisplayZone, ts: DateTime<Utc>) -> String {
    zone.localize(ts).format("%A, %B %d, %Y %H:%M").to_string()
}

/// Tab label for a forecast day, e.g. `Thursday, Feb 12`.
#[must_use]
pub fn day_label(date: NaiveDate) -> String {
    date.format("%A, %b %d").to_string()
}

#[must_use]
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
