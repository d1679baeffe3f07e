use chrono::{DateTime, Utc};

use crate::domain::forecast::DayBucket;

mod conversions;

pub use conversions::{DisplayZone, TimeBasis, timestamp_utc};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinates {
    #[must_use]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lon)
    }
}

/// What the user asked for: a free-text place name or a coordinate pair.
#[derive(Debug, Clone, PartialEq)]
pub enum LocationQuery {
    City(String),
    Coordinates(Coordinates),
}

impl LocationQuery {
    /// Builds a city query, rejecting blank input.
    #[must_use]
    pub fn city(name: &str) -> Option<Self> {
        let trimmed = name.trim();
        (!trimmed.is_empty()).then(|| Self::City(trimmed.to_string()))
    }

    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::City(name) => name.clone(),
            Self::Coordinates(coords) => format!("{:.4}, {:.4}", coords.lat, coords.lon),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Condition {
    pub main: String,
    pub description: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CurrentWeather {
    pub name: String,
    pub country: Option<String>,
    pub coordinates: Option<Coordinates>,
    pub temperature_c: f64,
    pub feels_like_c: f64,
    pub humidity_pct: f64,
    pub pressure_hpa: f64,
    pub wind_speed_ms: f64,
    pub wind_direction_deg: Option<f64>,
    pub condition: Condition,
    pub cloud_cover_pct: f64,
    pub visibility_m: Option<f64>,
    pub sunrise: Option<DateTime<Utc>>,
    pub sunset: Option<DateTime<Utc>>,
    pub observed_at: DateTime<Utc>,
    pub utc_offset_secs: i32,
}

impl CurrentWeather {
    pub fn place_label(&self) -> String {
        match &self.country {
            Some(country) => format!("{}, {}", self.name, country),
            None => self.name.clone(),
        }
    }
}

/// One 3-hour forecast step.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastSample {
    pub time: DateTime<Utc>,
    pub temperature_c: f64,
    pub feels_like_c: f64,
    pub humidity_pct: f64,
    pub pressure_hpa: f64,
    pub wind_speed_ms: f64,
    pub condition: Condition,
    pub cloud_cover_pct: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Forecast {
    pub samples: Vec<ForecastSample>,
    pub utc_offset_secs: Option<i32>,
}

/// Pollutant concentrations in μg/m³.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Pollutants {
    pub co: Option<f64>,
    pub no: Option<f64>,
    pub no2: Option<f64>,
    pub o3: Option<f64>,
    pub so2: Option<f64>,
    pub pm2_5: Option<f64>,
    pub pm10: Option<f64>,
    pub nh3: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AirQualityReading {
    /// Provider scale 1..=5; `None` when the payload carried no index.
    pub aqi: Option<i64>,
    pub pollutants: Pollutants,
}

/// Everything one search produced, ready for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReport {
    pub query: LocationQuery,
    pub current: CurrentWeather,
    pub days: Vec<DayBucket>,
    pub air_quality: Option<AirQualityReading>,
    pub uv_index: Option<f64>,
    pub zone: DisplayZone,
    pub icon_url: String,
    pub fetched_at: DateTime<Utc>,
}
