#![allow(clippy::missing_errors_doc)]

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::domain::weather::{Coordinates, LocationQuery, TimeBasis};

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum TimeBasisArg {
    /// Use the queried location's own UTC offset
    Location,
    /// Use this machine's clock
    Local,
    Utc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IconMode {
    Emoji,
    Ascii,
}

#[derive(Debug, Parser, Clone)]
#[command(
    name = "owm-dash",
    version,
    about = "Terminal dashboard for OpenWeatherMap current weather, forecast and air quality"
)]
pub struct Cli {
    /// City to search on startup
    pub city: Option<String>,

    /// Direct latitude (requires --lon)
    #[arg(long, allow_negative_numbers = true)]
    pub lat: Option<f64>,

    /// Direct longitude (requires --lat)
    #[arg(long, allow_negative_numbers = true)]
    pub lon: Option<f64>,

    /// Clock used for forecast days and sunrise/sunset times
    #[arg(long, value_enum, default_value_t = TimeBasisArg::Location)]
    pub time_basis: TimeBasisArg,

    /// Force ASCII condition icons
    #[arg(long)]
    pub ascii_icons: bool,

    /// Print weather snapshot to stdout and exit (non-interactive)
    #[arg(long)]
    pub one_shot: bool,

    /// Append logs to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Override the OpenWeatherMap base URL
    #[arg(long, hide = true)]
    pub api_base_url: Option<String>,

    /// Override the IP geolocation endpoint
    #[arg(long, hide = true)]
    pub geoip_url: Option<String>,
}

impl Cli {
    pub fn validate(&self) -> anyhow::Result<()> {
        match (self.lat, self.lon) {
            (Some(_), None) | (None, Some(_)) => {
                anyhow::bail!("--lat and --lon must be provided together")
            }
            (Some(lat), Some(lon)) if !Coordinates::new(lat, lon).is_valid() => {
                anyhow::bail!("--lat must be within ±90 and --lon within ±180")
            }
            _ => Ok(()),
        }
    }

    /// Coordinates win over a city name when both are given.
    #[must_use]
    pub fn initial_query(&self) -> Option<LocationQuery> {
        if let (Some(lat), Some(lon)) = (self.lat, self.lon) {
            return Some(LocationQuery::Coordinates(Coordinates::new(lat, lon)));
        }
        self.city.as_deref().and_then(LocationQuery::city)
    }

    #[must_use]
    pub fn icon_mode(&self) -> IconMode {
        if self.ascii_icons {
            IconMode::Ascii
        } else {
            IconMode::Emoji
        }
    }

    #[must_use]
    pub fn time_basis(&self) -> TimeBasis {
        match self.time_basis {
            TimeBasisArg::Location => TimeBasis::Location,
            TimeBasisArg::Local => TimeBasis::Local,
            TimeBasisArg::Utc => TimeBasis::Utc,
        }
    }
}
