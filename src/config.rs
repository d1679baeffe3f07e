use std::fmt;

use thiserror::Error;

use crate::{
    cli::{Cli, IconMode},
    domain::weather::TimeBasis,
};

pub const API_KEY_ENV: &str = "OPENWEATHER_API_KEY";
pub const DEFAULT_API_BASE_URL: &str = "https://api.openweathermap.org";
pub const ICON_BASE_URL: &str = "https://openweathermap.org/img/wn";
pub const DEFAULT_GEOIP_URL: &str = "https://ipapi.co/json/";

pub const SETUP_INSTRUCTIONS: &str = "\
API key not found. Please set up your OpenWeatherMap API key.

  1. Sign up at https://openweathermap.org/api
  2. Get your API key
  3. Set it as an environment variable named OPENWEATHER_API_KEY";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("OPENWEATHER_API_KEY is not set")]
    MissingApiKey,
}

/// Settings resolved once at startup and handed to the client and UI.
#[derive(Clone)]
pub struct AppConfig {
    pub api_key: String,
    pub api_base_url: String,
    pub geoip_url: String,
    pub time_basis: TimeBasis,
    pub icon_mode: IconMode,
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("api_key", &"<redacted>")
            .field("api_base_url", &self.api_base_url)
            .field("geoip_url", &self.geoip_url)
            .field("time_basis", &self.time_basis)
            .field("icon_mode", &self.icon_mode)
            .finish()
    }
}

impl AppConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            geoip_url: DEFAULT_GEOIP_URL.to_string(),
            time_basis: TimeBasis::default(),
            icon_mode: IconMode::Emoji,
        }
    }

    pub fn from_env(cli: &Cli) -> Result<Self, ConfigError> {
        Self::from_parts(cli, std::env::var(API_KEY_ENV).ok())
    }

    pub fn from_parts(cli: &Cli, api_key: Option<String>) -> Result<Self, ConfigError> {
        let api_key = api_key
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        let mut config = Self::new(api_key);
        if let Some(url) = &cli.api_base_url {
            config.api_base_url = url.trim_end_matches('/').to_string();
        }
        if let Some(url) = &cli.geoip_url {
            config.geoip_url.clone_from(url);
        }
        config.time_basis = cli.time_basis();
        config.icon_mode = cli.icon_mode();
        Ok(config)
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.api_base_url = base_url.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn missing_or_blank_key_is_an_error() {
        let cli = Cli::parse_from(["owm-dash"]);
        assert_eq!(
            AppConfig::from_parts(&cli, None).unwrap_err(),
            ConfigError::MissingApiKey
        );
        assert_eq!(
            AppConfig::from_parts(&cli, Some("  ".to_string())).unwrap_err(),
            ConfigError::MissingApiKey
        );
    }

    #[test]
    fn cli_overrides_flow_into_config() {
        let cli = Cli::parse_from([
            "owm-dash",
            "--api-base-url",
            "http://127.0.0.1:9000/",
            "--time-basis",
            "local",
            "--ascii-icons",
        ]);
        let config = AppConfig::from_parts(&cli, Some(" abc123 ".to_string())).expect("config");
        assert_eq!(config.api_key, "abc123");
        assert_eq!(config.api_base_url, "http://127.0.0.1:9000");
        assert_eq!(config.geoip_url, DEFAULT_GEOIP_URL);
        assert_eq!(config.time_basis, TimeBasis::Local);
        assert_eq!(config.icon_mode, IconMode::Ascii);
    }

    #[test]
    fn debug_output_hides_api_key() {
        let config = AppConfig::new("super-secret");
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("<redacted>"));
    }
}
