use std::fmt;

use anyhow::{Context, Result};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, de::DeserializeOwned};
use serde_json::Value;
use tracing::{debug, warn};

use crate::{
    config::{AppConfig, ICON_BASE_URL},
    data::error::FetchError,
    domain::weather::{
        AirQualityReading, Condition, Coordinates, CurrentWeather, Forecast, ForecastSample,
        LocationQuery, Pollutants, timestamp_utc,
    },
};

const CURRENT_PATH: &str = "/data/2.5/weather";
const FORECAST_PATH: &str = "/data/2.5/forecast";
const AIR_POLLUTION_PATH: &str = "/data/2.5/air_pollution";
const UV_INDEX_PATH: &str = "/data/2.5/uvi";
const REVERSE_GEOCODE_PATH: &str = "/geo/1.0/reverse";

/// 5 days of 3-hour steps.
pub const FORECAST_SAMPLE_COUNT: u8 = 40;

/// OpenWeatherMap client. Every call is a fresh round trip; nothing is cached.
#[derive(Clone)]
pub struct WeatherClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl fmt::Debug for WeatherClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeatherClient")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .finish_non_exhaustive()
    }
}

impl WeatherClient {
    pub fn new(config: &AppConfig) -> Result<Self> {
        let client = Client::builder()
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self {
            client,
            base_url: config.api_base_url.clone(),
            api_key: config.api_key.clone(),
        })
    }

    pub async fn fetch_current(&self, query: &LocationQuery) -> Result<CurrentWeather, FetchError> {
        let mut params = location_params(query);
        params.push(("units", "metric".to_string()));
        let payload: CurrentResponse = self.get_json(CURRENT_PATH, query, params).await?;
        current_from_payload(payload)
    }

    pub async fn fetch_forecast(&self, query: &LocationQuery) -> Result<Forecast, FetchError> {
        let mut params = location_params(query);
        params.push(("units", "metric".to_string()));
        params.push(("cnt", FORECAST_SAMPLE_COUNT.to_string()));
        let payload: ForecastResponse = self.get_json(FORECAST_PATH, query, params).await?;
        Ok(forecast_from_payload(payload))
    }

    /// Best-effort: not every account tier can reach this endpoint, so any
    /// failure means "no air-quality data".
    pub async fn fetch_air_quality(&self, coords: Coordinates) -> Option<AirQualityReading> {
        let query = LocationQuery::Coordinates(coords);
        let result: Result<AirPollutionResponse, FetchError> = self
            .get_json(AIR_POLLUTION_PATH, &query, coordinate_params(coords))
            .await;
        match result {
            Ok(payload) => air_quality_from_payload(payload),
            Err(err) => {
                warn!(error = %err, "air quality unavailable");
                None
            }
        }
    }

    /// Best-effort, like air quality.
    pub async fn fetch_uv_index(&self, coords: Coordinates) -> Option<f64> {
        let query = LocationQuery::Coordinates(coords);
        let result: Result<UvResponse, FetchError> = self
            .get_json(UV_INDEX_PATH, &query, coordinate_params(coords))
            .await;
        match result {
            Ok(payload) => payload.value.filter(|value| value.is_finite()),
            Err(err) => {
                warn!(error = %err, "uv index unavailable");
                None
            }
        }
    }

    /// Nearest named place for a coordinate pair, if the provider knows one.
    pub async fn reverse_geocode(&self, coords: Coordinates) -> Option<String> {
        let query = LocationQuery::Coordinates(coords);
        let mut params = coordinate_params(coords);
        params.push(("limit", "1".to_string()));
        let result: Result<Vec<ReverseGeocodeEntry>, FetchError> =
            self.get_json(REVERSE_GEOCODE_PATH, &query, params).await;
        match result {
            Ok(entries) => entries
                .into_iter()
                .map(|entry| entry.name.trim().to_string())
                .find(|name| !name.is_empty()),
            Err(err) => {
                warn!(error = %err, "reverse geocoding failed");
                None
            }
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &LocationQuery,
        mut params: Vec<(&'static str, String)>,
    ) -> Result<T, FetchError> {
        let url = format!("{}{path}", self.base_url);
        debug!(%url, query = %query.label(), "requesting");
        params.push(("appid", self.api_key.clone()));

        let response = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(FetchError::transport)?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(FetchError::NotFound(query.label()));
        }

        let body: Value = response
            .error_for_status()
            .map_err(FetchError::transport)?
            .json()
            .await
            .map_err(FetchError::decode)?;

        check_provider_code(&body, query)?;
        serde_json::from_value(body).map_err(|err| FetchError::Decode(err.to_string()))
    }
}

/// URL of the provider's artwork for an icon code such as `10d`.
#[must_use]
pub fn icon_url(icon_code: &str) -> String {
    format!("{ICON_BASE_URL}/{icon_code}@4x.png")
}

fn location_params(query: &LocationQuery) -> Vec<(&'static str, String)> {
    match query {
        LocationQuery::City(name) => vec![("q", name.clone())],
        LocationQuery::Coordinates(coords) => coordinate_params(*coords),
    }
}

fn coordinate_params(coords: Coordinates) -> Vec<(&'static str, String)> {
    vec![
        ("lat", coords.lat.to_string()),
        ("lon", coords.lon.to_string()),
    ]
}

/// The provider repeats the HTTP status in a `cod` field, as a number on some
/// endpoints and a string on others. A 200 response may still carry `"404"`.
fn check_provider_code(body: &Value, query: &LocationQuery) -> Result<(), FetchError> {
    let code = match body.get("cod") {
        Some(Value::Number(n)) => n.as_i64(),
        Some(Value::String(s)) => s.trim().parse::<i64>().ok(),
        _ => return Ok(()),
    };
    match code {
        Some(200) | None => Ok(()),
        Some(404) => Err(FetchError::NotFound(query.label())),
        Some(other) => {
            let message = body
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or("no message");
            Err(FetchError::Transport(format!(
                "provider returned code {other}: {message}"
            )))
        }
    }
}

fn current_from_payload(payload: CurrentResponse) -> Result<CurrentWeather, FetchError> {
    let observed_at = timestamp_utc(payload.dt)
        .ok_or_else(|| FetchError::Decode(format!("invalid timestamp {}", payload.dt)))?;
    Ok(CurrentWeather {
        name: payload.name,
        country: payload.sys.country.filter(|c| !c.is_empty()),
        coordinates: payload.coord.map(|c| Coordinates::new(c.lat, c.lon)),
        temperature_c: payload.main.temp,
        feels_like_c: payload.main.feels_like,
        humidity_pct: payload.main.humidity,
        pressure_hpa: payload.main.pressure,
        wind_speed_ms: payload.wind.speed,
        wind_direction_deg: payload.wind.deg,
        condition: first_condition(payload.weather),
        cloud_cover_pct: payload.clouds.map_or(0.0, |c| c.all),
        visibility_m: payload.visibility,
        sunrise: payload.sys.sunrise.and_then(timestamp_utc),
        sunset: payload.sys.sunset.and_then(timestamp_utc),
        observed_at,
        utc_offset_secs: payload.timezone.unwrap_or_default(),
    })
}

fn forecast_from_payload(payload: ForecastResponse) -> Forecast {
    let mut samples = Vec::with_capacity(payload.list.len());
    for item in payload.list {
        let Some(time) = timestamp_utc(item.dt) else {
            debug!(dt = item.dt, "skipping forecast step with invalid timestamp");
            continue;
        };
        samples.push(ForecastSample {
            time,
            temperature_c: item.main.temp,
            feels_like_c: item.main.feels_like,
            humidity_pct: item.main.humidity,
            pressure_hpa: item.main.pressure,
            wind_speed_ms: item.wind.speed,
            condition: first_condition(item.weather),
            cloud_cover_pct: item.clouds.map_or(0.0, |c| c.all),
        });
    }
    samples.sort_by_key(|sample| sample.time);
    Forecast {
        samples,
        utc_offset_secs: payload.city.and_then(|city| city.timezone),
    }
}

fn air_quality_from_payload(payload: AirPollutionResponse) -> Option<AirQualityReading> {
    let entry = payload.list.into_iter().next()?;
    let c = entry.components;
    Some(AirQualityReading {
        aqi: entry.main.aqi,
        pollutants: Pollutants {
            co: c.co,
            no: c.no,
            no2: c.no2,
            o3: c.o3,
            so2: c.so2,
            pm2_5: c.pm2_5,
            pm10: c.pm10,
            nh3: c.nh3,
        },
    })
}

fn first_condition(weather: Vec<ConditionBlock>) -> Condition {
    weather.into_iter().next().map_or_else(
        || Condition {
            main: "Unknown".to_string(),
            description: "no description".to_string(),
            icon: String::new(),
        },
        |w| Condition {
            main: w.main,
            description: w.description,
            icon: w.icon,
        },
    )
}

#[derive(Debug, Deserialize)]
struct CurrentResponse {
    coord: Option<CoordBlock>,
    #[serde(default)]
    weather: Vec<ConditionBlock>,
    main: MainBlock,
    visibility: Option<f64>,
    wind: WindBlock,
    clouds: Option<CloudsBlock>,
    dt: i64,
    sys: SysBlock,
    timezone: Option<i32>,
    name: String,
}

#[derive(Debug, Deserialize)]
struct CoordBlock {
    lat: f64,
    lon: f64,
}

#[derive(Debug, Deserialize)]
struct ConditionBlock {
    main: String,
    description: String,
    icon: String,
}

#[derive(Debug, Deserialize)]
struct MainBlock {
    temp: f64,
    feels_like: f64,
    humidity: f64,
    pressure: f64,
}

#[derive(Debug, Deserialize)]
struct WindBlock {
    speed: f64,
    deg: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct CloudsBlock {
    all: f64,
}

#[derive(Debug, Deserialize)]
struct SysBlock {
    country: Option<String>,
    sunrise: Option<i64>,
    sunset: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    #[serde(default)]
    list: Vec<ForecastItem>,
    city: Option<CityBlock>,
}

#[derive(Debug, Deserialize)]
struct ForecastItem {
    dt: i64,
    main: MainBlock,
    #[serde(default)]
    weather: Vec<ConditionBlock>,
    wind: WindBlock,
    clouds: Option<CloudsBlock>,
}

#[derive(Debug, Deserialize)]
struct CityBlock {
    timezone: Option<i32>,
}

#[derive(Debug, Deserialize)]
struct AirPollutionResponse {
    #[serde(default)]
    list: Vec<AirPollutionEntry>,
}

#[derive(Debug, Deserialize)]
struct AirPollutionEntry {
    #[serde(default)]
    main: AirPollutionMain,
    #[serde(default)]
    components: ComponentsBlock,
}

#[derive(Debug, Default, Deserialize)]
struct AirPollutionMain {
    aqi: Option<i64>,
}

#[derive(Debug, Default, Deserialize)]
struct ComponentsBlock {
    co: Option<f64>,
    no: Option<f64>,
    no2: Option<f64>,
    o3: Option<f64>,
    so2: Option<f64>,
    pm2_5: Option<f64>,
    pm10: Option<f64>,
    nh3: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct UvResponse {
    value: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct ReverseGeocodeEntry {
    name: String,
}
