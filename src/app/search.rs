use chrono::Utc;
use tracing::info;

use crate::{
    data::{
        error::FetchError,
        openweather::{WeatherClient, icon_url},
    },
    domain::{
        forecast::group_by_day,
        weather::{DisplayZone, LocationQuery, TimeBasis, WeatherReport},
    },
};

/// Runs one search: current conditions, then the forecast, then the optional
/// air-quality and UV lookups when the provider returned coordinates.
///
/// A failure of either required call ends the search before anything else is
/// requested. Optional lookups never fail the search.
pub async fn run_search(
    client: &WeatherClient,
    query: &LocationQuery,
    basis: TimeBasis,
) -> Result<WeatherReport, FetchError> {
    let current = client.fetch_current(query).await?;
    let forecast = client.fetch_forecast(query).await?;

    let (air_quality, uv_index) = match current.coordinates {
        Some(coords) => (
            client.fetch_air_quality(coords).await,
            client.fetch_uv_index(coords).await,
        ),
        None => (None, None),
    };

    let zone = DisplayZone::new(
        basis,
        forecast.utc_offset_secs.unwrap_or(current.utc_offset_secs),
    );
    let days = group_by_day(&forecast.samples, zone);
    info!(
        query = %query.label(),
        place = %current.place_label(),
        days = days.len(),
        air_quality = air_quality.is_some(),
        "search complete"
    );

    Ok(WeatherReport {
        query: query.clone(),
        icon_url: icon_url(&current.condition.icon),
        current,
        days,
        air_quality,
        uv_index,
        zone,
        fetched_at: Utc::now(),
    })
}
