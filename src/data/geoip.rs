use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::domain::weather::Coordinates;

#[derive(Debug, Deserialize)]
struct IpApiResponse {
    latitude: Option<f64>,
    longitude: Option<f64>,
}

/// Approximate position of this machine from its public IP. Optional: any
/// failure yields `None` and the dashboard keeps working without it.
pub async fn detect_coordinates(url: &str) -> Option<Coordinates> {
    let client = Client::builder()
        .timeout(std::time::Duration::from_secs(5))
        .build()
        .ok()?;
    let response: IpApiResponse = match client.get(url).send().await {
        Ok(response) => response.json().await.ok()?,
        Err(err) => {
            warn!(error = %err, "ip geolocation unavailable");
            return None;
        }
    };
    let coords = Coordinates::new(response.latitude?, response.longitude?);
    debug!(lat = coords.lat, lon = coords.lon, "ip geolocation resolved");
    coords.is_valid().then_some(coords)
}
