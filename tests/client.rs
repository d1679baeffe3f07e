mod common;

use common::{
    API_KEY, client_for, london_air_quality, london_current, london_forecast, mount_json,
    not_found_body,
};
use owm_dash::{
    data::error::FetchError,
    domain::{
        categories::{Severity, classify_aqi_reading},
        weather::{Coordinates, LocationQuery},
    },
};
use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

fn london() -> LocationQuery {
    LocationQuery::City("London".to_string())
}

#[tokio::test]
async fn current_weather_is_requested_in_metric_units() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .and(query_param("q", "London"))
        .and(query_param("units", "metric"))
        .and(query_param("appid", API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(london_current()))
        .expect(1)
        .mount(&server)
        .await;

    let current = client_for(&server)
        .fetch_current(&london())
        .await
        .expect("current weather");

    assert_eq!(current.place_label(), "London, GB");
    assert_eq!(current.temperature_c, 12.5);
    assert_eq!(current.humidity_pct, 81.0);
    assert_eq!(current.wind_direction_deg, Some(220.0));
    assert_eq!(current.coordinates, Some(Coordinates::new(51.5085, -0.1257)));
}

#[tokio::test]
async fn coordinates_are_sent_as_lat_lon() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .and(query_param("lat", "51.5085"))
        .and(query_param("lon", "-0.1257"))
        .respond_with(ResponseTemplate::new(200).set_body_json(london_current()))
        .expect(1)
        .mount(&server)
        .await;

    let query = LocationQuery::Coordinates(Coordinates::new(51.5085, -0.1257));
    let current = client_for(&server)
        .fetch_current(&query)
        .await
        .expect("current weather");
    assert_eq!(current.name, "London");
}

#[tokio::test]
async fn forecast_asks_for_forty_steps() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/data/2.5/forecast"))
        .and(query_param("cnt", "40"))
        .and(query_param("units", "metric"))
        .respond_with(ResponseTemplate::new(200).set_body_json(london_forecast()))
        .expect(1)
        .mount(&server)
        .await;

    let forecast = client_for(&server)
        .fetch_forecast(&london())
        .await
        .expect("forecast");
    assert_eq!(forecast.samples.len(), 40);
    assert_eq!(forecast.utc_offset_secs, Some(0));
}

#[tokio::test]
async fn http_404_is_not_found() {
    let server = MockServer::start().await;
    mount_json(&server, "/data/2.5/weather", 404, not_found_body()).await;

    let err = client_for(&server)
        .fetch_current(&LocationQuery::City("Zzzznotacity".to_string()))
        .await
        .expect_err("unknown city");
    assert_eq!(err, FetchError::NotFound("Zzzznotacity".to_string()));
}

#[tokio::test]
async fn string_404_in_a_200_body_is_not_found() {
    let server = MockServer::start().await;
    mount_json(&server, "/data/2.5/weather", 200, not_found_body()).await;

    let err = client_for(&server)
        .fetch_current(&LocationQuery::City("Zzzznotacity".to_string()))
        .await
        .expect_err("unknown city");
    assert!(err.is_not_found());
}

#[tokio::test]
async fn server_errors_are_transport_failures() {
    let server = MockServer::start().await;
    mount_json(&server, "/data/2.5/weather", 500, json!({"message": "boom"})).await;

    let err = client_for(&server)
        .fetch_current(&london())
        .await
        .expect_err("server error");
    assert!(matches!(err, FetchError::Transport(_)), "got {err:?}");
    assert!(!err.to_string().contains(API_KEY), "key leaked: {err}");
    assert!(!format!("{err:?}").contains("appid"), "query leaked: {err:?}");
    assert_eq!(
        err.user_message("London"),
        "Could not retrieve weather data. Please try again later."
    );
}

#[tokio::test]
async fn malformed_body_is_a_decode_failure() {
    let server = MockServer::start().await;
    mount_json(&server, "/data/2.5/weather", 200, json!({"cod": 200, "name": "London"})).await;

    let err = client_for(&server)
        .fetch_current(&london())
        .await
        .expect_err("missing blocks");
    assert!(matches!(err, FetchError::Decode(_)), "got {err:?}");
}

#[tokio::test]
async fn air_quality_reads_first_entry() {
    let server = MockServer::start().await;
    mount_json(&server, "/data/2.5/air_pollution", 200, london_air_quality()).await;

    let reading = client_for(&server)
        .fetch_air_quality(Coordinates::new(51.5085, -0.1257))
        .await
        .expect("reading");
    assert_eq!(reading.aqi, Some(3));
    assert_eq!(reading.pollutants.pm2_5, Some(8.2));
}

#[tokio::test]
async fn air_quality_without_index_is_unknown() {
    let server = MockServer::start().await;
    mount_json(
        &server,
        "/data/2.5/air_pollution",
        200,
        json!({"list": [{
            "main": {},
            "components": {"co": 1.0, "no2": 2.0, "o3": 3.0, "pm2_5": 4.0}
        }]}),
    )
    .await;

    let reading = client_for(&server)
        .fetch_air_quality(Coordinates::new(51.5085, -0.1257))
        .await
        .expect("reading kept without an index");
    assert_eq!(reading.aqi, None);
    assert_eq!(reading.pollutants.co, Some(1.0));

    let category = classify_aqi_reading(reading.aqi);
    assert_eq!(category.label, "Unknown");
    assert_eq!(category.color, Severity::Gray);
    assert_eq!(category.description, "No data available.");
}

#[tokio::test]
async fn optional_lookups_swallow_failures() {
    let server = MockServer::start().await;
    mount_json(&server, "/data/2.5/air_pollution", 401, json!({"cod": 401})).await;
    mount_json(&server, "/data/2.5/uvi", 500, json!({})).await;
    mount_json(&server, "/geo/1.0/reverse", 200, json!([])).await;

    let client = client_for(&server);
    let coords = Coordinates::new(48.85, 2.35);
    assert_eq!(client.fetch_air_quality(coords).await, None);
    assert_eq!(client.fetch_uv_index(coords).await, None);
    assert_eq!(client.reverse_geocode(coords).await, None);
}

#[tokio::test]
async fn reverse_geocode_returns_place_name() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/geo/1.0/reverse"))
        .and(query_param("limit", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"name": "Paris", "lat": 48.8589, "lon": 2.32, "country": "FR"}
        ])))
        .mount(&server)
        .await;

    let name = client_for(&server)
        .reverse_geocode(Coordinates::new(48.85, 2.35))
        .await;
    assert_eq!(name.as_deref(), Some("Paris"));
}
