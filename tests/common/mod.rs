#![allow(clippy::cast_precision_loss)]
#![allow(dead_code)]

use std::time::Duration;

use owm_dash::{
    app::{events::AppEvent, state::AppState},
    config::AppConfig,
    data::openweather::WeatherClient,
};
use ratatui::{Terminal, backend::TestBackend};
use serde_json::{Value, json};
use tokio::sync::mpsc;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

/// 2026-02-12T00:00:00Z, a Thursday.
pub const BASE_TS: i64 = 1_770_854_400;
pub const API_KEY: &str = "test-key";

pub fn config_for(server: &MockServer) -> AppConfig {
    AppConfig::new(API_KEY).with_base_url(server.uri())
}

pub fn client_for(server: &MockServer) -> WeatherClient {
    WeatherClient::new(&config_for(server)).expect("client")
}

pub fn state_for(server: &MockServer) -> AppState {
    let config = config_for(server);
    let client = WeatherClient::new(&config).expect("client");
    AppState::new(&config, client, None)
}

pub fn london_current() -> Value {
    json!({
        "coord": {"lon": -0.1257, "lat": 51.5085},
        "weather": [{"id": 500, "main": "Rain", "description": "light rain", "icon": "10d"}],
        "base": "stations",
        "main": {
            "temp": 12.5,
            "feels_like": 11.8,
            "temp_min": 11.0,
            "temp_max": 13.9,
            "pressure": 1012,
            "humidity": 81
        },
        "visibility": 10000,
        "wind": {"speed": 4.1, "deg": 220},
        "clouds": {"all": 75},
        "dt": BASE_TS + 10 * 3600,
        "sys": {
            "type": 2,
            "id": 2_075_535,
            "country": "GB",
            "sunrise": BASE_TS + 7 * 3600 + 25 * 60,
            "sunset": BASE_TS + 17 * 3600 + 5 * 60
        },
        "timezone": 0,
        "id": 2_643_743,
        "name": "London",
        "cod": 200
    })
}

/// Forty 3-hour steps from `BASE_TS`, warming 0.5°C per step and resetting
/// at midnight UTC.
pub fn london_forecast() -> Value {
    let list: Vec<Value> = (0..40_i64)
        .map(|idx| {
            let temp = 4.0 + (idx % 8) as f64 * 0.5;
            json!({
                "dt": BASE_TS + idx * 3 * 3600,
                "main": {
                    "temp": temp,
                    "feels_like": temp - 1.0,
                    "pressure": 1010,
                    "humidity": 70
                },
                "weather": [{
                    "id": 803,
                    "main": "Clouds",
                    "description": "broken clouds",
                    "icon": "04d"
                }],
                "clouds": {"all": 60},
                "wind": {"speed": 3.5, "deg": 200},
                "dt_txt": "ignored"
            })
        })
        .collect();
    json!({
        "cod": "200",
        "message": 0,
        "cnt": 40,
        "list": list,
        "city": {"id": 2_643_743, "name": "London", "country": "GB", "timezone": 0}
    })
}

pub fn london_air_quality() -> Value {
    json!({
        "coord": {"lon": -0.1257, "lat": 51.5085},
        "list": [{
            "main": {"aqi": 3},
            "components": {
                "co": 230.31,
                "no": 0.1,
                "no2": 14.05,
                "o3": 61.51,
                "so2": 2.1,
                "pm2_5": 8.2,
                "pm10": 11.4,
                "nh3": 0.5
            },
            "dt": BASE_TS + 10 * 3600
        }]
    })
}

pub fn london_uv() -> Value {
    json!({"lat": 51.51, "lon": -0.13, "date": BASE_TS + 12 * 3600, "value": 4.2})
}

pub fn not_found_body() -> Value {
    json!({"cod": "404", "message": "city not found"})
}

pub async fn mount_json(server: &MockServer, endpoint: &str, status: u16, body: Value) {
    Mock::given(method("GET"))
        .and(path(endpoint))
        .and(query_param("appid", API_KEY))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .mount(server)
        .await;
}

/// Every endpoint answers for London.
pub async fn mount_london(server: &MockServer) {
    mount_json(server, "/data/2.5/weather", 200, london_current()).await;
    mount_json(server, "/data/2.5/forecast", 200, london_forecast()).await;
    mount_json(server, "/data/2.5/air_pollution", 200, london_air_quality()).await;
    mount_json(server, "/data/2.5/uvi", 200, london_uv()).await;
}

/// Waits for the next event the spawned search sends back and applies it.
pub async fn settle(
    state: &mut AppState,
    tx: &mpsc::Sender<AppEvent>,
    rx: &mut mpsc::Receiver<AppEvent>,
) {
    let event = tokio::time::timeout(Duration::from_secs(10), rx.recv())
        .await
        .expect("search finished in time")
        .expect("channel open");
    state.handle_event(event, tx).await.expect("apply event");
}

pub fn render_to_string(state: &AppState, width: u16, height: u16) -> String {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).expect("terminal");
    terminal
        .draw(|frame| owm_dash::ui::render(frame, state))
        .expect("draw");

    let buffer = terminal.backend().buffer().clone();
    let mut lines = Vec::new();
    for y in 0..height {
        let mut line = String::new();
        for x in 0..width {
            line.push_str(buffer[(x, y)].symbol());
        }
        lines.push(line.trim_end().to_string());
    }
    lines.join("\n")
}
