use chrono::{DateTime, Duration, Utc};

use crate::domain::{
    forecast::group_by_day,
    weather::{
        AirQualityReading, Condition, Coordinates, CurrentWeather, DisplayZone, ForecastSample,
        LocationQuery, Pollutants, WeatherReport, timestamp_utc,
    },
};

/// 2026-02-12T00:00:00Z
pub(crate) const BASE_TS: i64 = 1_770_854_400;

fn base_time() -> DateTime<Utc> {
    timestamp_utc(BASE_TS).expect("valid fixture timestamp")
}

pub(crate) fn condition(main: &str, description: &str) -> Condition {
    Condition {
        main: main.to_string(),
        description: description.to_string(),
        icon: "10d".to_string(),
    }
}

pub(crate) fn current_weather(name: &str, temperature_c: f64) -> CurrentWeather {
    CurrentWeather {
        name: name.to_string(),
        country: Some("GB".to_string()),
        coordinates: Some(Coordinates::new(51.5085, -0.1257)),
        temperature_c,
        feels_like_c: temperature_c - 1.5,
        humidity_pct: 81.0,
        pressure_hpa: 1012.0,
        wind_speed_ms: 4.1,
        wind_direction_deg: Some(220.0),
        condition: condition("Rain", "light rain"),
        cloud_cover_pct: 75.0,
        visibility_m: Some(10_000.0),
        sunrise: timestamp_utc(BASE_TS + 7 * 3600 + 25 * 60),
        sunset: timestamp_utc(BASE_TS + 17 * 3600 + 5 * 60),
        observed_at: base_time() + Duration::hours(10),
        utc_offset_secs: 0,
    }
}

pub(crate) fn forecast_sample(time: DateTime<Utc>, temperature_c: f64) -> ForecastSample {
    ForecastSample {
        time,
        temperature_c,
        feels_like_c: temperature_c - 1.0,
        humidity_pct: 70.0,
        pressure_hpa: 1010.0,
        wind_speed_ms: 3.5,
        condition: condition("Clouds", "broken clouds"),
        cloud_cover_pct: 60.0,
    }
}

#[allow(clippy::cast_precision_loss)]
pub(crate) fn sample_series(count: usize) -> Vec<ForecastSample> {
    (0..count)
        .map(|idx| {
            let time = base_time() + Duration::hours(3 * idx as i64);
            forecast_sample(time, 4.0 + (idx % 8) as f64 * 0.5)
        })
        .collect()
}

pub(crate) fn report(with_air_quality: bool) -> WeatherReport {
    let zone = DisplayZone::utc();
    WeatherReport {
        query: LocationQuery::City("London".to_string()),
        current: current_weather("London", 12.5),
        days: group_by_day(&sample_series(40), zone),
        air_quality: with_air_quality.then_some(AirQualityReading {
            aqi: Some(3),
            pollutants: Pollutants {
                co: Some(230.31),
                no: Some(0.1),
                no2: Some(14.05),
                o3: Some(61.51),
                so2: Some(2.1),
                pm2_5: Some(8.2),
                pm10: Some(11.4),
                nh3: Some(0.5),
            },
        }),
        uv_index: Some(4.2),
        zone,
        icon_url: "https://openweathermap.org/img/wn/10d@4x.png".to_string(),
        fetched_at: base_time(),
    }
}
