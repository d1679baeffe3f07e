//! Plain-text rendering of a report for `--one-shot` runs.

use crate::{
    cli::IconMode,
    domain::{
        categories::{
            AqiCategory, HEALTH_RECOMMENDATIONS, classify_aqi_reading, classify_uv,
            compass_direction, condition_glyph,
        },
        weather::{AirQualityReading, WeatherReport},
    },
    ui::{
        format,
        widgets::{air_quality::aqi_value, shared::sparkline_blocks},
    },
};

#[must_use]
pub fn render_snapshot(report: &WeatherReport, icons: IconMode) -> String {
    let mut sections = vec![current_section(report, icons), forecast_section(report)];
    if let Some(reading) = &report.air_quality {
        sections.push(air_quality_section(reading));
    }
    sections.join("\n\n")
}

fn current_section(report: &WeatherReport, icons: IconMode) -> String {
    let current = &report.current;
    let zone = report.zone;
    let mut lines = vec![
        format!("Weather in {}", current.place_label()),
        format!("Updated on {}", format::updated_on(zone, current.observed_at)),
        format!(
            "{} {}, feels like {}, {}",
            condition_glyph(&current.condition.main, icons),
            format::temperature(current.temperature_c),
            format::temperature(current.feels_like_c),
            format::capitalize(&current.condition.description),
        ),
        format!("Humidity: {}", format::percent(current.humidity_pct)),
        format!("Wind Speed: {}", format::wind_speed(current.wind_speed_ms)),
    ];
    if let Some(point) = current.wind_direction_deg.and_then(compass_direction) {
        lines.push(format!("Wind Direction: {}", point.label()));
    }
    lines.extend([
        format!("Pressure: {}", format::pressure(current.pressure_hpa)),
        format!("Visibility: {}", format::visibility(current.visibility_m)),
        format!("Cloudiness: {}", format::percent(current.cloud_cover_pct)),
        format!("Sunrise: {}", format::optional_clock(zone, current.sunrise)),
        format!("Sunset: {}", format::optional_clock(zone, current.sunset)),
    ]);
    lines.push(match report.uv_index {
        Some(index) => {
            let category = classify_uv(index);
            format!(
                "UV Index: {} ({}) {}",
                format::number(index),
                category.level.label(),
                category.recommendation
            )
        }
        None => format!("UV Index: {}", format::NOT_AVAILABLE),
    });
    lines.push(format!("Icon: {}", report.icon_url));
    lines.join("\n")
}

fn forecast_section(report: &WeatherReport) -> String {
    let mut lines = vec![format!("{}-Day Forecast", report.days.len())];
    lines.extend(report.days.iter().map(|day| {
        let temps: Vec<f64> = day.samples.iter().map(|s| s.temperature_c).collect();
        format!(
            "{:<18}avg {:<8}range {} - {}  {}",
            format::day_label(day.date),
            format::temperature(day.avg_temp_c),
            format::temperature(day.min_temp_c),
            format::temperature(day.max_temp_c),
            sparkline_blocks(&temps, temps.len()),
        )
    }));
    lines.join("\n")
}

fn air_quality_section(reading: &AirQualityReading) -> String {
    let category = classify_aqi_reading(reading.aqi);
    let p = reading.pollutants;
    let mut lines = vec![
        format!(
            "Air Quality Index (AQI): {} ({})",
            aqi_value(reading.aqi),
            category.label
        ),
        format!(
            "CO: {} | NO₂: {} | O₃: {} | PM2.5: {}",
            format::concentration(p.co),
            format::concentration(p.no2),
            format::concentration(p.o3),
            format::concentration(p.pm2_5),
        ),
        format!("{}: {}", category.label, category.description),
    ];
    if AqiCategory::reading_needs_health_advice(reading.aqi) {
        lines.push("Health Recommendations:".to_string());
        lines.extend(HEALTH_RECOMMENDATIONS.iter().map(|tip| format!("- {tip}")));
    }
    lines.join("\n")
}
