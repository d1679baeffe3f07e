use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, Table, Wrap},
};

use crate::{
    domain::{
        categories::{AqiCategory, HEALTH_RECOMMENDATIONS, classify_aqi_reading},
        weather::AirQualityReading,
    },
    ui::{
        format,
        theme::{Theme, severity_color},
        widgets::shared::{label_style, panel_block, value_style},
    },
};

#[must_use]
pub fn panel_height(reading: &AirQualityReading) -> u16 {
    if AqiCategory::reading_needs_health_advice(reading.aqi) {
        8
    } else {
        6
    }
}

pub fn render(frame: &mut Frame, area: Rect, reading: &AirQualityReading, theme: Theme) {
    let block = panel_block(" Air Quality Index (AQI) ", theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let category = classify_aqi_reading(reading.aqi);
    let [table_area, notes_area] =
        Layout::vertical([Constraint::Length(3), Constraint::Min(1)]).areas(inner);

    frame.render_widget(pollutant_table(reading, category, theme), table_area);
    frame.render_widget(
        Paragraph::new(note_lines(reading, category, theme)).wrap(Wrap { trim: true }),
        notes_area,
    );
}

fn pollutant_table(
    reading: &AirQualityReading,
    category: AqiCategory,
    theme: Theme,
) -> Table<'static> {
    let p = reading.pollutants;
    let aqi_style = Style::default()
        .fg(severity_color(theme, category.color))
        .add_modifier(Modifier::BOLD);

    let labels = ["AQI", "CO", "NO₂", "O₃", "PM2.5"]
        .map(|label| Cell::from(label).style(label_style(theme)));
    let mut values = vec![Cell::from(aqi_value(reading.aqi)).style(aqi_style)];
    values.extend(
        [p.co, p.no2, p.o3, p.pm2_5]
            .map(|v| Cell::from(format::concentration(v)).style(value_style(theme))),
    );
    let captions = [
        category.label,
        "Carbon Monoxide",
        "Nitrogen Dioxide",
        "Ozone",
        "Fine Particles",
    ]
    .map(|caption| Cell::from(caption).style(label_style(theme)));

    Table::new(
        vec![Row::new(labels), Row::new(values), Row::new(captions)],
        [Constraint::Fill(1); 5],
    )
    .column_spacing(2)
}

fn note_lines(
    reading: &AirQualityReading,
    category: AqiCategory,
    theme: Theme,
) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(vec![
        Span::styled(
            format!("{}: ", category.label),
            Style::default()
                .fg(severity_color(theme, category.color))
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(category.description, Style::default().fg(theme.text)),
    ])];
    if AqiCategory::reading_needs_health_advice(reading.aqi) {
        lines.push(Line::from(Span::styled(
            "Health Recommendations:",
            Style::default().fg(theme.warning).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            HEALTH_RECOMMENDATIONS.join(" · "),
            label_style(theme),
        )));
    }
    lines
}

#[must_use]
pub fn aqi_value(aqi: Option<i64>) -> String {
    aqi.map_or_else(|| format::NOT_AVAILABLE.to_string(), |aqi| aqi.to_string())
}
