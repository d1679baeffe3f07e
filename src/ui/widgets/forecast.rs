use chrono::Timelike;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{Axis, Block, Cell, Chart, Dataset, GraphType, Paragraph, Row, Table, Tabs},
};

use crate::{
    cli::IconMode,
    domain::{categories::condition_glyph, forecast::DayBucket, weather::WeatherReport},
    ui::{
        format,
        theme::{Theme, temp_color},
        widgets::shared::{label_style, panel_block, value_style},
    },
};

const HOURLY_ROWS: u16 = 6;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    report: &WeatherReport,
    selected_day: usize,
    icons: IconMode,
    theme: Theme,
) {
    let block = panel_block(format!(" {}-Day Forecast ", report.days.len()), theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(day) = report.days.get(selected_day) else {
        frame.render_widget(
            Paragraph::new("No forecast data available.").style(label_style(theme)),
            inner,
        );
        return;
    };

    let [tabs_area, body, hourly] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Min(6),
        Constraint::Length(HOURLY_ROWS),
    ])
    .areas(inner);

    frame.render_widget(day_tabs(report, selected_day, theme), tabs_area);

    let [summary, chart] =
        Layout::horizontal([Constraint::Length(26), Constraint::Min(20)]).areas(body);
    frame.render_widget(Paragraph::new(summary_lines(day, theme)), summary);
    render_chart(frame, chart, report, day, theme);
    frame.render_widget(hourly_table(report, day, icons, theme), hourly);
}

fn day_tabs(report: &WeatherReport, selected_day: usize, theme: Theme) -> Tabs<'static> {
    Tabs::new(
        report
            .days
            .iter()
            .map(|day| format::day_label(day.date))
            .collect::<Vec<_>>(),
    )
    .select(selected_day)
    .style(label_style(theme))
    .highlight_style(
        Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
    )
    .divider("|")
}

fn summary_lines(day: &DayBucket, theme: Theme) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled("Average Temperature", label_style(theme))),
        Line::from(Span::styled(
            format::temperature(day.avg_temp_c),
            Style::default()
                .fg(temp_color(theme, day.avg_temp_c))
                .add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(Span::styled("Temperature Range", label_style(theme))),
        Line::from(Span::styled(
            format!(
                "{} - {}",
                format::temperature(day.min_temp_c),
                format::temperature(day.max_temp_c)
            ),
            value_style(theme),
        )),
    ]
}

/// Hour of day as a fractional x coordinate, in the report's display zone.
pub fn chart_points(report: &WeatherReport, day: &DayBucket) -> Vec<(f64, f64)> {
    day.samples
        .iter()
        .map(|sample| {
            let local = report.zone.localize(sample.time);
            let hour = f64::from(local.hour()) + f64::from(local.minute()) / 60.0;
            (hour, sample.temperature_c)
        })
        .collect()
}

fn render_chart(
    frame: &mut Frame,
    area: Rect,
    report: &WeatherReport,
    day: &DayBucket,
    theme: Theme,
) {
    let points = chart_points(report, day);
    let (x_min, x_max) = padded_bounds(points.iter().map(|(x, _)| *x), 0.5);
    let (y_min, y_max) = padded_bounds(points.iter().map(|(_, y)| *y), 1.0);
    let (y_min, y_max) = (y_min.floor(), y_max.ceil());

    let dataset = Dataset::default()
        .name("Temperature (°C)")
        .marker(Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(theme.accent))
        .data(&points);

    let axis_style = label_style(theme);
    let chart = Chart::new(vec![dataset])
        .block(Block::default().title(Line::from(Span::styled(
            format!("Temperature Variation on {}", format::day_label(day.date)),
            label_style(theme),
        ))))
        .x_axis(
            Axis::default()
                .title("Time")
                .style(axis_style)
                .bounds([x_min, x_max])
                .labels(vec![hour_label(x_min), hour_label(x_max)]),
        )
        .y_axis(
            Axis::default()
                .title("°C")
                .style(axis_style)
                .bounds([y_min, y_max])
                .labels(vec![format!("{y_min}"), format!("{y_max}")]),
        )
        .hidden_legend_constraints((Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)));
    frame.render_widget(chart, area);
}

/// Min and max of `values`, widened so a single point still spans an axis.
fn padded_bounds(values: impl Iterator<Item = f64>, pad: f64) -> (f64, f64) {
    let (min, max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), v| {
        (min.min(v), max.max(v))
    });
    if !min.is_finite() || !max.is_finite() {
        return (0.0, 1.0);
    }
    (min - pad, max + pad)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn hour_label(hour: f64) -> String {
    let clamped = hour.clamp(0.0, 23.99);
    let minutes = (clamped * 60.0).round() as u32;
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

fn hourly_table(
    report: &WeatherReport,
    day: &DayBucket,
    icons: IconMode,
    theme: Theme,
) -> Table<'static> {
    let samples = &day.samples;
    let row = |label: &'static str, cells: Vec<Cell<'static>>| {
        let mut all = vec![Cell::from(label).style(label_style(theme))];
        all.extend(cells);
        Row::new(all)
    };

    let times = samples
        .iter()
        .map(|s| Cell::from(format::clock(report.zone, s.time)).style(value_style(theme)))
        .collect();
    let temps = samples
        .iter()
        .map(|s| {
            Cell::from(format::temperature(s.temperature_c))
                .style(Style::default().fg(temp_color(theme, s.temperature_c)))
        })
        .collect();
    let glyphs = samples
        .iter()
        .map(|s| Cell::from(condition_glyph(&s.condition.main, icons)))
        .collect();
    let descriptions = samples
        .iter()
        .map(|s| Cell::from(format::capitalize(&s.condition.description)))
        .collect();
    let humidity = samples
        .iter()
        .map(|s| Cell::from(format::percent(s.humidity_pct)))
        .collect();
    let wind = samples
        .iter()
        .map(|s| Cell::from(format::wind_speed(s.wind_speed_ms)))
        .collect();

    let mut widths = vec![Constraint::Length(9)];
    widths.extend(vec![Constraint::Fill(1); samples.len()]);
    Table::new(
        vec![
            row("Time", times),
            row("Temp", temps),
            row("Sky", glyphs),
            row("Weather", descriptions),
            row("Humidity", humidity),
            row("Wind", wind),
        ],
        widths,
    )
    .column_spacing(1)
    .style(Style::default().fg(theme.text))
}
