use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, Table},
};

use crate::{
    cli::IconMode,
    domain::{
        categories::{classify_uv, compass_direction, condition_glyph},
        weather::WeatherReport,
    },
    ui::{
        format,
        theme::{Theme, severity_color, temp_color},
        widgets::shared::{label_style, panel_block, value_style},
    },
};

pub const PANEL_HEIGHT: u16 = 11;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    report: &WeatherReport,
    icons: IconMode,
    theme: Theme,
) {
    let current = &report.current;
    let block = panel_block(format!(" Weather in {} ", current.place_label()), theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [headline, metrics, uv] = Layout::vertical([
        Constraint::Length(4),
        Constraint::Length(4),
        Constraint::Length(1),
    ])
    .areas(inner);

    frame.render_widget(Paragraph::new(headline_lines(report, icons, theme)), headline);
    frame.render_widget(metrics_table(report, theme), metrics);
    frame.render_widget(Paragraph::new(uv_line(report.uv_index, theme)), uv);
}

fn headline_lines(report: &WeatherReport, icons: IconMode, theme: Theme) -> Vec<Line<'static>> {
    let current = &report.current;
    let muted = label_style(theme);
    vec![
        Line::from(vec![
            Span::raw(format!("{} ", condition_glyph(&current.condition.main, icons))),
            Span::styled(
                format::temperature(current.temperature_c),
                Style::default()
                    .fg(temp_color(theme, current.temperature_c))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("   Feels like ", muted),
            Span::styled(format::temperature(current.feels_like_c), value_style(theme)),
        ]),
        Line::from(Span::styled(
            format::capitalize(&current.condition.description),
            Style::default().fg(theme.text),
        )),
        Line::from(vec![
            Span::styled("Updated on ", muted),
            Span::styled(
                format::updated_on(report.zone, current.observed_at),
                Style::default().fg(theme.text),
            ),
        ]),
        Line::from(Span::styled(report.icon_url.clone(), muted)),
    ]
}

fn metrics_table(report: &WeatherReport, theme: Theme) -> Table<'static> {
    let current = &report.current;
    let zone = report.zone;

    let mut first = vec![
        ("Humidity", format::percent(current.humidity_pct)),
        ("Wind Speed", format::wind_speed(current.wind_speed_ms)),
        ("Pressure", format::pressure(current.pressure_hpa)),
        ("Visibility", format::visibility(current.visibility_m)),
    ];
    let mut second = vec![
        ("Cloudiness", format::percent(current.cloud_cover_pct)),
        ("Sunrise", format::optional_clock(zone, current.sunrise)),
        ("Sunset", format::optional_clock(zone, current.sunset)),
    ];
    // A calm or unreported bearing leaves the slot out entirely.
    if let Some(point) = current.wind_direction_deg.and_then(compass_direction) {
        second.push(("Wind Direction", point.label().to_string()));
    }
    let columns = first.len().max(second.len());
    first.resize(columns, ("", String::new()));
    second.resize(columns, ("", String::new()));

    let rows = [first, second].into_iter().flat_map(|metrics| {
        let labels = Row::new(
            metrics
                .iter()
                .map(|(label, _)| Cell::from(*label).style(label_style(theme)))
                .collect::<Vec<_>>(),
        );
        let values = Row::new(
            metrics
                .into_iter()
                .map(|(_, value)| Cell::from(value).style(value_style(theme)))
                .collect::<Vec<_>>(),
        );
        [labels, values]
    });

    Table::new(rows.collect::<Vec<_>>(), vec![Constraint::Fill(1); columns]).column_spacing(2)
}

fn uv_line(uv_index: Option<f64>, theme: Theme) -> Line<'static> {
    let label = Span::styled("UV Index: ", label_style(theme));
    let Some(index) = uv_index else {
        return Line::from(vec![label, Span::styled(format::NOT_AVAILABLE, value_style(theme))]);
    };
    let category = classify_uv(index);
    let color = severity_color(theme, category.color);
    Line::from(vec![
        label,
        Span::styled(
            format!("{} ({})", format::number(index), category.level.label()),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("  {}", category.recommendation), label_style(theme)),
    ])
}
