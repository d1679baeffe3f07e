pub mod format;
pub mod snapshot;
pub mod theme;
pub mod widgets;

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::{
    app::state::{AppMode, AppState, FAREWELL_MESSAGE},
    domain::weather::WeatherReport,
    ui::{
        theme::{Theme, detect_color_capability, theme_for},
        widgets::shared::{label_style, panel_block},
    },
};

pub const MIN_WIDTH: u16 = 60;
pub const MIN_HEIGHT: u16 = 20;

const KEY_HINTS: &str = "Enter search · ←/→ day · Ctrl-L my location · Ctrl-R refresh · Esc quit";

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let theme = theme_for(detect_color_capability());

    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        let warning = Paragraph::new(format!(
            "Terminal too small. Resize to at least {MIN_WIDTH}x{MIN_HEIGHT}."
        ))
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("owm-dash"));
        frame.render_widget(warning, area);
        return;
    }

    let [search, status, body] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .areas(area);

    widgets::search::render(frame, search, state, theme);
    render_status_line(frame, status, state, theme);

    match (&state.report, state.mode) {
        (_, AppMode::Farewell) => render_message(frame, body, FAREWELL_MESSAGE, theme),
        (Some(report), _) => render_report(frame, body, state, report, theme),
        (None, AppMode::Loading) => render_message(frame, body, &state.loading_message, theme),
        (None, _) => render_message(
            frame,
            body,
            "Search for a city to see current conditions, a 5-day forecast and air quality.",
            theme,
        ),
    }
}

fn render_status_line(frame: &mut Frame, area: Rect, state: &AppState, theme: Theme) {
    let line = if let Some(error) = &state.last_error {
        Line::from(Span::styled(
            error.clone(),
            Style::default().fg(theme.danger).add_modifier(Modifier::BOLD),
        ))
    } else if state.search_in_flight {
        Line::from(Span::styled(
            state.loading_message.clone(),
            Style::default().fg(theme.info),
        ))
    } else if let Some(notice) = &state.notice {
        Line::from(Span::styled(notice.clone(), Style::default().fg(theme.warning)))
    } else {
        Line::from(Span::styled(KEY_HINTS, label_style(theme)))
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn render_message(frame: &mut Frame, area: Rect, message: &str, theme: Theme) {
    let block = panel_block(" owm-dash ", theme);
    let paragraph = Paragraph::new(Line::from(Span::styled(
        message.to_string(),
        Style::default().fg(theme.text),
    )))
    .wrap(Wrap { trim: true })
    .block(block);
    frame.render_widget(paragraph, area);
}

fn render_report(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    report: &WeatherReport,
    theme: Theme,
) {
    let air_height = report
        .air_quality
        .as_ref()
        .map_or(0, widgets::air_quality::panel_height);
    let [current, forecast, air] = Layout::vertical([
        Constraint::Length(widgets::current::PANEL_HEIGHT),
        Constraint::Min(8),
        Constraint::Length(air_height),
    ])
    .areas(area);

    widgets::current::render(frame, current, report, state.icon_mode, theme);
    widgets::forecast::render(
        frame,
        forecast,
        report,
        state.selected_day,
        state.icon_mode,
        theme,
    );
    if let Some(reading) = &report.air_quality {
        widgets::air_quality::render(frame, air, reading, theme);
    }
}
