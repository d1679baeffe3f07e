use ratatui::{
    Frame,
    layout::{Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{
    app::state::{AppMode, AppState},
    ui::{theme::Theme, widgets::shared::panel_block},
};

const PLACEHOLDER: &str = "Enter city name";

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, theme: Theme) {
    let block = panel_block(" Search ", theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let line = if state.input.is_empty() {
        Line::from(Span::styled(
            PLACEHOLDER,
            Style::default()
                .fg(theme.muted_text)
                .add_modifier(Modifier::ITALIC),
        ))
    } else {
        Line::from(vec![
            Span::styled("› ", Style::default().fg(theme.accent)),
            Span::styled(state.input.clone(), Style::default().fg(theme.text)),
        ])
    };
    frame.render_widget(Paragraph::new(line), inner);

    if !matches!(state.mode, AppMode::Farewell | AppMode::Quit) && inner.width > 0 {
        let typed = u16::try_from(state.input.chars().count()).unwrap_or(u16::MAX);
        let offset = if state.input.is_empty() { 0 } else { 2 };
        let x = inner
            .x
            .saturating_add(offset)
            .saturating_add(typed)
            .min(inner.right().saturating_sub(1));
        frame.set_cursor_position(Position::new(x, inner.y));
    }
}
