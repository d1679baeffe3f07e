use ratatui::{
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Borders},
};

use crate::ui::theme::Theme;

pub fn panel_block(title: impl Into<Line<'static>>, theme: Theme) -> Block<'static> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border))
        .title_style(
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )
}

pub fn label_style(theme: Theme) -> Style {
    Style::default().fg(theme.muted_text)
}

pub fn value_style(theme: Theme) -> Style {
    Style::default().fg(theme.text).add_modifier(Modifier::BOLD)
}

/// Per-day temperature strip for the one-shot report: squeezes a day's
/// sample temperatures into `width` block glyphs, coldest as `▁`.
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation
)]
pub fn sparkline_blocks(values: &[f64], width: usize) -> String {
    const BARS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];
    if values.is_empty() || width == 0 {
        return String::new();
    }
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let span = (max - min).max(0.001);
    (0..width)
        .map(|idx| {
            let src = (idx * values.len() / width).min(values.len().saturating_sub(1));
            let norm = ((values[src] - min) / span).clamp(0.0, 1.0);
            BARS[(norm * (BARS.len() - 1) as f64).round() as usize]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::sparkline_blocks;

    #[test]
    fn sparkline_blocks_empty_input() {
        assert_eq!(sparkline_blocks(&[], 8), String::new());
        assert_eq!(sparkline_blocks(&[1.0, 2.0], 0), String::new());
    }

    #[test]
    fn flat_temperatures_stay_on_the_floor() {
        let out = sparkline_blocks(&[5.0, 5.0, 5.0], 3);
        assert_eq!(out, "▁▁▁");
    }

    #[test]
    fn warming_day_climbs_to_full_bar() {
        let temps = [4.0, 4.5, 5.0, 5.5, 6.0, 6.5, 7.0, 7.5];
        assert_eq!(sparkline_blocks(&temps, 8), "▁▂▃▄▅▆▇█");
    }
}
