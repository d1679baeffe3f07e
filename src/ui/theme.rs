use ratatui::style::Color;

use crate::domain::categories::Severity;

mod capability;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorCapability {
    TrueColor,
    Xterm256,
    Basic16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub capability: ColorCapability,
    pub accent: Color,
    pub text: Color,
    pub muted_text: Color,
    pub border: Color,
    pub info: Color,
    pub success: Color,
    pub warning: Color,
    pub danger: Color,
    pub temp_cold: Color,
    pub temp_mild: Color,
    pub temp_warm: Color,
    pub temp_hot: Color,
}

pub fn detect_color_capability() -> ColorCapability {
    capability::detect_color_capability_from(
        std::env::var("TERM").ok().as_deref(),
        std::env::var("COLORTERM").ok().as_deref(),
        std::env::var("NO_COLOR").ok().as_deref(),
    )
}

#[must_use]
pub fn theme_for(capability: ColorCapability) -> Theme {
    match capability {
        ColorCapability::Basic16 => Theme {
            capability,
            accent: Color::LightBlue,
            text: Color::White,
            muted_text: Color::Gray,
            border: Color::DarkGray,
            info: Color::Cyan,
            success: Color::Green,
            warning: Color::Yellow,
            danger: Color::LightRed,
            temp_cold: Color::Cyan,
            temp_mild: Color::Green,
            temp_warm: Color::Yellow,
            temp_hot: Color::Red,
        },
        ColorCapability::TrueColor | ColorCapability::Xterm256 => Theme {
            capability,
            accent: Color::Rgb(30, 136, 229),
            text: Color::Rgb(230, 236, 242),
            muted_text: Color::Rgb(150, 163, 178),
            border: Color::Rgb(72, 86, 104),
            info: Color::Rgb(120, 200, 255),
            success: Color::Rgb(102, 187, 106),
            warning: Color::Rgb(255, 202, 40),
            danger: Color::Rgb(239, 83, 80),
            temp_cold: Color::Rgb(100, 181, 246),
            temp_mild: Color::Rgb(129, 199, 132),
            temp_warm: Color::Rgb(255, 183, 77),
            temp_hot: Color::Rgb(229, 57, 53),
        },
    }
}

#[must_use]
pub fn severity_color(theme: Theme, severity: Severity) -> Color {
    if theme.capability == ColorCapability::Basic16 {
        return match severity {
            Severity::Green => Color::Green,
            Severity::Yellow => Color::Yellow,
            Severity::Orange => Color::LightRed,
            Severity::Red => Color::Red,
            Severity::Purple => Color::Magenta,
            Severity::Gray => Color::Gray,
        };
    }
    match severity {
        Severity::Green => Color::Rgb(76, 175, 80),
        Severity::Yellow => Color::Rgb(253, 216, 53),
        Severity::Orange => Color::Rgb(251, 140, 0),
        Severity::Red => Color::Rgb(229, 57, 53),
        Severity::Purple => Color::Rgb(142, 36, 170),
        Severity::Gray => theme.muted_text,
    }
}

#[must_use]
pub fn temp_color(theme: Theme, temp_c: f64) -> Color {
    if temp_c < 5.0 {
        theme.temp_cold
    } else if temp_c < 18.0 {
        theme.temp_mild
    } else if temp_c < 28.0 {
        theme.temp_warm
    } else {
        theme.temp_hot
    }
}
