//! Ratatui theme implementation of PresentationMapper.

use client_frontend_core::PresentationMapper;
use game_core::state::{DEFAULT_STAT_VALUE, ENERGY, HEALTH};
use game_core::{TextColor, TextStyle};
use ratatui::style::{Color, Modifier, Style};
use runtime::LogKind;

/// Ratatui-specific theme implementing PresentationMapper.
#[derive(Debug, Default, Clone, Copy)]
pub struct RatatuiTheme;

impl RatatuiTheme {
    pub fn new() -> Self {
        Self
    }

    pub fn color(color: TextColor) -> Color {
        match color {
            TextColor::Red => Color::Red,
            TextColor::Green => Color::Green,
            TextColor::Yellow => Color::Yellow,
            TextColor::Blue => Color::Blue,
            TextColor::Magenta => Color::Magenta,
            TextColor::Cyan => Color::LightCyan,
            TextColor::White => Color::Gray,
            TextColor::Indexed(index) => Color::Indexed(index),
        }
    }

    /// Style of section titles and frame borders.
    pub fn chrome(&self) -> Style {
        Style::default().fg(Color::Indexed(244))
    }

    pub fn dim(&self) -> Style {
        Style::default().fg(Color::DarkGray)
    }
}

impl PresentationMapper for RatatuiTheme {
    type Style = Style;

    fn style_text(&self, style: TextStyle) -> Self::Style {
        let mut out = Style::default();
        if let Some(color) = style.color {
            out = out.fg(Self::color(color));
        }
        if style.bold {
            out = out.add_modifier(Modifier::BOLD);
        }
        out
    }

    fn style_log(&self, kind: LogKind) -> Self::Style {
        let color = match kind {
            LogKind::Interaction => Color::Gray,
            LogKind::Inventory => Color::Green,
            LogKind::Profile => Color::Magenta,
            LogKind::System => Color::Cyan,
            LogKind::Combat => Color::LightRed,
        };
        Style::default().fg(color)
    }

    fn style_stat(&self, name: &str, value: i64) -> Self::Style {
        if name != HEALTH && name != ENERGY {
            return Style::default().fg(Color::White);
        }

        let percent = value.saturating_mul(100) / DEFAULT_STAT_VALUE;
        let color = match (name == HEALTH, percent) {
            (true, 75..) => Color::Green,
            (true, 50..=74) => Color::Yellow,
            (true, 25..=49) => Color::LightRed,
            (true, _) => Color::Red,
            (false, 75..) => Color::Cyan,
            (false, 50..=74) => Color::Blue,
            (false, 25..=49) => Color::LightBlue,
            (false, _) => Color::DarkGray,
        };
        Style::default().fg(color)
    }
}
