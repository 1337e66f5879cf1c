use ratatui::style::{Color, Modifier, Style};

use crate::core::Theme;
use crate::domain::OrderStatus;

/// Colors for one theme
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub bg: Color,
    pub fg: Color,
    pub muted: Color,
    pub border: Color,
    pub active_border: Color,
    pub accent: Color,
    pub cursor_bg: Color,
    pub rising: Color,
    pub falling: Color,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                bg: Color::White,
                fg: Color::Black,
                muted: Color::Gray,
                border: Color::Gray,
                active_border: Color::Blue,
                accent: Color::Blue,
                cursor_bg: Color::LightBlue,
                rising: Color::Green,
                falling: Color::Red,
            },
            Theme::Dark => Self {
                bg: Color::Black,
                fg: Color::White,
                muted: Color::DarkGray,
                border: Color::DarkGray,
                active_border: Color::Cyan,
                accent: Color::LightCyan,
                cursor_bg: Color::DarkGray,
                rising: Color::LightGreen,
                falling: Color::LightRed,
            },
        }
    }

    pub fn base(&self) -> Style {
        Style::default().fg(self.fg).bg(self.bg)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn border(&self, active: bool) -> Style {
        if active {
            Style::default().fg(self.active_border)
        } else {
            Style::default().fg(self.border)
        }
    }

    pub fn title(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    pub fn status(&self, status: OrderStatus) -> Style {
        let color = match status {
            OrderStatus::InProgress => Color::Magenta,
            OrderStatus::Complete => Color::Green,
            OrderStatus::Pending => Color::Blue,
            OrderStatus::Approved => Color::Yellow,
            OrderStatus::Rejected => self.muted,
        };
        Style::default().fg(color)
    }
}
