//! Light and dark color sets.

use ratatui::style::{Color, Modifier, Style};

use super::app::NoticeLevel;

/// Colors used by every view, picked by the dark mode flag.
#[derive(Clone, Copy, Debug)]
pub struct Palette {
    pub fg: Color,
    pub bg: Color,
    pub muted: Color,
    pub primary: Color,
    pub accent: Color,
    pub bar_bg: Color,
}

impl Palette {
    /// Returns the palette for the given mode.
    pub fn for_mode(dark: bool) -> Self {
        if dark {
            Self {
                fg: Color::Gray,
                bg: Color::Black,
                muted: Color::DarkGray,
                primary: Color::LightRed,
                accent: Color::Yellow,
                bar_bg: Color::DarkGray,
            }
        } else {
            Self {
                fg: Color::Black,
                bg: Color::White,
                muted: Color::Gray,
                primary: Color::Red,
                accent: Color::Magenta,
                bar_bg: Color::Gray,
            }
        }
    }

    /// Base style for panel contents.
    pub fn base(&self) -> Style {
        Style::default().fg(self.fg).bg(self.bg)
    }

    /// Border style for a panel, highlighted when focused.
    pub fn border(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.primary)
        } else {
            Style::default().fg(self.muted)
        }
    }

    /// Style for the highlighted row of a list.
    pub fn selected(&self) -> Style {
        Style::default()
            .fg(self.bg)
            .bg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Color for a notice of the given level.
    pub fn notice(&self, level: NoticeLevel) -> Color {
        match level {
            NoticeLevel::Success => Color::Green,
            NoticeLevel::Info => Color::Cyan,
            NoticeLevel::Error => Color::Red,
        }
    }
}
