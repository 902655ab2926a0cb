use crate::domain::ThemeMode;
use ratatui::style::{Color, Modifier, Style};

/// Colors for one theme mode
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub success: Color,
    pub danger: Color,
    pub border: Color,
}

const LIGHT: Palette = Palette {
    background: Color::Rgb(0xf5, 0xf7, 0xfa),
    text: Color::Rgb(0x2d, 0x34, 0x36),
    muted: Color::Rgb(0x63, 0x6e, 0x72),
    accent: Color::Rgb(0x4a, 0x6f, 0xa5),
    success: Color::Rgb(0x2e, 0xcc, 0x71),
    danger: Color::Rgb(0xe7, 0x4c, 0x3c),
    border: Color::Rgb(0xb0, 0xbe, 0xd4),
};

const DARK: Palette = Palette {
    background: Color::Rgb(0x12, 0x12, 0x12),
    text: Color::Rgb(0xe1, 0xe1, 0xe1),
    muted: Color::Rgb(0xa0, 0xa0, 0xa0),
    accent: Color::Rgb(0xbb, 0x86, 0xfc),
    success: Color::Rgb(0x03, 0xda, 0xc6),
    danger: Color::Rgb(0xcf, 0x66, 0x79),
    border: Color::Rgb(0x44, 0x3a, 0x55),
};

/// Palette for a theme mode
pub fn palette(theme: ThemeMode) -> Palette {
    match theme {
        ThemeMode::Light => LIGHT,
        ThemeMode::Dark => DARK,
    }
}

impl Palette {
    /// Default text style on the app background
    pub fn base_style(&self) -> Style {
        Style::default().fg(self.text).bg(self.background)
    }

    /// Selected row highlight style
    pub fn selected_style(&self) -> Style {
        Style::default()
            .fg(self.background)
            .bg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    /// Title style for panes
    pub fn title_style(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Border of the pane that has keyboard focus
    pub fn focused_border_style(&self) -> Style {
        Style::default().fg(self.accent)
    }

    /// Completed task or purchased item
    pub fn done_style(&self) -> Style {
        Style::default()
            .fg(self.muted)
            .add_modifier(Modifier::CROSSED_OUT)
    }

    pub fn price_style(&self) -> Style {
        Style::default().fg(self.success)
    }

    /// Keybinding hint style
    pub fn hint_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn error_style(&self) -> Style {
        Style::default().fg(self.danger).add_modifier(Modifier::BOLD)
    }

    pub fn modal_style(&self) -> Style {
        Style::default().fg(self.text).bg(self.background)
    }
}
