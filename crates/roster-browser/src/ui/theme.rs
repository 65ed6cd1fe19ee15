//! Color themes.

use ratatui::style::Color;

pub struct Theme {
    pub foreground: Color,
    pub highlight: Color,
    pub accent: Color,
    pub dim: Color,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            foreground: Color::White,
            highlight: Color::Cyan,
            accent: Color::Yellow,
            dim: Color::DarkGray,
        }
    }

    pub fn light() -> Self {
        Self {
            foreground: Color::Black,
            highlight: Color::Blue,
            accent: Color::Magenta,
            dim: Color::Gray,
        }
    }

    /// Resolve a theme by name, defaulting to dark.
    pub fn by_name(name: &str) -> Self {
        match name {
            "light" => Self::light(),
            _ => Self::dark(),
        }
    }
}
