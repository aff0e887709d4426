use crate::config::Config;
use ratatui::style::Color;

#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub foreground: Color,
    pub title: Color,
    pub border: Color,
    pub focused: Color,
    pub button_fg: Color,
    pub button_bg: Color,
    pub error: Color,
    pub status_bar_bg: Color,
    pub status_bar_fg: Color,
}

impl Theme {
    pub fn default_theme() -> Self {
        Self {
            background: Color::Reset,
            foreground: Color::White,
            title: Color::Cyan,
            border: Color::Gray,
            focused: Color::Cyan,
            button_fg: Color::White,
            button_bg: Color::Blue,
            error: Color::Red,
            status_bar_bg: Color::DarkGray,
            status_bar_fg: Color::White,
        }
    }

    pub fn dark() -> Self {
        Self {
            background: Color::Black,
            foreground: Color::White,
            title: Color::Cyan,
            border: Color::DarkGray,
            focused: Color::Cyan,
            button_fg: Color::Black,
            button_bg: Color::Cyan,
            error: Color::LightRed,
            status_bar_bg: Color::DarkGray,
            status_bar_fg: Color::White,
        }
    }

    pub fn light() -> Self {
        Self {
            background: Color::White,
            foreground: Color::Black,
            title: Color::Rgb(0x2e, 0x43, 0x55),
            border: Color::Gray,
            focused: Color::Blue,
            button_fg: Color::White,
            button_bg: Color::Rgb(0x2e, 0x43, 0x55),
            error: Color::Red,
            status_bar_bg: Color::LightBlue,
            status_bar_fg: Color::Black,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        match config.theme.as_str() {
            "dark" => Self::dark(),
            "light" => Self::light(),
            _ => Self::default_theme(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_theme()
    }
}
