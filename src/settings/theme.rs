use colored::Color;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn theme(self) -> Theme {
        match self {
            ThemeMode::Light => Theme::light(),
            ThemeMode::Dark => Theme::dark(),
        }
    }
}

/// Cell colors used by the terminal renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    pub background: Color,
    pub wall: Color,
    pub path: Color,
    pub start: Color,
    pub end: Color,
    pub text: Color,
}

impl Theme {
    pub fn light() -> Self {
        Theme {
            background: Color::BrightWhite,
            wall: Color::BrightBlack,
            path: Color::BrightYellow,
            start: Color::BrightGreen,
            end: Color::BrightRed,
            text: Color::Black,
        }
    }

    pub fn dark() -> Self {
        Theme {
            background: Color::Black,
            wall: Color::White,
            path: Color::TrueColor {
                r: 255,
                g: 165,
                b: 0,
            },
            start: Color::Green,
            end: Color::Red,
            text: Color::BrightWhite,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::light()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle() {
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggled().toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.theme(), Theme::dark());
        assert_ne!(Theme::light(), Theme::dark());
    }
}
