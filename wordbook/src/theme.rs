//! Light and dark colour schemes for the terminal page.
//!
//! The theme is a plain owned value. Toggling it only changes which ANSI
//! colours the renderer picks; it is never written back to disk.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn from_dark(dark: bool) -> Self {
        if dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    pub fn toggle(&mut self) {
        *self = match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        };
    }

    pub fn palette(self) -> Palette {
        match self {
            Theme::Light => Palette {
                text: "\x1b[38;2;45;45;45m",
                dim: "\x1b[38;2;117;117;117m",
                accent: "\x1b[38;2;164;69;237m",
                error: "\x1b[38;2;255;82;82m",
            },
            Theme::Dark => Palette {
                text: "\x1b[38;2;255;255;255m",
                dim: "\x1b[38;2;178;178;178m",
                accent: "\x1b[38;2;196;140;255m",
                error: "\x1b[38;2;255;120;120m",
            },
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Light => write!(f, "light"),
            Theme::Dark => write!(f, "dark"),
        }
    }
}

/// ANSI foreground sequences for each role on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub text: &'static str,
    pub dim: &'static str,
    pub accent: &'static str,
    pub error: &'static str,
}

impl Palette {
    pub const BOLD: &'static str = "\x1b[1m";
    pub const ITALIC: &'static str = "\x1b[3m";
    pub const RESET: &'static str = "\x1b[0m";
}
