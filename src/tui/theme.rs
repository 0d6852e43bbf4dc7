//! Colors for the editor, resolved from the user's theme preference.
//!
//! `ThemeMode::System` follows the OS appearance through `dark-light`.

use ratatui::style::Color;

use crate::config::ThemeMode;

/// Semantic colors used by every widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Borders, titles and labels
    pub primary: Color,
    /// Selection, cursor and key names
    pub accent: Color,
    /// Key column of the help overlay
    pub success: Color,
    /// Assertive announcements
    pub warning: Color,

    pub text: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    /// Unfocused borders
    pub inactive: Color,

    pub background: Color,
    /// Palette strip cursor
    pub highlight_bg: Color,
    /// Help modal background
    pub surface: Color,

    /// Ring shades, cycled by layer
    pub rings: [Color; 4],
    /// Newest ring while it flashes
    pub flash: Color,
}

impl Theme {
    /// Resolves a user preference. `System` asks the OS.
    #[must_use]
    pub fn from_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
            ThemeMode::System => Self::detect(),
        }
    }

    /// Theme matching the OS appearance, dark when it cannot be read.
    #[must_use]
    pub fn detect() -> Self {
        match dark_light::detect() {
            Ok(dark_light::Mode::Light) => Self::light(),
            Ok(dark_light::Mode::Dark | dark_light::Mode::Unspecified) | Err(_) => Self::dark(),
        }
    }

    #[must_use]
    pub const fn dark() -> Self {
        Self {
            primary: Color::Cyan,
            accent: Color::Yellow,
            success: Color::Green,
            warning: Color::LightRed,

            text: Color::White,
            text_secondary: Color::Gray,
            text_muted: Color::DarkGray,
            inactive: Color::Gray,

            background: Color::Black,
            highlight_bg: Color::DarkGray,
            surface: Color::Rgb(24, 24, 32),

            rings: [
                Color::Rgb(40, 40, 60),
                Color::Rgb(30, 50, 45),
                Color::Rgb(55, 40, 40),
                Color::Rgb(45, 45, 30),
            ],
            flash: Color::Rgb(110, 90, 20),
        }
    }

    /// Light variant. Accent and warning are darkened to stay readable on white.
    #[must_use]
    pub const fn light() -> Self {
        Self {
            primary: Color::Blue,
            accent: Color::Rgb(180, 100, 0),
            success: Color::Rgb(0, 128, 0),
            warning: Color::Rgb(190, 30, 30),

            text: Color::Black,
            text_secondary: Color::Rgb(60, 60, 60),
            text_muted: Color::Gray,
            inactive: Color::Rgb(180, 180, 180),

            background: Color::White,
            highlight_bg: Color::Rgb(230, 230, 230),
            surface: Color::Rgb(245, 245, 240),

            rings: [
                Color::Rgb(225, 230, 250),
                Color::Rgb(220, 245, 230),
                Color::Rgb(250, 225, 225),
                Color::Rgb(250, 245, 215),
            ],
            flash: Color::Rgb(255, 220, 120),
        }
    }

    /// Background for a ring.
    #[must_use]
    pub const fn ring_color(&self, layer: usize) -> Color {
        self.rings[layer % self.rings.len()]
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::detect()
    }
}
