//! Session-wide theme and language preferences.

use crate::config::{Config, ThemeMode};
use crate::i18n::Language;

/// Theme and language for the running session.
///
/// Initialized once from the config, owned by the editor and read by the
/// front end through it. Written back to the config when the session ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionContext {
    theme_mode: ThemeMode,
    language: Language,
}

impl SessionContext {
    /// Creates a context with explicit values.
    #[must_use]
    pub const fn new(theme_mode: ThemeMode, language: Language) -> Self {
        Self {
            theme_mode,
            language,
        }
    }

    /// Reads the persisted preferences.
    #[must_use]
    pub const fn from_config(config: &Config) -> Self {
        Self::new(config.ui.theme_mode, config.ui.language)
    }

    /// Current theme mode.
    #[must_use]
    pub const fn theme_mode(&self) -> ThemeMode {
        self.theme_mode
    }

    /// Current language.
    #[must_use]
    pub const fn language(&self) -> Language {
        self.language
    }

    /// Advances the theme cycle and returns the new mode.
    pub fn cycle_theme(&mut self) -> ThemeMode {
        self.theme_mode = self.theme_mode.next();
        self.theme_mode
    }

    /// Flips the language and returns the new one.
    pub fn toggle_language(&mut self) -> Language {
        self.language = self.language.toggled();
        self.language
    }

    /// Copies the preferences into a config for saving.
    pub fn apply_to(&self, config: &mut Config) {
        config.ui.theme_mode = self.theme_mode;
        config.ui.language = self.language;
    }
}
