//! Localization for announcements, palette names and UI labels.
//!
//! Two languages are supported. Every user-facing string the editor produces
//! goes through [`Message::localize`] so switching language takes effect on the
//! next render.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::config::ThemeMode;
use crate::models::PatternMode;

/// Interface language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English
    #[default]
    En,
    /// French
    Fr,
}

impl Language {
    /// The other language.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::En => Self::Fr,
            Self::Fr => Self::En,
        }
    }

    /// ISO 639-1 code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Fr => "fr",
        }
    }

    /// Flag shown on the language button.
    #[must_use]
    pub const fn flag(self) -> &'static str {
        match self {
            Self::En => "🇬🇧",
            Self::Fr => "🇫🇷",
        }
    }

    /// Name of the language in itself.
    #[must_use]
    pub const fn native_name(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Fr => "Français",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Ok(Self::En),
            "fr" | "french" | "français" | "francais" => Ok(Self::Fr),
            other => anyhow::bail!("Unsupported language '{other}'. Expected 'en' or 'fr'"),
        }
    }
}

/// A string with one translation per locale.
///
/// `en` and `fr` are required; other locales may be supplied and are looked up
/// by code. Missing translations fall back to English.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedString {
    /// English text
    pub en: String,
    /// French text
    pub fr: String,
    /// Additional locales keyed by code
    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
}

impl LocalizedString {
    /// Creates a string with English and French text.
    pub fn new(en: impl Into<String>, fr: impl Into<String>) -> Self {
        Self {
            en: en.into(),
            fr: fr.into(),
            extra: BTreeMap::new(),
        }
    }

    /// Text for a supported language.
    #[must_use]
    pub fn get(&self, language: Language) -> &str {
        let text = match language {
            Language::En => self.en.as_str(),
            Language::Fr => self.fr.as_str(),
        };
        if text.is_empty() {
            self.en.as_str()
        } else {
            text
        }
    }

    /// Text for an arbitrary locale code, falling back to English.
    #[must_use]
    pub fn get_code(&self, code: &str) -> &str {
        match code {
            "en" => self.en.as_str(),
            "fr" => self.get(Language::Fr),
            other => self.extra.get(other).map_or(self.en.as_str(), String::as_str),
        }
    }
}

/// Every localized message the editor can produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// An emoji was appended
    Added {
        /// The emoji
        emoji: String,
        /// Pattern length after the add
        count: usize,
    },
    /// Canvas or add button used with no selection
    SelectEmojiFirst,
    /// Pattern was cleared
    Cleared,
    /// Undo applied
    Undone {
        /// Pattern length after undo
        count: usize,
    },
    /// Redo applied
    Redone {
        /// Pattern length after redo
        count: usize,
    },
    /// Share placeholder
    ShareComingSoon,
    /// AI generation placeholder
    AiComingSoon,
    /// Language switched (rendered in the new language)
    LanguageChanged,
    /// Palette changed
    PaletteSelected {
        /// Localized palette name
        name: String,
    },
    /// Theme changed
    ThemeChanged(ThemeMode),
    /// Pattern mode changed
    ModeChanged(PatternMode),
    /// Canvas is read-only
    ReadOnly,
    /// Placeholder shown on an empty canvas
    EmptyCanvas,
    /// Canvas block title
    CanvasTitle,
    /// Palette block title
    PaletteTitle,
    /// Emoji counter label
    EmojiCount(usize),
    /// Status bar block title
    StatusTitle,
    /// Label before the selected emoji
    SelectedLabel,
    /// Undo and redo depths
    HistoryDepths {
        /// States that can be undone
        undo: usize,
        /// States that can be redone
        redo: usize,
    },
    /// Help label in the status bar
    HelpLabel,
}

impl Message {
    /// Renders the message in a language.
    #[must_use]
    pub fn localize(&self, language: Language) -> String {
        match (self, language) {
            (Self::Added { emoji, count }, Language::En) => {
                format!("Added {emoji} to pattern. Pattern now has {count} emojis.")
            }
            (Self::Added { emoji, count }, Language::Fr) => {
                format!("{emoji} ajouté au motif. Le motif contient maintenant {count} emojis.")
            }
            (Self::SelectEmojiFirst, Language::En) => {
                "Please select an emoji from the palette first.".to_string()
            }
            (Self::SelectEmojiFirst, Language::Fr) => {
                "Veuillez d'abord sélectionner un emoji dans la palette.".to_string()
            }
            (Self::Cleared, Language::En) => "Pattern cleared. Canvas is now empty.".to_string(),
            (Self::Cleared, Language::Fr) => {
                "Motif effacé. Le canevas est maintenant vide.".to_string()
            }
            (Self::Undone { count }, Language::En) => {
                format!("Undo successful. Pattern now has {count} emojis.")
            }
            (Self::Undone { count }, Language::Fr) => {
                format!("Annulation réussie. Le motif contient maintenant {count} emojis.")
            }
            (Self::Redone { count }, Language::En) => {
                format!("Redo successful. Pattern now has {count} emojis.")
            }
            (Self::Redone { count }, Language::Fr) => {
                format!("Rétablissement réussi. Le motif contient maintenant {count} emojis.")
            }
            (Self::ShareComingSoon, Language::En) => "Share feature coming soon!".to_string(),
            (Self::ShareComingSoon, Language::Fr) => "Le partage arrive bientôt !".to_string(),
            (Self::AiComingSoon, Language::En) => "AI pattern generation coming soon!".to_string(),
            (Self::AiComingSoon, Language::Fr) => {
                "La génération de motifs par IA arrive bientôt !".to_string()
            }
            (Self::LanguageChanged, Language::En) => "Language set to English.".to_string(),
            (Self::LanguageChanged, Language::Fr) => "Langue réglée sur le français.".to_string(),
            (Self::PaletteSelected { name }, Language::En) => format!("Palette: {name}"),
            (Self::PaletteSelected { name }, Language::Fr) => format!("Palette : {name}"),
            (Self::ThemeChanged(mode), _) => {
                let label = theme_label(*mode, language);
                match language {
                    Language::En => format!("Current theme: {label}"),
                    Language::Fr => format!("Thème actuel : {label}"),
                }
            }
            (Self::ModeChanged(mode), Language::En) => format!("Pattern mode: {mode}"),
            (Self::ModeChanged(mode), Language::Fr) => {
                let name = match mode {
                    PatternMode::Concentric => "concentrique",
                    PatternMode::Sequential => "séquentiel",
                };
                format!("Mode du motif : {name}")
            }
            (Self::ReadOnly, Language::En) => "Canvas is read-only.".to_string(),
            (Self::ReadOnly, Language::Fr) => "Le canevas est en lecture seule.".to_string(),
            (Self::EmptyCanvas, Language::En) => {
                "Select emojis from below to create your pattern".to_string()
            }
            (Self::EmptyCanvas, Language::Fr) => {
                "Sélectionnez des emojis ci-dessous pour créer votre motif".to_string()
            }
            (Self::CanvasTitle, Language::En) => " Pattern ".to_string(),
            (Self::CanvasTitle, Language::Fr) => " Motif ".to_string(),
            (Self::PaletteTitle, Language::En) => " Palette ".to_string(),
            (Self::PaletteTitle, Language::Fr) => " Palette ".to_string(),
            (Self::EmojiCount(n), Language::En) => format!("{n} emojis"),
            (Self::EmojiCount(n), Language::Fr) => format!("{n} emojis"),
            (Self::StatusTitle, Language::En) => " Status ".to_string(),
            (Self::StatusTitle, Language::Fr) => " État ".to_string(),
            (Self::SelectedLabel, Language::En) => "Selected: ".to_string(),
            (Self::SelectedLabel, Language::Fr) => "Sélection : ".to_string(),
            (Self::HistoryDepths { undo, redo }, Language::En) => {
                format!("  Undo: {undo}  Redo: {redo}")
            }
            (Self::HistoryDepths { undo, redo }, Language::Fr) => {
                format!("  Annuler : {undo}  Rétablir : {redo}")
            }
            (Self::HelpLabel, Language::En) => "Help".to_string(),
            (Self::HelpLabel, Language::Fr) => "Aide".to_string(),
        }
    }
}

/// Human-readable theme mode label.
#[must_use]
pub const fn theme_label(mode: ThemeMode, language: Language) -> &'static str {
    match (mode, language) {
        (ThemeMode::Light, Language::En) => "Light mode",
        (ThemeMode::Dark, Language::En) => "Dark mode",
        (ThemeMode::System, Language::En) => "System mode",
        (ThemeMode::Light, Language::Fr) => "Mode clair",
        (ThemeMode::Dark, Language::Fr) => "Mode sombre",
        (ThemeMode::System, Language::Fr) => "Mode système",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_toggle_and_parse() {
        assert_eq!(Language::En.toggled(), Language::Fr);
        assert_eq!(Language::Fr.toggled(), Language::En);
        assert_eq!("FR".parse::<Language>().unwrap(), Language::Fr);
        assert_eq!("english".parse::<Language>().unwrap(), Language::En);
        assert!("de".parse::<Language>().is_err());
    }

    #[test]
    fn test_localized_string_fallback() {
        let mut s = LocalizedString::new("Hearts", "");
        assert_eq!(s.get(Language::Fr), "Hearts");

        s.extra.insert("es".to_string(), "Corazones".to_string());
        assert_eq!(s.get_code("es"), "Corazones");
        assert_eq!(s.get_code("de"), "Hearts");
    }

    #[test]
    fn test_localized_string_deserializes_extra_locales() {
        let json = r#"{"en":"Nature","fr":"Nature","es":"Naturaleza"}"#;
        let s: LocalizedString = serde_json::from_str(json).unwrap();
        assert_eq!(s.get_code("es"), "Naturaleza");
    }

    #[test]
    fn test_added_message() {
        let msg = Message::Added {
            emoji: "😀".to_string(),
            count: 3,
        };
        assert_eq!(
            msg.localize(Language::En),
            "Added 😀 to pattern. Pattern now has 3 emojis."
        );
        assert!(msg.localize(Language::Fr).contains("ajouté"));
    }

    #[test]
    fn test_theme_labels() {
        assert_eq!(
            Message::ThemeChanged(ThemeMode::Dark).localize(Language::En),
            "Current theme: Dark mode"
        );
        assert_eq!(theme_label(ThemeMode::System, Language::Fr), "Mode système");
    }
}
