//! Emoji palette reference data.
//!
//! Palettes are embedded as JSON and loaded once at startup. They are never
//! created or destroyed at runtime.

use serde::{Deserialize, Serialize};

use crate::i18n::{Language, LocalizedString};

/// Palette grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteCategory {
    /// Full color emojis
    Color,
    /// Black and white glyphs
    Monochrome,
    /// User supplied
    Custom,
}

/// A named, ordered collection of emoji glyphs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmojiPalette {
    /// Stable identifier (e.g., "hearts")
    pub id: String,
    /// Localized display name
    pub name: LocalizedString,
    /// Palette grouping
    pub category: PaletteCategory,
    /// Glyphs in display order
    pub emojis: Vec<String>,
    /// Position of the palette in the carousel
    pub order_index: u32,
    /// Whether the palette was supplied by the user
    #[serde(default)]
    pub is_custom: bool,
    /// Optional localized description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<LocalizedString>,
    /// Searchable keywords
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl EmojiPalette {
    /// Localized name.
    #[must_use]
    pub fn display_name(&self, language: Language) -> &str {
        self.name.get(language)
    }

    /// Emoji at an index.
    #[must_use]
    pub fn emoji_at(&self, index: usize) -> Option<&str> {
        self.emojis.get(index).map(String::as_str)
    }

    /// Number of emojis.
    #[must_use]
    pub fn emoji_count(&self) -> usize {
        self.emojis.len()
    }

    /// Index of a glyph in this palette.
    #[must_use]
    pub fn position_of(&self, emoji: &str) -> Option<usize> {
        self.emojis.iter().position(|e| e == emoji)
    }
}

#[derive(Debug, Deserialize)]
struct PaletteFile {
    palettes: Vec<EmojiPalette>,
}

/// All palettes, sorted by `order_index`.
#[derive(Debug, Clone, Default)]
pub struct PaletteCatalog {
    palettes: Vec<EmojiPalette>,
}

impl PaletteCatalog {
    /// Load the palettes from embedded JSON data.
    ///
    /// # Errors
    /// Returns an error if the JSON data cannot be parsed.
    pub fn load() -> anyhow::Result<Self> {
        let json_data = include_str!("../data/emoji_palettes.json");
        let file: PaletteFile = serde_json::from_str(json_data)?;
        Ok(Self::from_palettes(file.palettes))
    }

    /// Builds a catalog from palettes in any order.
    #[must_use]
    pub fn from_palettes(mut palettes: Vec<EmojiPalette>) -> Self {
        palettes.sort_by_key(|p| p.order_index);
        Self { palettes }
    }

    /// Palettes in carousel order.
    #[must_use]
    pub fn palettes(&self) -> &[EmojiPalette] {
        &self.palettes
    }

    /// Number of palettes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.palettes.len()
    }

    /// True when there are no palettes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.palettes.is_empty()
    }

    /// Palette by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&EmojiPalette> {
        self.palettes.iter().find(|p| p.id == id)
    }

    /// Carousel index of a palette.
    #[must_use]
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.palettes.iter().position(|p| p.id == id)
    }

    /// First built-in palette, or the first palette of any kind.
    #[must_use]
    pub fn default_palette(&self) -> Option<&EmojiPalette> {
        self.palettes
            .iter()
            .find(|p| !p.is_custom)
            .or_else(|| self.palettes.first())
    }

    /// Palette after `id`, wrapping around.
    #[must_use]
    pub fn next_after(&self, id: &str) -> Option<&EmojiPalette> {
        let index = self.index_of(id)?;
        self.palettes.get((index + 1) % self.palettes.len())
    }

    /// Palette before `id`, wrapping around.
    #[must_use]
    pub fn previous_before(&self, id: &str) -> Option<&EmojiPalette> {
        let index = self.index_of(id)?;
        let len = self.palettes.len();
        self.palettes.get((index + len - 1) % len)
    }
}

impl Default for EmojiPalette {
    fn default() -> Self {
        Self {
            id: "custom".to_string(),
            name: LocalizedString::new("Custom", "Personnalisé"),
            category: PaletteCategory::Custom,
            emojis: Vec::new(),
            order_index: u32::MAX,
            is_custom: true,
            description: None,
            tags: Vec::new(),
        }
    }
}
