//! Pattern state, pattern mode and pattern metadata.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::i18n::Language;

/// Layout mode for a pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatternMode {
    /// One square ring per emoji, newest at the centre
    #[default]
    Concentric,
    /// Row-major placement in a square
    Sequential,
}

impl PatternMode {
    /// The other mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Concentric => Self::Sequential,
            Self::Sequential => Self::Concentric,
        }
    }

    /// Lowercase identifier used on the command line and in JSON.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Concentric => "concentric",
            Self::Sequential => "sequential",
        }
    }
}

impl fmt::Display for PatternMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PatternMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "concentric" => Ok(Self::Concentric),
            "sequential" => Ok(Self::Sequential),
            other => anyhow::bail!(
                "Unknown pattern mode '{other}'. Expected 'concentric' or 'sequential'"
            ),
        }
    }
}

/// Rough complexity bucket for a pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    /// Up to 3 emojis
    Simple,
    /// 4 to 7 emojis
    Moderate,
    /// 8 or more emojis
    Complex,
}

impl Complexity {
    /// Buckets a sequence length.
    #[must_use]
    pub const fn for_length(len: usize) -> Self {
        match len {
            0..=3 => Self::Simple,
            4..=7 => Self::Moderate,
            _ => Self::Complex,
        }
    }
}

/// Canvas dimensions in pixels (or terminal cells for the TUI).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanvasSize {
    /// Width
    pub width: u32,
    /// Height
    pub height: u32,
}

/// Descriptive metadata attached to a pattern by collaborators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternMetadata {
    /// Whether the sequence came from a generative backend
    pub ai_generated: bool,
    /// Prompt that produced the pattern
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_prompt: Option<String>,
    /// Explanation supplied with a generated pattern
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rationale: Option<String>,
    /// Complexity bucket
    pub complexity: Complexity,
    /// Language the pattern was created in
    pub language: Language,
    /// Experience level of the author
    pub user_level: u32,
    /// Render time in milliseconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub render_time: Option<u64>,
    /// Canvas size used for rendering
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub canvas_size: Option<CanvasSize>,
}

impl PatternMetadata {
    /// Metadata for a hand-made pattern of the given length.
    #[must_use]
    pub const fn manual(len: usize, language: Language) -> Self {
        Self {
            ai_generated: false,
            source_prompt: None,
            rationale: None,
            complexity: Complexity::for_length(len),
            language,
            user_level: 1,
            render_time: None,
            canvas_size: None,
        }
    }
}

/// The full editable pattern.
///
/// Produced by [`crate::services::pattern_generator::create_pattern_state`] so
/// that `pattern_size` and `insertion_index` always agree with `sequence`.
/// Values are never mutated after creation; edits produce a new state.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternState {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<Uuid>,
    sequence: Vec<String>,
    insertion_index: usize,
    pattern_size: usize,
    pattern_mode: PatternMode,
    active_insertion_mode: PatternMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    updated_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    is_favorite: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    metadata: Option<PatternMetadata>,
}

impl PatternState {
    pub(crate) fn from_parts(
        sequence: Vec<String>,
        pattern_size: usize,
        insertion_index: usize,
        mode: PatternMode,
    ) -> Self {
        Self {
            id: None,
            sequence,
            insertion_index,
            pattern_size,
            pattern_mode: mode,
            active_insertion_mode: mode,
            name: None,
            description: None,
            created_at: None,
            updated_at: None,
            is_favorite: None,
            tags: None,
            metadata: None,
        }
    }

    /// Ordered emoji sequence, first inserted first.
    #[must_use]
    pub fn sequence(&self) -> &[String] {
        &self.sequence
    }

    /// Number of emojis in the pattern.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    /// True when the pattern has no emojis.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// Position where the next emoji is inserted.
    #[must_use]
    pub const fn insertion_index(&self) -> usize {
        self.insertion_index
    }

    /// Derived grid extent.
    #[must_use]
    pub const fn pattern_size(&self) -> usize {
        self.pattern_size
    }

    /// Layout mode.
    #[must_use]
    pub const fn pattern_mode(&self) -> PatternMode {
        self.pattern_mode
    }

    /// Insertion mode in effect.
    #[must_use]
    pub const fn active_insertion_mode(&self) -> PatternMode {
        self.active_insertion_mode
    }

    /// Identity assigned by a persistence collaborator.
    #[must_use]
    pub const fn id(&self) -> Option<Uuid> {
        self.id
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Free-form description.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    /// Last update timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    /// Favorite flag.
    #[must_use]
    pub const fn is_favorite(&self) -> Option<bool> {
        self.is_favorite
    }

    /// Tags.
    #[must_use]
    pub fn tags(&self) -> Option<&[String]> {
        self.tags.as_deref()
    }

    /// Attached metadata.
    #[must_use]
    pub const fn metadata(&self) -> Option<&PatternMetadata> {
        self.metadata.as_ref()
    }

    /// Returns a copy carrying a fresh identity, name and timestamps.
    pub fn with_identity(mut self, name: impl Into<String>) -> Self {
        let now = Utc::now();
        self.id = Some(Uuid::new_v4());
        self.name = Some(name.into());
        self.created_at = Some(now);
        self.updated_at = Some(now);
        self.is_favorite = Some(false);
        self
    }

    /// Returns a copy with a description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Returns a copy with normalized tags (trimmed, lowercase, empty dropped).
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.tags = Some(
            tags.into_iter()
                .map(|t| t.as_ref().trim().to_lowercase())
                .filter(|t| !t.is_empty())
                .collect(),
        );
        self
    }

    /// Returns a copy with metadata attached.
    pub fn with_metadata(mut self, metadata: PatternMetadata) -> Self {
        self.metadata = Some(metadata);
        self
    }
}
