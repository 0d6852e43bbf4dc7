//! Payload types for planned external collaborators.
//!
//! These describe the JSON exchanged with a generation backend and a voice
//! command service. Nothing in the crate performs network calls yet; the types
//! exist so those integrations can post results back as intents.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::i18n::Language;

/// One suggested pattern from the generation backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedPattern {
    /// Emoji sequence in insertion order, last element is the centre
    pub sequence: Vec<String>,
    /// Why the backend picked these emojis
    pub rationale: String,
    /// Confidence between 0 and 1
    pub confidence: f64,
    /// Suggested name
    pub name: String,
    /// Suggested tags
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Token accounting reported by the generation backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenUsage {
    /// Prompt tokens
    pub prompt_tokens: u32,
    /// Completion tokens
    pub completion_tokens: u32,
    /// Sum of both
    pub total_tokens: u32,
}

/// Response body of the generation backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternResponse {
    /// Suggested patterns, best first
    pub patterns: Vec<GeneratedPattern>,
    /// Token accounting
    pub usage: TokenUsage,
}

impl PatternResponse {
    /// Highest-confidence suggestion.
    #[must_use]
    pub fn best(&self) -> Option<&GeneratedPattern> {
        self.patterns
            .iter()
            .max_by(|a, b| a.confidence.total_cmp(&b.confidence))
    }
}

/// A parsed voice command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoiceCommand {
    /// Recognized intent name (e.g., "add_emoji")
    pub intent: String,
    /// Intent parameters as arbitrary JSON values
    #[serde(default)]
    pub parameters: BTreeMap<String, serde_json::Value>,
    /// Recognizer confidence between 0 and 1
    pub confidence: f64,
    /// Spoken language
    pub language: Language,
}

/// Screen-reader descriptions of a pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternAccessibilityInfo {
    /// Short alternative text
    pub alt_text: String,
    /// One-sentence description
    pub description: String,
    /// The sequence spelled out in insertion order
    pub sequence_description: String,
    /// Ring-by-ring layout from the centre outwards
    pub spatial_description: String,
}
