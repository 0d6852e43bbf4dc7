//! Input validation for emoji sequences.
//!
//! The pattern generator accepts any string. Callers that take user input
//! (the CLI) check it here first and decide what to do with the failures.

use serde::Serialize;
use std::fmt;

/// Default upper bound on the number of emojis in a sequence.
pub const DEFAULT_MAX_SEQUENCE_LENGTH: usize = 64;

/// Default upper bound on the chars in a single glyph. Long ZWJ sequences
/// such as family emojis run to around ten.
pub const DEFAULT_MAX_GLYPH_CHARS: usize = 16;

/// Outcome of a single rule check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleOutcome {
    /// Value passed the rule
    Valid,
    /// Value failed, with a message
    Invalid(String),
}

impl RuleOutcome {
    /// True for `Valid`.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }
}

/// A closed set of checks over an emoji sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationRule {
    /// Every glyph is non-empty after trimming
    NonEmptyGlyph,
    /// Every glyph has at most this many chars
    MaxGlyphChars(usize),
    /// The sequence has at most this many glyphs
    MaxSequenceLength(usize),
    /// No glyph contains control characters
    NoControlCharacters,
}

impl ValidationRule {
    /// Default rule set used by the CLI.
    #[must_use]
    pub const fn defaults() -> [Self; 4] {
        [
            Self::NonEmptyGlyph,
            Self::NoControlCharacters,
            Self::MaxGlyphChars(DEFAULT_MAX_GLYPH_CHARS),
            Self::MaxSequenceLength(DEFAULT_MAX_SEQUENCE_LENGTH),
        ]
    }

    /// Checks a whole sequence. Per-glyph rules report the first offending index.
    pub fn check<S: AsRef<str>>(&self, sequence: &[S]) -> RuleOutcome {
        match *self {
            Self::MaxSequenceLength(max) => {
                if sequence.len() > max {
                    RuleOutcome::Invalid(format!(
                        "Sequence has {} emojis, maximum is {max}",
                        sequence.len()
                    ))
                } else {
                    RuleOutcome::Valid
                }
            }
            _ => sequence
                .iter()
                .enumerate()
                .map(|(index, glyph)| self.check_glyph(index, glyph.as_ref()))
                .find(|outcome| !outcome.is_valid())
                .unwrap_or(RuleOutcome::Valid),
        }
    }

    fn check_glyph(&self, index: usize, glyph: &str) -> RuleOutcome {
        match *self {
            Self::NonEmptyGlyph if glyph.trim().is_empty() => {
                RuleOutcome::Invalid(format!("Emoji at position {} is empty", index + 1))
            }
            Self::MaxGlyphChars(max) if glyph.chars().count() > max => RuleOutcome::Invalid(
                format!("Emoji at position {} is longer than {max} characters", index + 1),
            ),
            Self::NoControlCharacters if glyph.chars().any(char::is_control) => {
                RuleOutcome::Invalid(format!(
                    "Emoji at position {} contains control characters",
                    index + 1
                ))
            }
            _ => RuleOutcome::Valid,
        }
    }

    const fn suggestion(&self) -> &'static str {
        match self {
            Self::NonEmptyGlyph => "Remove empty arguments or quote each emoji separately",
            Self::MaxGlyphChars(_) => "Pass one emoji per argument, separated by spaces",
            Self::MaxSequenceLength(_) => "Split the pattern into smaller patterns",
            Self::NoControlCharacters => "Strip tabs and newlines from the input",
        }
    }
}

impl fmt::Display for ValidationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonEmptyGlyph => write!(f, "non-empty glyph"),
            Self::MaxGlyphChars(max) => write!(f, "at most {max} chars per glyph"),
            Self::MaxSequenceLength(max) => write!(f, "at most {max} emojis"),
            Self::NoControlCharacters => write!(f, "no control characters"),
        }
    }
}

/// Combined result of running several rules.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    /// True when no rule failed
    pub is_valid: bool,
    /// One message per failed rule
    pub errors: Vec<String>,
    /// Hints for fixing the failures
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<String>,
}

/// Runs every rule against the sequence and collects the failures.
pub fn validate_sequence<S: AsRef<str>>(sequence: &[S], rules: &[ValidationRule]) -> ValidationResult {
    let mut result = ValidationResult {
        is_valid: true,
        ..ValidationResult::default()
    };

    for rule in rules {
        if let RuleOutcome::Invalid(message) = rule.check(sequence) {
            result.is_valid = false;
            result.errors.push(message);
            result.suggestions.push(rule.suggestion().to_string());
        }
    }

    result
}
