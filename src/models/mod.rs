//! Data models for patterns, grids and palettes.
//!
//! This module contains the core data structures used throughout the application.
//! Models are independent of UI and orchestration logic.

pub mod grid;
pub mod integration;
pub mod palette;
pub mod pattern;

// Re-export all model types
pub use crate::i18n::LocalizedString;
pub use grid::{GridCell, PatternGrid};
pub use integration::{
    GeneratedPattern, PatternAccessibilityInfo, PatternResponse, TokenUsage, VoiceCommand,
};
pub use palette::{EmojiPalette, PaletteCatalog, PaletteCategory};
pub use pattern::{CanvasSize, Complexity, PatternMetadata, PatternMode, PatternState};
