//! User intents consumed by the editor.

/// Everything a user (or a background collaborator) can ask the editor to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Palette tap: selects the emoji and appends it to the pattern
    SelectEmoji(String),
    /// Click on a canvas cell
    CanvasTap {
        /// Grid row
        row: usize,
        /// Grid column
        col: usize,
    },
    /// Append the selected emoji again (keyboard equivalent of a canvas tap)
    AddSelected,
    /// Replace the pattern with an empty one
    ClearPattern,
    /// Step back in history
    Undo,
    /// Step forward in history
    Redo,
    /// Switch palette by id
    SelectPalette(String),
    /// Next palette in the carousel
    NextPalette,
    /// Previous palette in the carousel
    PreviousPalette,
    /// Switch between English and French
    ToggleLanguage,
    /// Light, dark, system
    CycleTheme,
    /// Switch between concentric and sequential layout
    TogglePatternMode,
    /// Share placeholder
    Share,
    /// AI generation placeholder
    AiGenerate,
}

impl Intent {
    /// True for intents that go through the undo history.
    #[must_use]
    pub const fn is_edit(&self) -> bool {
        matches!(
            self,
            Self::SelectEmoji(_)
                | Self::CanvasTap { .. }
                | Self::AddSelected
                | Self::ClearPattern
                | Self::TogglePatternMode
        )
    }
}
