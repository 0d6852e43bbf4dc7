//! Editor orchestration.
//!
//! [`Editor`] owns the pattern history, the current selection, the active
//! palette and the session context. [`Editor::dispatch`] runs one intent to
//! completion and reports the result through an [`Announcer`].

use anyhow::Result;

use super::announcer::{Announcer, Politeness};
use super::context::SessionContext;
use super::intent::Intent;
use crate::config::Config;
use crate::i18n::{Language, Message};
use crate::models::{
    EmojiPalette, PaletteCatalog, PatternAccessibilityInfo, PatternGrid, PatternMode,
    PatternState,
};
use crate::services::{
    append_emoji, create_pattern_state, describe_pattern, generate_with_fill, FillPolicy,
    PatternHistory,
};

/// What a dispatched intent did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A new pattern state became current
    PatternChanged,
    /// Palette, theme or language changed
    SettingsChanged,
    /// Nothing changed
    Unchanged,
}

impl Outcome {
    /// True when the pattern on screen is different.
    #[must_use]
    pub const fn pattern_changed(self) -> bool {
        matches!(self, Self::PatternChanged)
    }
}

/// The pattern editor.
#[derive(Debug, Clone)]
pub struct Editor {
    history: PatternHistory,
    selected_emoji: Option<String>,
    catalog: PaletteCatalog,
    active_palette: String,
    context: SessionContext,
    read_only: bool,
}

impl Editor {
    /// Creates an editor with an empty concentric pattern.
    ///
    /// Falls back to the catalog's default palette when `palette_id` is unknown.
    #[must_use]
    pub fn new(catalog: PaletteCatalog, context: SessionContext, palette_id: &str) -> Self {
        let active_palette = catalog
            .get(palette_id)
            .or_else(|| catalog.default_palette())
            .map(|p| p.id.clone())
            .unwrap_or_default();

        Self {
            history: PatternHistory::default(),
            selected_emoji: None,
            catalog,
            active_palette,
            context,
            read_only: false,
        }
    }

    /// Creates an editor from the built-in palettes and the user's config.
    pub fn from_config(config: &Config) -> Result<Self> {
        let catalog = PaletteCatalog::load()?;
        let editor = Self::new(
            catalog,
            SessionContext::from_config(config),
            &config.ui.default_palette,
        )
        .with_read_only(config.canvas.read_only);
        Ok(editor)
    }

    /// Sets whether canvas taps are ignored.
    #[must_use]
    pub const fn with_read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    /// Current pattern.
    #[must_use]
    pub const fn current(&self) -> &PatternState {
        self.history.current()
    }

    /// Undo/redo history.
    #[must_use]
    pub const fn history(&self) -> &PatternHistory {
        &self.history
    }

    /// Grid for the current pattern.
    #[must_use]
    pub fn grid(&self, fill: FillPolicy) -> PatternGrid {
        generate_with_fill(self.current(), fill)
    }

    /// Screen-reader description of the current pattern.
    #[must_use]
    pub fn describe(&self) -> PatternAccessibilityInfo {
        describe_pattern(self.current(), self.language())
    }

    /// Emoji picked most recently, if any.
    #[must_use]
    pub fn selected_emoji(&self) -> Option<&str> {
        self.selected_emoji.as_deref()
    }

    /// All palettes.
    #[must_use]
    pub const fn catalog(&self) -> &PaletteCatalog {
        &self.catalog
    }

    /// Palette shown in the carousel.
    #[must_use]
    pub fn active_palette(&self) -> Option<&EmojiPalette> {
        self.catalog.get(&self.active_palette)
    }

    /// Theme and language.
    #[must_use]
    pub const fn context(&self) -> &SessionContext {
        &self.context
    }

    /// Interface language.
    #[must_use]
    pub const fn language(&self) -> Language {
        self.context.language()
    }

    /// Whether canvas taps are ignored.
    #[must_use]
    pub const fn is_read_only(&self) -> bool {
        self.read_only
    }

    /// Whether clear would do anything.
    #[must_use]
    pub fn can_clear(&self) -> bool {
        !self.current().is_empty()
    }

    /// Processes one intent to completion.
    pub fn dispatch(&mut self, intent: Intent, announcer: &mut dyn Announcer) -> Outcome {
        tracing::debug!(?intent, "dispatch");

        match intent {
            Intent::SelectEmoji(emoji) => self.add_emoji(emoji, announcer),
            Intent::CanvasTap { .. } | Intent::AddSelected => {
                if self.read_only {
                    self.say(announcer, Politeness::Assertive, &Message::ReadOnly);
                    return Outcome::Unchanged;
                }
                match self.selected_emoji.clone() {
                    Some(emoji) => self.add_emoji(emoji, announcer),
                    None => {
                        self.say(announcer, Politeness::Assertive, &Message::SelectEmojiFirst);
                        Outcome::Unchanged
                    }
                }
            }
            Intent::ClearPattern => {
                if !self.can_clear() {
                    return Outcome::Unchanged;
                }
                self.history.record_and_apply(create_pattern_state(
                    Vec::<String>::new(),
                    PatternMode::Concentric,
                ));
                self.selected_emoji = None;
                self.say(announcer, Politeness::Polite, &Message::Cleared);
                Outcome::PatternChanged
            }
            Intent::Undo => {
                if !self.history.undo() {
                    return Outcome::Unchanged;
                }
                let count = self.current().len();
                self.say(announcer, Politeness::Polite, &Message::Undone { count });
                Outcome::PatternChanged
            }
            Intent::Redo => {
                if !self.history.redo() {
                    return Outcome::Unchanged;
                }
                let count = self.current().len();
                self.say(announcer, Politeness::Polite, &Message::Redone { count });
                Outcome::PatternChanged
            }
            Intent::SelectPalette(id) => self.switch_palette(Some(id), announcer),
            Intent::NextPalette => {
                let next = self.catalog.next_after(&self.active_palette).map(|p| p.id.clone());
                self.switch_palette(next, announcer)
            }
            Intent::PreviousPalette => {
                let previous = self
                    .catalog
                    .previous_before(&self.active_palette)
                    .map(|p| p.id.clone());
                self.switch_palette(previous, announcer)
            }
            Intent::ToggleLanguage => {
                self.context.toggle_language();
                self.say(announcer, Politeness::Polite, &Message::LanguageChanged);
                Outcome::SettingsChanged
            }
            Intent::CycleTheme => {
                let mode = self.context.cycle_theme();
                self.say(announcer, Politeness::Polite, &Message::ThemeChanged(mode));
                Outcome::SettingsChanged
            }
            Intent::TogglePatternMode => {
                let current = self.current();
                let mode = current.pattern_mode().toggled();
                let next = create_pattern_state(current.sequence().to_vec(), mode);
                self.history.record_and_apply(next);
                self.say(announcer, Politeness::Polite, &Message::ModeChanged(mode));
                Outcome::PatternChanged
            }
            Intent::Share => {
                self.say(announcer, Politeness::Polite, &Message::ShareComingSoon);
                Outcome::Unchanged
            }
            Intent::AiGenerate => {
                self.say(announcer, Politeness::Polite, &Message::AiComingSoon);
                Outcome::Unchanged
            }
        }
    }

    fn add_emoji(&mut self, emoji: String, announcer: &mut dyn Announcer) -> Outcome {
        let next = append_emoji(self.current(), emoji.clone());
        let count = next.len();
        self.history.record_and_apply(next);
        self.say(announcer, Politeness::Polite, &Message::Added {
            emoji: emoji.clone(),
            count,
        });
        self.selected_emoji = Some(emoji);
        Outcome::PatternChanged
    }

    fn switch_palette(&mut self, id: Option<String>, announcer: &mut dyn Announcer) -> Outcome {
        let Some(palette) = id.as_deref().and_then(|id| self.catalog.get(id)) else {
            tracing::warn!(?id, "ignoring unknown palette");
            return Outcome::Unchanged;
        };
        if palette.id == self.active_palette {
            return Outcome::Unchanged;
        }

        let name = palette.display_name(self.language()).to_string();
        self.active_palette = palette.id.clone();
        self.say(announcer, Politeness::Polite, &Message::PaletteSelected { name });
        Outcome::SettingsChanged
    }

    fn say(&self, announcer: &mut dyn Announcer, politeness: Politeness, message: &Message) {
        announcer.announce(politeness, message.localize(self.language()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::announcer::AnnouncementLog;
    use crate::config::ThemeMode;

    fn editor() -> Editor {
        let catalog = PaletteCatalog::load().unwrap();
        Editor::new(catalog, SessionContext::default(), "hearts")
    }

    #[test]
    fn test_select_emoji_appends_and_announces() {
        let mut editor = editor();
        let mut log = AnnouncementLog::default();

        let outcome = editor.dispatch(Intent::SelectEmoji("😀".into()), &mut log);

        assert_eq!(outcome, Outcome::PatternChanged);
        assert_eq!(editor.current().sequence(), ["😀"]);
        assert_eq!(editor.selected_emoji(), Some("😀"));
        assert_eq!(
            log.polite(),
            Some("Added 😀 to pattern. Pattern now has 1 emojis.")
        );
    }

    #[test]
    fn test_canvas_tap_without_selection_is_noop() {
        let mut editor = editor();
        let mut log = AnnouncementLog::default();

        let outcome = editor.dispatch(Intent::CanvasTap { row: 0, col: 0 }, &mut log);

        assert_eq!(outcome, Outcome::Unchanged);
        assert!(editor.current().is_empty());
        assert!(!editor.history().can_undo());
        assert_eq!(
            log.assertive(),
            Some("Please select an emoji from the palette first.")
        );
    }

    #[test]
    fn test_canvas_tap_adds_selected_emoji() {
        let mut editor = editor();
        let mut log = AnnouncementLog::default();
        editor.dispatch(Intent::SelectEmoji("🌟".into()), &mut log);

        editor.dispatch(Intent::CanvasTap { row: 2, col: 1 }, &mut log);
        assert_eq!(editor.current().sequence(), ["🌟", "🌟"]);
    }

    #[test]
    fn test_read_only_blocks_canvas_tap() {
        let mut editor = editor().with_read_only(true);
        let mut log = AnnouncementLog::default();
        editor.dispatch(Intent::SelectEmoji("🌟".into()), &mut log);

        let outcome = editor.dispatch(Intent::AddSelected, &mut log);
        assert_eq!(outcome, Outcome::Unchanged);
        assert_eq!(editor.current().len(), 1);
        assert_eq!(log.assertive(), Some("Canvas is read-only."));
    }

    #[test]
    fn test_clear_resets_selection_and_is_undoable() {
        let mut editor = editor();
        let mut log = AnnouncementLog::default();
        editor.dispatch(Intent::SelectEmoji("😀".into()), &mut log);

        assert_eq!(editor.dispatch(Intent::ClearPattern, &mut log), Outcome::PatternChanged);
        assert!(editor.current().is_empty());
        assert_eq!(editor.selected_emoji(), None);

        editor.dispatch(Intent::Undo, &mut log);
        assert_eq!(editor.current().sequence(), ["😀"]);
        assert_eq!(
            log.polite(),
            Some("Undo successful. Pattern now has 1 emojis.")
        );
    }

    #[test]
    fn test_clear_on_empty_pattern_is_noop() {
        let mut editor = editor();
        let mut log = AnnouncementLog::default();
        assert_eq!(editor.dispatch(Intent::ClearPattern, &mut log), Outcome::Unchanged);
        assert!(!editor.history().can_undo());
        assert!(log.is_empty());
    }

    #[test]
    fn test_undo_redo_on_empty_history_are_silent() {
        let mut editor = editor();
        let mut log = AnnouncementLog::default();
        assert_eq!(editor.dispatch(Intent::Undo, &mut log), Outcome::Unchanged);
        assert_eq!(editor.dispatch(Intent::Redo, &mut log), Outcome::Unchanged);
        assert!(log.is_empty());
    }

    #[test]
    fn test_placeholders_only_announce() {
        let mut editor = editor();
        let mut log = AnnouncementLog::default();
        editor.dispatch(Intent::SelectEmoji("😀".into()), &mut log);
        let before = editor.current().clone();

        assert_eq!(editor.dispatch(Intent::Share, &mut log), Outcome::Unchanged);
        assert_eq!(log.polite(), Some("Share feature coming soon!"));
        assert_eq!(editor.dispatch(Intent::AiGenerate, &mut log), Outcome::Unchanged);
        assert_eq!(log.polite(), Some("AI pattern generation coming soon!"));

        assert_eq!(editor.current(), &before);
        assert_eq!(editor.history().undo_depth(), 1);
    }

    #[test]
    fn test_language_toggle_localizes_announcements() {
        let mut editor = editor();
        let mut log = AnnouncementLog::default();

        editor.dispatch(Intent::ToggleLanguage, &mut log);
        assert_eq!(editor.language(), Language::Fr);

        editor.dispatch(Intent::CanvasTap { row: 0, col: 0 }, &mut log);
        assert_eq!(
            log.assertive(),
            Some("Veuillez d'abord sélectionner un emoji dans la palette.")
        );
    }

    #[test]
    fn test_theme_cycle() {
        let mut editor = editor();
        let mut log = AnnouncementLog::default();
        editor.dispatch(Intent::CycleTheme, &mut log);
        assert_eq!(editor.context().theme_mode(), ThemeMode::Light);
        assert_eq!(log.polite(), Some("Current theme: Light mode"));
    }

    #[test]
    fn test_palette_switching() {
        let mut editor = editor();
        let mut log = AnnouncementLog::default();

        assert_eq!(editor.dispatch(Intent::NextPalette, &mut log), Outcome::SettingsChanged);
        assert_eq!(editor.active_palette().map(|p| p.id.as_str()), Some("nature"));

        editor.dispatch(Intent::PreviousPalette, &mut log);
        editor.dispatch(Intent::PreviousPalette, &mut log);
        assert_eq!(editor.active_palette().map(|p| p.id.as_str()), Some("symbols"));

        assert_eq!(
            editor.dispatch(Intent::SelectPalette("missing".into()), &mut log),
            Outcome::Unchanged
        );
        assert_eq!(editor.active_palette().map(|p| p.id.as_str()), Some("symbols"));
    }

    #[test]
    fn test_unknown_start_palette_falls_back_to_default() {
        let catalog = PaletteCatalog::load().unwrap();
        let editor = Editor::new(catalog, SessionContext::default(), "missing");
        assert_eq!(editor.active_palette().map(|p| p.id.as_str()), Some("hearts"));
    }

    #[test]
    fn test_toggle_pattern_mode_keeps_sequence() {
        let mut editor = editor();
        let mut log = AnnouncementLog::default();
        for emoji in ["a", "b", "c", "d", "e"] {
            editor.dispatch(Intent::SelectEmoji(emoji.into()), &mut log);
        }

        editor.dispatch(Intent::TogglePatternMode, &mut log);
        assert_eq!(editor.current().pattern_mode(), PatternMode::Sequential);
        assert_eq!(editor.current().pattern_size(), 3);
        assert_eq!(editor.current().len(), 5);

        editor.dispatch(Intent::Undo, &mut log);
        assert_eq!(editor.current().pattern_mode(), PatternMode::Concentric);
    }
}
