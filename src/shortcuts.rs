//! Centralized shortcut and action system.
//!
//! This module provides a unified system for keyboard shortcuts and actions,
//! connecting help text definitions with actual event handling logic.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

use crate::app::Intent;

/// Shortcut contexts.
pub mod contexts {
    /// Bindings active everywhere except the help overlay
    pub const GLOBAL: &str = "global";
    /// Canvas has focus
    pub const CANVAS: &str = "canvas";
    /// Palette strip has focus
    pub const PALETTE: &str = "palette";
    /// Help overlay is open
    pub const HELP: &str = "help";
}

/// All possible actions in the application.
///
/// This enum represents every action a user can take. It serves as the
/// bridge between keyboard shortcuts and application behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // === NAVIGATION ===
    /// Cursor up (canvas) or scroll up (help)
    MoveUp,
    /// Cursor down (canvas) or scroll down (help)
    MoveDown,
    /// Cursor left
    MoveLeft,
    /// Cursor right
    MoveRight,
    /// First cell or emoji
    JumpToFirst,
    /// Last cell or emoji
    JumpToLast,
    /// Move focus between canvas and palette
    SwitchFocus,

    // === EDITING ===
    /// Pick the emoji under the palette cursor, or tap the canvas cell
    Activate,
    /// Pick the n-th emoji of the active palette (0-based)
    PickEmoji(usize),
    /// Empty the pattern
    ClearPattern,
    /// Undo
    Undo,
    /// Redo
    Redo,
    /// Concentric or sequential layout
    TogglePatternMode,

    // === PALETTES ===
    /// Next palette
    NextPalette,
    /// Previous palette
    PreviousPalette,

    // === PREFERENCES ===
    /// English or French
    ToggleLanguage,
    /// Light, dark, system
    CycleTheme,

    // === PLACEHOLDERS ===
    /// Share the pattern
    Share,
    /// Generate a pattern with AI
    AiGenerate,

    // === HELP ===
    /// Show or hide the help overlay
    ToggleHelp,

    // === GENERAL ===
    /// Leave the application
    Quit,
    /// Close overlay
    Cancel,
}

impl Action {
    /// Get the action ID string used in help.toml
    #[must_use]
    pub const fn id(&self) -> &'static str {
        match self {
            Self::MoveUp => "move_up",
            Self::MoveDown => "move_down",
            Self::MoveLeft => "move_left",
            Self::MoveRight => "move_right",
            Self::JumpToFirst => "jump_first",
            Self::JumpToLast => "jump_last",
            Self::SwitchFocus => "switch_focus",

            Self::Activate => "activate",
            Self::PickEmoji(_) => "pick_emoji",
            Self::ClearPattern => "clear_pattern",
            Self::Undo => "undo",
            Self::Redo => "redo",
            Self::TogglePatternMode => "toggle_pattern_mode",

            Self::NextPalette => "next_palette",
            Self::PreviousPalette => "previous_palette",

            Self::ToggleLanguage => "toggle_language",
            Self::CycleTheme => "cycle_theme",

            Self::Share => "share",
            Self::AiGenerate => "ai_generate",

            Self::ToggleHelp => "toggle_help",

            Self::Quit => "quit",
            Self::Cancel => "cancel",
        }
    }

    /// The editor intent this action posts, for actions that map one to one.
    #[must_use]
    pub const fn intent(&self) -> Option<Intent> {
        match self {
            Self::ClearPattern => Some(Intent::ClearPattern),
            Self::Undo => Some(Intent::Undo),
            Self::Redo => Some(Intent::Redo),
            Self::TogglePatternMode => Some(Intent::TogglePatternMode),
            Self::NextPalette => Some(Intent::NextPalette),
            Self::PreviousPalette => Some(Intent::PreviousPalette),
            Self::ToggleLanguage => Some(Intent::ToggleLanguage),
            Self::CycleTheme => Some(Intent::CycleTheme),
            Self::Share => Some(Intent::Share),
            Self::AiGenerate => Some(Intent::AiGenerate),
            _ => None,
        }
    }
}

/// Shortcut registry that maps key events to actions for a given context.
///
/// This is the central source of truth for all keyboard shortcuts in the application.
#[derive(Debug, Clone)]
pub struct ShortcutRegistry {
    /// Maps (context, key_binding) to Action
    bindings: HashMap<(String, KeyBinding), Action>,
}

/// A key binding (key + modifiers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    /// Key code
    pub code: KeyCode,
    /// Modifiers held with the key
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    /// Create a new key binding.
    #[must_use]
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Create a key binding from a KeyEvent.
    ///
    /// Shift is dropped for non-letter characters: terminals disagree on
    /// whether `?` or `]` arrive with the shift flag.
    #[must_use]
    pub fn from_event(event: KeyEvent) -> Self {
        let mut modifiers = event.modifiers;
        if let KeyCode::Char(c) = event.code {
            if !c.is_ascii_alphabetic() {
                modifiers.remove(KeyModifiers::SHIFT);
            }
        }
        Self {
            code: event.code,
            modifiers,
        }
    }
}

impl ShortcutRegistry {
    /// Create a new shortcut registry with default bindings.
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Self {
            bindings: HashMap::new(),
        };

        registry.register_global_shortcuts();
        registry.register_canvas_shortcuts();
        registry.register_palette_shortcuts();
        registry.register_help_shortcuts();
        registry
    }

    fn register_global_shortcuts(&mut self) {
        use KeyCode as K;
        use KeyModifiers as M;

        let ctx = contexts::GLOBAL;

        // === FOCUS ===
        self.register(ctx, K::Tab, M::NONE, Action::SwitchFocus);
        self.register(ctx, K::BackTab, M::SHIFT, Action::SwitchFocus);
        self.register(ctx, K::BackTab, M::NONE, Action::SwitchFocus);

        // === EDITING ===
        self.register(ctx, K::Char('u'), M::NONE, Action::Undo);
        self.register(ctx, K::Char('z'), M::CONTROL, Action::Undo);
        self.register(ctx, K::Char('r'), M::NONE, Action::Redo);
        self.register(ctx, K::Char('y'), M::CONTROL, Action::Redo);
        self.register(ctx, K::Char('x'), M::NONE, Action::ClearPattern);
        self.register(ctx, K::Delete, M::NONE, Action::ClearPattern);
        self.register(ctx, K::Char('m'), M::NONE, Action::TogglePatternMode);

        // Digits pick from the active palette: 1..9 then 0 for the tenth
        for (index, digit) in ['1', '2', '3', '4', '5', '6', '7', '8', '9', '0']
            .into_iter()
            .enumerate()
        {
            self.register(ctx, K::Char(digit), M::NONE, Action::PickEmoji(index));
        }

        // === PALETTES ===
        self.register(ctx, K::Char(']'), M::NONE, Action::NextPalette);
        self.register(ctx, K::Char('['), M::NONE, Action::PreviousPalette);

        // === PREFERENCES ===
        self.register(ctx, K::Char('L'), M::SHIFT, Action::ToggleLanguage);
        self.register(ctx, K::Char('t'), M::NONE, Action::CycleTheme);

        // === PLACEHOLDERS ===
        self.register(ctx, K::Char('s'), M::NONE, Action::Share);
        self.register(ctx, K::Char('a'), M::NONE, Action::AiGenerate);

        // === HELP ===
        self.register(ctx, K::Char('?'), M::NONE, Action::ToggleHelp);

        // === GENERAL ===
        self.register(ctx, K::Char('q'), M::NONE, Action::Quit);
        self.register(ctx, K::Char('q'), M::CONTROL, Action::Quit);
        self.register(ctx, K::Char('c'), M::CONTROL, Action::Quit);
        self.register(ctx, K::Esc, M::NONE, Action::Cancel);
    }

    fn register_canvas_shortcuts(&mut self) {
        use KeyCode as K;
        use KeyModifiers as M;

        let ctx = contexts::CANVAS;

        self.register(ctx, K::Up, M::NONE, Action::MoveUp);
        self.register(ctx, K::Down, M::NONE, Action::MoveDown);
        self.register(ctx, K::Left, M::NONE, Action::MoveLeft);
        self.register(ctx, K::Right, M::NONE, Action::MoveRight);
        self.register(ctx, K::Char('k'), M::NONE, Action::MoveUp);
        self.register(ctx, K::Char('j'), M::NONE, Action::MoveDown);
        self.register(ctx, K::Char('h'), M::NONE, Action::MoveLeft);
        self.register(ctx, K::Char('l'), M::NONE, Action::MoveRight);
        self.register(ctx, K::Home, M::NONE, Action::JumpToFirst);
        self.register(ctx, K::End, M::NONE, Action::JumpToLast);
        self.register(ctx, K::Enter, M::NONE, Action::Activate);
        self.register(ctx, K::Char(' '), M::NONE, Action::Activate);
    }

    fn register_palette_shortcuts(&mut self) {
        use KeyCode as K;
        use KeyModifiers as M;

        let ctx = contexts::PALETTE;

        self.register(ctx, K::Left, M::NONE, Action::MoveLeft);
        self.register(ctx, K::Right, M::NONE, Action::MoveRight);
        self.register(ctx, K::Char('h'), M::NONE, Action::MoveLeft);
        self.register(ctx, K::Char('l'), M::NONE, Action::MoveRight);
        self.register(ctx, K::Up, M::NONE, Action::PreviousPalette);
        self.register(ctx, K::Down, M::NONE, Action::NextPalette);
        self.register(ctx, K::Char('k'), M::NONE, Action::PreviousPalette);
        self.register(ctx, K::Char('j'), M::NONE, Action::NextPalette);
        self.register(ctx, K::Home, M::NONE, Action::JumpToFirst);
        self.register(ctx, K::End, M::NONE, Action::JumpToLast);
        self.register(ctx, K::Enter, M::NONE, Action::Activate);
        self.register(ctx, K::Char(' '), M::NONE, Action::Activate);
    }

    fn register_help_shortcuts(&mut self) {
        use KeyCode as K;
        use KeyModifiers as M;

        let ctx = contexts::HELP;

        self.register(ctx, K::Up, M::NONE, Action::MoveUp);
        self.register(ctx, K::Down, M::NONE, Action::MoveDown);
        self.register(ctx, K::Char('k'), M::NONE, Action::MoveUp);
        self.register(ctx, K::Char('j'), M::NONE, Action::MoveDown);
        self.register(ctx, K::Home, M::NONE, Action::JumpToFirst);
        self.register(ctx, K::End, M::NONE, Action::JumpToLast);
        self.register(ctx, K::Char('?'), M::NONE, Action::ToggleHelp);
        self.register(ctx, K::Char('q'), M::NONE, Action::ToggleHelp);
        self.register(ctx, K::Esc, M::NONE, Action::ToggleHelp);
        self.register(ctx, K::Char('c'), M::CONTROL, Action::Quit);
    }

    /// Register a shortcut binding.
    fn register(&mut self, context: &str, code: KeyCode, modifiers: KeyModifiers, action: Action) {
        let binding = KeyBinding::new(code, modifiers);
        self.bindings.insert((context.to_string(), binding), action);
    }

    /// Look up an action for a given context and key event.
    #[must_use]
    pub fn lookup(&self, context: &str, event: KeyEvent) -> Option<Action> {
        let binding = KeyBinding::from_event(event);
        self.bindings.get(&(context.to_string(), binding)).copied()
    }

    /// Looks in the focused context first, then in the global one.
    #[must_use]
    pub fn resolve(&self, context: &str, event: KeyEvent) -> Option<Action> {
        self.lookup(context, event).or_else(|| {
            if context == contexts::HELP {
                None
            } else {
                self.lookup(contexts::GLOBAL, event)
            }
        })
    }

    /// Check if a key event matches a specific action in the given context.
    #[must_use]
    pub fn matches(&self, context: &str, event: KeyEvent, action: Action) -> bool {
        self.resolve(context, event) == Some(action)
    }
}

impl Default for ShortcutRegistry {
    fn default() -> Self {
        Self::new()
    }
}
