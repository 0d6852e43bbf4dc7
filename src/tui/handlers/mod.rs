//! Input handlers: keys resolve to actions, clicks resolve to intents.

pub mod actions;
pub mod mouse;
pub mod navigation;

use anyhow::Result;
use crossterm::event::KeyEvent;

use crate::tui::AppState;

// Re-export handler functions
pub use actions::dispatch_action;
pub use mouse::handle_mouse_event;

/// Handle a key press in the focused context
pub fn handle_key_event(state: &mut AppState, key: KeyEvent) -> Result<bool> {
    let context = state.shortcut_context();
    state
        .shortcuts
        .resolve(context, key)
        .map_or(Ok(false), |action| dispatch_action(state, action))
}
