//! Action dispatch: turns resolved shortcuts into view changes or intents.

use anyhow::Result;

use super::navigation;
use crate::app::Intent;
use crate::shortcuts::Action;
use crate::tui::{AppState, Focus, HelpOverlayState};

/// Dispatch action to appropriate handler
pub fn dispatch_action(state: &mut AppState, action: Action) -> Result<bool> {
    match action {
        // Navigation
        Action::MoveUp => navigation::handle_move(state, -1, 0),
        Action::MoveDown => navigation::handle_move(state, 1, 0),
        Action::MoveLeft => navigation::handle_move(state, 0, -1),
        Action::MoveRight => navigation::handle_move(state, 0, 1),
        Action::JumpToFirst => navigation::handle_jump_to_first(state),
        Action::JumpToLast => navigation::handle_jump_to_last(state),
        Action::SwitchFocus => {
            state.focus = state.focus.toggled();
            Ok(false)
        }

        // Editing
        Action::Activate => handle_activate(state),
        Action::PickEmoji(index) => handle_pick_emoji(state, index),

        // Overlay
        Action::ToggleHelp => {
            state.help_overlay = match state.help_overlay.take() {
                Some(_) => None,
                None => Some(HelpOverlayState::new(&state.help)),
            };
            Ok(false)
        }
        Action::Cancel => {
            state.help_overlay = None;
            Ok(false)
        }

        Action::Quit => {
            state.should_quit = true;
            Ok(true)
        }

        // Everything else maps straight onto an editor intent
        other => {
            if let Some(intent) = other.intent() {
                state.post(intent);
            }
            Ok(false)
        }
    }
}

/// Enter/Space: pick from the palette, or tap the canvas at the cursor
fn handle_activate(state: &mut AppState) -> Result<bool> {
    match state.focus {
        Focus::Palette => {
            let index = state.palette_cursor;
            handle_pick_emoji(state, index)
        }
        Focus::Canvas => {
            let (row, col) = state.canvas_cursor;
            state.post(Intent::CanvasTap { row, col });
            Ok(false)
        }
    }
}

/// Select the n-th emoji of the active palette, which also appends it
fn handle_pick_emoji(state: &mut AppState, index: usize) -> Result<bool> {
    let emoji = state
        .editor
        .active_palette()
        .and_then(|palette| palette.emoji_at(index))
        .map(str::to_string);

    if let Some(emoji) = emoji {
        state.palette_cursor = index;
        state.post(Intent::SelectEmoji(emoji));
    }
    Ok(false)
}
