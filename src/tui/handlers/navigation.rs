// Navigation action handlers

use crate::tui::{AppState, Focus};
use anyhow::Result;

/// Steps `value` by `delta`, staying inside `0..len`.
fn step(value: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    value.saturating_add_signed(delta).min(len - 1)
}

/// Handle a move in the focused panel, or scroll the help overlay
pub fn handle_move(state: &mut AppState, drow: isize, dcol: isize) -> Result<bool> {
    if let Some(overlay) = &mut state.help_overlay {
        match drow {
            -1 => overlay.scroll_up(),
            1 => overlay.scroll_down(),
            _ => {}
        }
        return Ok(false);
    }

    match state.focus {
        Focus::Canvas => {
            let size = state.grid_size();
            let (row, col) = state.canvas_cursor;
            state.canvas_cursor = (step(row, drow, size), step(col, dcol, size));
        }
        Focus::Palette => {
            let count = state
                .editor
                .active_palette()
                .map_or(0, |palette| palette.emoji_count());
            state.palette_cursor = step(state.palette_cursor, dcol, count);
        }
    }
    Ok(false)
}

/// Handle jump to first cell, emoji or help line
pub fn handle_jump_to_first(state: &mut AppState) -> Result<bool> {
    if let Some(overlay) = &mut state.help_overlay {
        overlay.scroll_to_top();
        return Ok(false);
    }
    match state.focus {
        Focus::Canvas => state.canvas_cursor = (0, 0),
        Focus::Palette => state.palette_cursor = 0,
    }
    Ok(false)
}

/// Handle jump to last cell, emoji or help line
pub fn handle_jump_to_last(state: &mut AppState) -> Result<bool> {
    if let Some(overlay) = &mut state.help_overlay {
        overlay.scroll_to_bottom();
        return Ok(false);
    }
    match state.focus {
        Focus::Canvas => {
            let last = state.grid_size().saturating_sub(1);
            state.canvas_cursor = (last, last);
        }
        Focus::Palette => {
            state.palette_cursor = state
                .editor
                .active_palette()
                .map_or(0, |palette| palette.emoji_count().saturating_sub(1));
        }
    }
    Ok(false)
}
