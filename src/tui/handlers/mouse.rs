//! Mouse input: clicks on the palette pick emojis, clicks on the canvas tap it.

use anyhow::Result;
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};

use crate::app::Intent;
use crate::tui::{AppState, CanvasWidget, Focus, PaletteBar, ScreenAreas};

/// Handle a mouse event against the last rendered layout
pub fn handle_mouse_event(state: &mut AppState, mouse: MouseEvent) -> Result<bool> {
    let areas = ScreenAreas::split(state.frame_area);
    let position = Position::new(mouse.column, mouse.row);

    if let Some(overlay) = &mut state.help_overlay {
        match mouse.kind {
            MouseEventKind::ScrollUp => overlay.scroll_up(),
            MouseEventKind::ScrollDown => overlay.scroll_down(),
            _ => {}
        }
        return Ok(false);
    }

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if areas.canvas.contains(position) {
                handle_canvas_click(state, areas.canvas, mouse.column, mouse.row);
            } else if areas.palette.contains(position) {
                handle_palette_click(state, areas.palette, mouse.column, mouse.row);
            }
        }
        MouseEventKind::ScrollDown if areas.palette.contains(position) => {
            state.post(Intent::NextPalette);
        }
        MouseEventKind::ScrollUp if areas.palette.contains(position) => {
            state.post(Intent::PreviousPalette);
        }
        _ => {}
    }
    Ok(false)
}

fn handle_canvas_click(state: &mut AppState, area: Rect, x: u16, y: u16) {
    state.focus = Focus::Canvas;
    let size = state.grid_size();
    // Empty canvas has no cells; a tap anywhere still counts
    let (row, col) = CanvasWidget::layout(state, area, size)
        .cell_at(x, y)
        .unwrap_or(state.canvas_cursor);
    state.canvas_cursor = (row, col);
    state.post(Intent::CanvasTap { row, col });
}

fn handle_palette_click(state: &mut AppState, area: Rect, x: u16, y: u16) {
    let Some(palette) = state.editor.active_palette() else {
        return;
    };
    let Some(index) = PaletteBar::slot_at(area, x, y, palette.emoji_count()) else {
        return;
    };
    let Some(emoji) = palette.emoji_at(index).map(str::to_string) else {
        return;
    };

    state.focus = Focus::Palette;
    state.palette_cursor = index;
    state.post(Intent::SelectEmoji(emoji));
}
