//! Canvas widget: draws the pattern grid and maps clicks back to cells.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::{AppState, Focus};
use crate::config::MIN_CELL_WIDTH;
use crate::i18n::Message;
use crate::models::{GridCell, PatternGrid};

/// Where the grid lands inside the canvas block.
///
/// Grids larger than the area are cropped around the centre, and the cell
/// width shrinks (down to the minimum) before cropping kicks in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasLayout {
    /// Screen column of the first visible cell
    pub origin_x: u16,
    /// Screen row of the first visible cell
    pub origin_y: u16,
    /// Columns per cell
    pub cell_width: u16,
    /// Grid row shown first
    pub row_offset: usize,
    /// Grid column shown first
    pub col_offset: usize,
    /// Number of grid rows on screen
    pub visible_rows: usize,
    /// Number of grid columns on screen
    pub visible_cols: usize,
}

impl CanvasLayout {
    /// Fits a square grid of side `grid_size` into `area`.
    #[must_use]
    pub fn compute(area: Rect, grid_size: usize, preferred_cell_width: u16) -> Self {
        let width = usize::from(area.width);
        let height = usize::from(area.height);

        let mut cell_width = usize::from(preferred_cell_width.max(MIN_CELL_WIDTH));
        if grid_size > 0 && grid_size * cell_width > width {
            cell_width = (width / grid_size).max(usize::from(MIN_CELL_WIDTH));
        }

        let visible_cols = grid_size.min(width / cell_width);
        let visible_rows = grid_size.min(height);

        Self {
            origin_x: area.x + ((width - visible_cols * cell_width) / 2) as u16,
            origin_y: area.y + ((height - visible_rows) / 2) as u16,
            cell_width: cell_width as u16,
            row_offset: (grid_size - visible_rows) / 2,
            col_offset: (grid_size - visible_cols) / 2,
            visible_rows,
            visible_cols,
        }
    }

    /// Grid cell under a screen position.
    #[must_use]
    pub fn cell_at(&self, x: u16, y: u16) -> Option<(usize, usize)> {
        if x < self.origin_x || y < self.origin_y {
            return None;
        }
        let col = usize::from((x - self.origin_x) / self.cell_width);
        let row = usize::from(y - self.origin_y);
        if row >= self.visible_rows || col >= self.visible_cols {
            return None;
        }
        Some((row + self.row_offset, col + self.col_offset))
    }

    /// Screen area covered by the visible cells.
    #[must_use]
    pub fn grid_rect(&self) -> Rect {
        Rect::new(
            self.origin_x,
            self.origin_y,
            self.visible_cols as u16 * self.cell_width,
            self.visible_rows as u16,
        )
    }
}

/// Canvas widget
pub struct CanvasWidget;

impl CanvasWidget {
    /// The bordered block around the grid.
    #[must_use]
    pub fn block(state: &AppState) -> Block<'static> {
        let language = state.editor.language();
        let theme = &state.theme;
        let current = state.editor.current();

        let mut title = format!(
            "{}- {} · {} ",
            Message::CanvasTitle.localize(language),
            Message::EmojiCount(current.len()).localize(language),
            current.pattern_mode()
        );
        if state.editor.is_read_only() {
            title.push_str("· 🔒 ");
        }

        let border = if state.focus == Focus::Canvas && state.help_overlay.is_none() {
            theme.accent
        } else {
            theme.inactive
        };

        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(border))
            .style(Style::default().bg(theme.background))
    }

    /// Layout of the grid inside a canvas block drawn at `area`.
    #[must_use]
    pub fn layout(state: &AppState, area: Rect, grid_size: usize) -> CanvasLayout {
        let inner = Self::block(state).inner(area);
        CanvasLayout::compute(inner, grid_size, state.config.canvas.cell_width)
    }

    /// Render the canvas
    pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
        let block = Self::block(state);
        let inner = block.inner(area);
        f.render_widget(block, area);

        let grid = state.grid();
        if grid.is_empty() {
            let hint = Message::EmptyCanvas.localize(state.editor.language());
            let placeholder = Paragraph::new(hint)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .style(Style::default().fg(state.theme.text_muted));
            let y = inner.y + inner.height / 2;
            f.render_widget(placeholder, Rect::new(inner.x, y, inner.width, 1.min(inner.height)));
            return;
        }

        let layout = CanvasLayout::compute(inner, grid.size(), state.config.canvas.cell_width);
        let lines = Self::grid_lines(grid, &layout, state);
        f.render_widget(Paragraph::new(lines), layout.grid_rect());
    }

    fn grid_lines(grid: &PatternGrid, layout: &CanvasLayout, state: &AppState) -> Vec<Line<'static>> {
        let theme = &state.theme;
        let flashing = state.flash_frames > 0;
        let show_cursor = state.focus == Focus::Canvas;

        (layout.row_offset..layout.row_offset + layout.visible_rows)
            .map(|row| {
                let spans: Vec<Span<'static>> = (layout.col_offset
                    ..layout.col_offset + layout.visible_cols)
                    .map(|col| {
                        let cell = grid.get(row, col);
                        let mut style = cell_style(cell, state, flashing);
                        if show_cursor && state.canvas_cursor == (row, col) {
                            style = style.add_modifier(Modifier::REVERSED);
                        }
                        let text = cell.map_or("·", |c| c.emoji.as_str());
                        padded(text, layout.cell_width, style)
                    })
                    .collect();
                Line::from(spans).style(Style::default().fg(theme.text_muted))
            })
            .collect()
    }
}

fn cell_style(cell: Option<&GridCell>, state: &AppState, flashing: bool) -> Style {
    let theme = &state.theme;
    match cell {
        Some(cell) if flashing && cell.is_center => Style::default()
            .bg(theme.flash)
            .fg(theme.text)
            .add_modifier(Modifier::BOLD),
        Some(cell) => Style::default().bg(theme.ring_color(cell.layer)).fg(theme.text),
        None => Style::default().fg(theme.text_muted),
    }
}

/// Centres `text` in a span exactly `width` columns wide.
fn padded(text: &str, width: u16, style: Style) -> Span<'static> {
    let text_width = Span::raw(text).width();
    let pad = usize::from(width).saturating_sub(text_width);
    let left = pad / 2;
    let right = pad - left;
    Span::styled(format!("{}{text}{}", " ".repeat(left), " ".repeat(right)), style)
}
