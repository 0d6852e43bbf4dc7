//! Grid cell and grid container produced by the pattern generator.

use serde::{Deserialize, Serialize};

/// One placed emoji at a grid position.
///
/// `is_center` is true exactly when `layer == 0`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridCell {
    /// Emoji glyph placed in this cell (rendered as-is, may be multi-codepoint)
    pub emoji: String,
    /// Grid row (0-based, top to bottom)
    pub row: usize,
    /// Grid column (0-based, left to right)
    pub col: usize,
    /// Ring index, 0 is the centre
    pub layer: usize,
    /// Whether this cell belongs to the centre ring
    pub is_center: bool,
}

impl GridCell {
    /// Creates a cell, deriving `is_center` from the layer.
    pub fn new(emoji: impl Into<String>, row: usize, col: usize, layer: usize) -> Self {
        Self {
            emoji: emoji.into(),
            row,
            col,
            layer,
            is_center: layer == 0,
        }
    }
}

/// Square grid of optional cells.
///
/// Unfilled positions are `None`. An empty pattern is a grid of size 0.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternGrid {
    rows: Vec<Vec<Option<GridCell>>>,
}

impl PatternGrid {
    /// Creates an unfilled grid with `rows` x `cols` positions.
    #[must_use]
    pub fn with_dimensions(rows: usize, cols: usize) -> Self {
        Self {
            rows: vec![vec![None; cols]; rows],
        }
    }

    /// Creates an unfilled square grid.
    #[must_use]
    pub fn square(size: usize) -> Self {
        Self::with_dimensions(size, size)
    }

    /// Number of rows.
    #[must_use]
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns (0 for an empty grid).
    #[must_use]
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// Largest side of the grid.
    #[must_use]
    pub fn size(&self) -> usize {
        self.height().max(self.width())
    }

    /// True when no positions exist.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Cell at a position, if the position is inside the grid and filled.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<&GridCell> {
        self.rows.get(row)?.get(col)?.as_ref()
    }

    /// Places a cell at its own coordinates. Out-of-range cells are dropped.
    pub fn place(&mut self, cell: GridCell) {
        if let Some(slot) = self
            .rows
            .get_mut(cell.row)
            .and_then(|row| row.get_mut(cell.col))
        {
            *slot = Some(cell);
        }
    }

    /// Raw rows, row-major.
    #[must_use]
    pub fn rows(&self) -> &[Vec<Option<GridCell>>] {
        &self.rows
    }

    /// Iterates over filled cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &GridCell> {
        self.rows.iter().flatten().filter_map(Option::as_ref)
    }

    /// Number of filled positions.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.cells().count()
    }

    /// The centre cell, if any.
    #[must_use]
    pub fn center(&self) -> Option<&GridCell> {
        self.cells().find(|cell| cell.is_center)
    }
}
