//! Pattern generation: maps an emoji sequence onto a 2D grid.
//!
//! In concentric mode every emoji becomes one ring. For a sequence of length
//! `N` the element at index `i` sits on ring `N - 1 - i`: rings are assigned
//! in reverse insertion order, so the first emoji is the outermost ring and
//! the most recently appended one is the centre. The grid is a square of side
//! `2N - 1` with the centre at `(N - 1, N - 1)`.
//!
//! Every function here is total: any string sequence, including duplicates,
//! empty strings and malformed glyphs, produces a grid.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::models::{GridCell, PatternGrid, PatternMode, PatternState};

/// How a ring is drawn into the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FillPolicy {
    /// One cell per ring, at the ring's top-left corner (centre for ring 0)
    #[default]
    Anchor,
    /// The ring's emoji repeated on every cell of its square perimeter
    Perimeter,
}

impl FillPolicy {
    /// Lowercase identifier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Anchor => "anchor",
            Self::Perimeter => "perimeter",
        }
    }
}

impl fmt::Display for FillPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FillPolicy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "anchor" => Ok(Self::Anchor),
            "perimeter" => Ok(Self::Perimeter),
            other => anyhow::bail!("Unknown fill policy '{other}'. Expected 'anchor' or 'perimeter'"),
        }
    }
}

/// Ring index of the element at `index` in a sequence of `len` elements.
///
/// `index` must be less than `len`.
#[must_use]
pub const fn layer_for(index: usize, len: usize) -> usize {
    len - 1 - index
}

/// Side of the concentric grid for `len` emojis (0 when empty).
#[must_use]
pub const fn concentric_size(len: usize) -> usize {
    if len == 0 {
        0
    } else {
        2 * len - 1
    }
}

/// Side of the sequential grid for `len` emojis: `ceil(sqrt(len))`.
#[must_use]
pub const fn sequential_size(len: usize) -> usize {
    let mut side = 0;
    while side * side < len {
        side += 1;
    }
    side
}

/// Canonical cell of a ring: the centre for ring 0, otherwise the top-left corner.
#[must_use]
pub const fn ring_anchor(center: usize, layer: usize) -> (usize, usize) {
    (center - layer, center - layer)
}

/// Every position on a ring's square perimeter, clockwise from the anchor.
///
/// Ring 0 has one position; ring `L > 0` has `8 * L`.
#[must_use]
pub fn ring_positions(center: usize, layer: usize) -> Vec<(usize, usize)> {
    if layer == 0 {
        return vec![(center, center)];
    }

    let top = center - layer;
    let bottom = center + layer;
    let left = center - layer;
    let right = center + layer;

    let mut positions = Vec::with_capacity(8 * layer);
    for col in left..=right {
        positions.push((top, col));
    }
    for row in top + 1..=bottom {
        positions.push((row, right));
    }
    for col in (left..right).rev() {
        positions.push((bottom, col));
    }
    for row in (top + 1..bottom).rev() {
        positions.push((row, left));
    }
    positions
}

/// Concentric grid with exactly one cell per emoji.
pub fn generate_concentric_pattern<S: AsRef<str>>(sequence: &[S]) -> PatternGrid {
    generate_concentric_with_fill(sequence, FillPolicy::Anchor)
}

/// Concentric grid using the given fill policy.
pub fn generate_concentric_with_fill<S: AsRef<str>>(
    sequence: &[S],
    fill: FillPolicy,
) -> PatternGrid {
    let len = sequence.len();
    if len == 0 {
        return PatternGrid::default();
    }

    let center = len - 1;
    let mut grid = PatternGrid::square(concentric_size(len));

    for (index, emoji) in sequence.iter().enumerate() {
        let layer = layer_for(index, len);
        match fill {
            FillPolicy::Anchor => {
                let (row, col) = ring_anchor(center, layer);
                grid.place(GridCell::new(emoji.as_ref(), row, col, layer));
            }
            FillPolicy::Perimeter => {
                for (row, col) in ring_positions(center, layer) {
                    grid.place(GridCell::new(emoji.as_ref(), row, col, layer));
                }
            }
        }
    }

    grid
}

/// Row-major grid of side `ceil(sqrt(N))`; layers follow the concentric rule.
pub fn generate_sequential_pattern<S: AsRef<str>>(sequence: &[S]) -> PatternGrid {
    let len = sequence.len();
    let side = sequential_size(len);
    let mut grid = PatternGrid::square(side);

    for (index, emoji) in sequence.iter().enumerate() {
        let layer = layer_for(index, len);
        grid.place(GridCell::new(emoji.as_ref(), index / side, index % side, layer));
    }

    grid
}

/// Grid for a state, one cell per emoji.
pub fn generate(state: &PatternState) -> PatternGrid {
    generate_with_fill(state, FillPolicy::Anchor)
}

/// Grid for a state with a fill policy. Sequential mode ignores the policy.
pub fn generate_with_fill(state: &PatternState, fill: FillPolicy) -> PatternGrid {
    match state.pattern_mode() {
        PatternMode::Concentric => generate_concentric_with_fill(state.sequence(), fill),
        PatternMode::Sequential => generate_sequential_pattern(state.sequence()),
    }
}

/// Builds a `PatternState` whose derived fields agree with the sequence.
///
/// The sequence is kept exactly as given. Never fails.
pub fn create_pattern_state<I, S>(sequence: I, mode: PatternMode) -> PatternState
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let sequence: Vec<String> = sequence.into_iter().map(Into::into).collect();
    let len = sequence.len();
    let pattern_size = match mode {
        PatternMode::Concentric => concentric_size(len),
        PatternMode::Sequential => sequential_size(len),
    };
    PatternState::from_parts(sequence, pattern_size, len, mode)
}

/// New state with `emoji` appended to the sequence.
///
/// The appended emoji takes ring 0 and every earlier emoji moves out one ring.
pub fn append_emoji(state: &PatternState, emoji: impl Into<String>) -> PatternState {
    let mut sequence = state.sequence().to_vec();
    sequence.push(emoji.into());
    create_pattern_state(sequence, state.pattern_mode())
}
