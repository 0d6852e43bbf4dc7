//! Undo/redo history of pattern snapshots.
//!
//! The history is a linear path with a pointer: `undo` holds the states before
//! the pointer, `redo` the states after it. Recording a new state truncates
//! everything after the pointer (last branch wins, no redo tree).

use crate::models::{PatternMode, PatternState};
use crate::services::pattern_generator::create_pattern_state;

/// Current pattern plus undo and redo stacks.
#[derive(Debug, Clone)]
pub struct PatternHistory {
    current: PatternState,
    undo_stack: Vec<PatternState>,
    redo_stack: Vec<PatternState>,
}

impl PatternHistory {
    /// Starts a history at `initial` with both stacks empty.
    #[must_use]
    pub fn new(initial: PatternState) -> Self {
        Self {
            current: initial,
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
        }
    }

    /// The state the user is looking at.
    #[must_use]
    pub const fn current(&self) -> &PatternState {
        &self.current
    }

    /// Pushes the current state onto the undo stack, drops the redo branch and
    /// makes `next` current.
    pub fn record_and_apply(&mut self, next: PatternState) {
        let previous = std::mem::replace(&mut self.current, next);
        self.undo_stack.push(previous);
        self.redo_stack.clear();
    }

    /// Steps back one state. Returns false (and does nothing) when there is
    /// nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.undo_stack.pop() {
            Some(previous) => {
                let current = std::mem::replace(&mut self.current, previous);
                self.redo_stack.push(current);
                true
            }
            None => false,
        }
    }

    /// Steps forward one state. Returns false (and does nothing) when there is
    /// nothing to redo.
    pub fn redo(&mut self) -> bool {
        match self.redo_stack.pop() {
            Some(next) => {
                let current = std::mem::replace(&mut self.current, next);
                self.undo_stack.push(current);
                true
            }
            None => false,
        }
    }

    /// Whether `undo` would do anything.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Whether `redo` would do anything.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Number of states that can be undone.
    #[must_use]
    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    /// Number of states that can be redone.
    #[must_use]
    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }

    /// Top of the redo stack.
    #[must_use]
    pub fn peek_redo(&self) -> Option<&PatternState> {
        self.redo_stack.last()
    }

    /// Length of the visited path: undo + redo + current.
    #[must_use]
    pub fn path_len(&self) -> usize {
        self.undo_stack.len() + self.redo_stack.len() + 1
    }
}

impl Default for PatternHistory {
    fn default() -> Self {
        Self::new(create_pattern_state(Vec::<String>::new(), PatternMode::Concentric))
    }
}
