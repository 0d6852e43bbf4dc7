//! Service layer for pattern logic.
//!
//! This module contains the pure pattern core: grid generation, undo/redo
//! history and accessibility descriptions. Nothing here touches the terminal.

pub mod accessibility;
pub mod history;
pub mod pattern_generator;

// Re-export commonly used types and functions
pub use accessibility::describe_pattern;
pub use history::PatternHistory;
pub use pattern_generator::{
    append_emoji, create_pattern_state, generate, generate_concentric_pattern, generate_with_fill,
    FillPolicy,
};
