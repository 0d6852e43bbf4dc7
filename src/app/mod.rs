//! Application orchestration layer
//!
//! This module turns user intents into pattern transitions. It owns the
//! history and the session context but knows nothing about the terminal.

pub mod announcer;
pub mod context;
pub mod editor;
pub mod intent;
pub mod queue;

// Re-export commonly used types for convenience
pub use announcer::{Announcement, AnnouncementLog, Announcer, Politeness};
pub use context::SessionContext;
pub use editor::{Editor, Outcome};
pub use intent::Intent;
pub use queue::{IntentQueue, IntentSender};
