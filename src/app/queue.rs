//! Single-consumer intent queue.
//!
//! The event loop owns the queue and drains it once per tick. Anything else
//! (key handlers, future background jobs) posts through a cloned
//! [`IntentSender`], so history is only ever touched from the loop.

use std::sync::mpsc::{self, Receiver, Sender};

use super::announcer::Announcer;
use super::editor::{Editor, Outcome};
use super::intent::Intent;

/// Cloneable handle for posting intents.
#[derive(Debug, Clone)]
pub struct IntentSender {
    tx: Sender<Intent>,
}

impl IntentSender {
    /// Posts an intent. Returns false when the queue is gone.
    pub fn post(&self, intent: Intent) -> bool {
        self.tx.send(intent).is_ok()
    }
}

/// FIFO of pending intents.
#[derive(Debug)]
pub struct IntentQueue {
    tx: Sender<Intent>,
    rx: Receiver<Intent>,
}

impl IntentQueue {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel::<Intent>();
        Self { tx, rx }
    }

    /// New handle for posting into this queue.
    #[must_use]
    pub fn sender(&self) -> IntentSender {
        IntentSender {
            tx: self.tx.clone(),
        }
    }

    /// Posts an intent from the owning thread.
    pub fn post(&self, intent: Intent) {
        // The queue holds its own receiver, so this cannot fail
        let _ = self.tx.send(intent);
    }

    /// Dispatches every pending intent to completion, one at a time.
    pub fn dispatch_pending(
        &self,
        editor: &mut Editor,
        announcer: &mut dyn Announcer,
    ) -> Vec<Outcome> {
        self.rx
            .try_iter()
            .map(|intent| editor.dispatch(intent, announcer))
            .collect()
    }
}

impl Default for IntentQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{AnnouncementLog, SessionContext};
    use crate::models::PaletteCatalog;

    fn editor() -> Editor {
        Editor::new(PaletteCatalog::load().unwrap(), SessionContext::default(), "hearts")
    }

    #[test]
    fn test_dispatch_pending_preserves_order() {
        let queue = IntentQueue::new();
        let sender = queue.sender();
        let mut editor = editor();
        let mut log = AnnouncementLog::default();

        queue.post(Intent::SelectEmoji("💙".into()));
        assert!(sender.post(Intent::ClearPattern));
        assert!(sender.post(Intent::Undo));

        let outcomes = queue.dispatch_pending(&mut editor, &mut log);
        assert_eq!(outcomes.len(), 3);
        assert_eq!(editor.current().sequence(), ["💙".to_string()]);

        // Queue is empty afterwards
        assert!(queue.dispatch_pending(&mut editor, &mut log).is_empty());
    }

    #[test]
    fn test_sender_reports_dropped_queue() {
        let queue = IntentQueue::new();
        let sender = queue.sender();
        drop(queue);
        assert!(!sender.post(Intent::Undo));
    }
}
