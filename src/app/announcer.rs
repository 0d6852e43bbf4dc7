//! Accessibility announcements.
//!
//! The editor pushes a short status line after every transition. Front ends
//! decide how to surface it: the TUI shows the latest line in the status bar,
//! tests read the backlog.

use std::collections::VecDeque;

/// Urgency of an announcement, mirroring ARIA live regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Politeness {
    /// Waits for the reader to be idle
    Polite,
    /// Interrupts
    Assertive,
}

/// Write-only text sink for status messages.
pub trait Announcer {
    /// Publishes a message on a channel.
    fn announce(&mut self, politeness: Politeness, message: String);
}

/// One published message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Announcement {
    /// Channel
    pub politeness: Politeness,
    /// Text
    pub message: String,
}

/// Announcer that remembers the latest message per channel and a bounded
/// backlog, and mirrors everything to tracing.
#[derive(Debug, Clone)]
pub struct AnnouncementLog {
    polite: Option<String>,
    assertive: Option<String>,
    backlog: VecDeque<Announcement>,
    capacity: usize,
}

impl AnnouncementLog {
    /// Default backlog size.
    pub const DEFAULT_CAPACITY: usize = 32;

    /// Creates a log keeping at most `capacity` past announcements.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            polite: None,
            assertive: None,
            backlog: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Latest polite message.
    #[must_use]
    pub fn polite(&self) -> Option<&str> {
        self.polite.as_deref()
    }

    /// Latest assertive message.
    #[must_use]
    pub fn assertive(&self) -> Option<&str> {
        self.assertive.as_deref()
    }

    /// Most recent announcement on either channel.
    #[must_use]
    pub fn latest(&self) -> Option<&Announcement> {
        self.backlog.back()
    }

    /// Past announcements, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Announcement> {
        self.backlog.iter()
    }

    /// Number of announcements kept.
    #[must_use]
    pub fn len(&self) -> usize {
        self.backlog.len()
    }

    /// True when nothing was announced yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.backlog.is_empty()
    }
}

impl Default for AnnouncementLog {
    fn default() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }
}

impl Announcer for AnnouncementLog {
    fn announce(&mut self, politeness: Politeness, message: String) {
        match politeness {
            Politeness::Polite => {
                tracing::debug!(%message, "announce (polite)");
                self.polite = Some(message.clone());
            }
            Politeness::Assertive => {
                tracing::info!(%message, "announce (assertive)");
                self.assertive = Some(message.clone());
            }
        }

        if self.capacity == 0 {
            return;
        }
        if self.backlog.len() == self.capacity {
            self.backlog.pop_front();
        }
        self.backlog.push_back(Announcement {
            politeness,
            message,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channels_tracked_separately() {
        let mut log = AnnouncementLog::default();
        log.announce(Politeness::Polite, "one".into());
        log.announce(Politeness::Assertive, "two".into());

        assert_eq!(log.polite(), Some("one"));
        assert_eq!(log.assertive(), Some("two"));
        assert_eq!(log.latest().map(|a| a.message.as_str()), Some("two"));
    }

    #[test]
    fn test_backlog_is_bounded() {
        let mut log = AnnouncementLog::with_capacity(2);
        for n in 0..5 {
            log.announce(Politeness::Polite, n.to_string());
        }
        let kept: Vec<&str> = log.iter().map(|a| a.message.as_str()).collect();
        assert_eq!(kept, ["3", "4"]);
    }

    #[test]
    fn test_zero_capacity_keeps_latest_only() {
        let mut log = AnnouncementLog::with_capacity(0);
        log.announce(Politeness::Polite, "hi".into());
        assert!(log.is_empty());
        assert_eq!(log.polite(), Some("hi"));
    }
}
