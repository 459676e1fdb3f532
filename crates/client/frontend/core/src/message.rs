//! Shared message log primitives for CLI and future UIs.
use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use game_core::text::format_timestamp;
use runtime::{LogEntry, LogKind};

/// Snapshot of a single message entry.
#[derive(Clone, Debug, PartialEq)]
pub struct MessageEntry {
    pub text: String,
    pub timestamp: DateTime<Utc>,
    pub kind: LogKind,
}

impl MessageEntry {
    pub fn new(text: impl Into<String>, timestamp: DateTime<Utc>, kind: LogKind) -> Self {
        Self {
            text: text.into(),
            timestamp,
            kind,
        }
    }

    /// `HH:MM:SS` clock time of the entry.
    pub fn clock(&self) -> String {
        format_timestamp(&self.timestamp)
    }
}

impl From<&LogEntry> for MessageEntry {
    fn from(entry: &LogEntry) -> Self {
        Self::new(entry.message.clone(), entry.timestamp, entry.kind)
    }
}

/// Circular buffer of messages displayed to the player.
#[derive(Clone, Debug)]
pub struct MessageLog {
    entries: VecDeque<MessageEntry>,
    capacity: usize,
}

impl MessageLog {
    pub fn new(capacity: usize) -> Self {
        let bounded_capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(bounded_capacity),
            capacity: bounded_capacity,
        }
    }

    pub fn push(&mut self, entry: MessageEntry) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    /// Newest first.
    pub fn recent(&self, limit: usize) -> impl Iterator<Item = &MessageEntry> {
        self.entries.iter().rev().take(limit)
    }

    pub fn iter(&self) -> impl Iterator<Item = &MessageEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn oldest_entries_fall_off() {
        let mut log = MessageLog::new(2);
        for text in ["one", "two", "three"] {
            log.push(MessageEntry::new(text, Utc::now(), LogKind::System));
        }
        let texts: Vec<&str> = log.iter().map(|e| e.text.as_str()).collect();
        assert_eq!(texts, ["two", "three"]);
        assert_eq!(log.recent(1).next().map(|e| e.text.as_str()), Some("three"));
    }
}
