//! Bounded, append-only conversation history
//!
//! The only state that outlives a single evaluation. Each asked question is
//! recorded with a sensor snapshot; entries are never mutated in place and
//! the log drops its oldest entry once capacity is reached. No evaluation
//! reads the log — it exists for operators reviewing what was asked when.

use std::collections::{BTreeMap, VecDeque};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::Parameter;

/// One recorded question with the readings at the time it was asked.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationEntry {
    pub timestamp: DateTime<Utc>,
    pub question: String,
    /// Last reading per present parameter at ask time.
    pub snapshot: BTreeMap<Parameter, f64>,
}

/// Append-only log with a fixed capacity (oldest entries evicted).
#[derive(Debug, Clone)]
pub struct ConversationLog {
    entries: VecDeque<ConversationEntry>,
    capacity: usize,
}

impl ConversationLog {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity.min(64)),
            capacity: capacity.max(1),
        }
    }

    /// Append an entry, evicting the oldest once at capacity.
    pub fn append(&mut self, entry: ConversationEntry) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    /// The most recent `limit` entries, newest first.
    #[must_use]
    pub fn recent(&self, limit: usize) -> Vec<ConversationEntry> {
        self.entries.iter().rev().take(limit).cloned().collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(question: &str) -> ConversationEntry {
        ConversationEntry {
            timestamp: Utc::now(),
            question: question.to_string(),
            snapshot: BTreeMap::new(),
        }
    }

    #[test]
    fn test_append_and_recent_ordering() {
        let mut log = ConversationLog::new(10);
        log.append(entry("first"));
        log.append(entry("second"));
        log.append(entry("third"));

        let recent = log.recent(2);
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].question, "third");
        assert_eq!(recent[1].question, "second");
    }

    #[test]
    fn test_capacity_evicts_oldest() {
        let mut log = ConversationLog::new(3);
        for i in 0..5 {
            log.append(entry(&format!("q{i}")));
        }
        assert_eq!(log.len(), 3);
        let recent = log.recent(10);
        assert_eq!(recent[2].question, "q2");
        assert_eq!(recent[0].question, "q4");
    }
}
