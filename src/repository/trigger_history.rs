// src/repository/trigger_history.rs
//! Bounded, newest-first log of dispatch attempts.
//!
//! Order is insertion order: the entry recorded last is always first, whatever
//! its timestamp says. Entries beyond the cap are dropped without archival.

use chrono::Utc;
use std::collections::VecDeque;
use tracing::debug;
use uuid::Uuid;

use crate::domain::model::history::{HistoryEntry, NewHistoryEntry};

pub const MAX_HISTORY_ITEMS: usize = 5;

#[derive(Debug, Clone)]
pub struct TriggerHistory {
    entries: VecDeque<HistoryEntry>,
    capacity: usize,
}

impl Default for TriggerHistory {
    fn default() -> Self {
        Self::with_capacity(MAX_HISTORY_ITEMS)
    }
}

impl TriggerHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Stamps the entry with a fresh id and the current time, prepends it and
    /// truncates to capacity. Returns the stored entry.
    pub fn record(&mut self, entry: NewHistoryEntry) -> HistoryEntry {
        let stored = HistoryEntry {
            id: Uuid::new_v4().to_string(),
            error_type: entry.error_type,
            timestamp: Utc::now(),
            status: entry.status,
            dedup_key: entry.dedup_key,
            error_message: entry.error_message,
        };
        self.entries.push_front(stored.clone());
        self.entries.truncate(self.capacity);
        debug!(
            id = %stored.id,
            status = %stored.status,
            len = self.entries.len(),
            "history entry recorded"
        );
        stored
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Newest first.
    pub fn entries(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    pub fn snapshot(&self) -> Vec<HistoryEntry> {
        self.entries.iter().cloned().collect()
    }

    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.front()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
