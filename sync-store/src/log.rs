//! Bounded event log for media-sync.
//!
//! An append-only, capacity-bounded ordered sequence of sync events.
//! When an append would exceed the capacity, the oldest entries are
//! dropped so only the most recent [`MAX_EVENTS`] remain in append order.

use media_sync_types::SyncEvent;
use std::collections::VecDeque;

/// Maximum number of events retained in the log.
pub const MAX_EVENTS: usize = 50;

/// Capacity-bounded history of observed sync events.
///
/// No deduplication is performed; repeated identical appends simply grow
/// and trim the log.
#[derive(Debug, Default)]
pub struct EventLog {
    events: VecDeque<SyncEvent>,
}

impl EventLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event, trimming from the front if over capacity.
    pub fn push(&mut self, event: SyncEvent) {
        self.events.push_back(event);
        while self.events.len() > MAX_EVENTS {
            self.events.pop_front();
        }
    }

    /// Number of events currently retained.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Check if the log is empty.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Iterate over retained events, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &SyncEvent> {
        self.events.iter()
    }

    /// Snapshot of the retained events, oldest first.
    pub fn to_vec(&self) -> Vec<SyncEvent> {
        self.events.iter().cloned().collect()
    }
}
