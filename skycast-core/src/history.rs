//! Bounded, deduplicated search history.
//!
//! Entries are stored as structured `{city, time}` pairs and only rendered to
//! the `"City (HH:mm)"` form at display time. This keeps multi-word city
//! names intact when a history entry is re-used to trigger a fetch; the
//! original split the rendered string on the first space and would turn
//! "New York (09:00)" back into "New".

use serde::{Deserialize, Serialize};

/// A remembered past search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub city: String,
    /// Wall-clock time of the search, formatted HH:mm.
    pub time: String,
}

impl HistoryEntry {
    /// Display form, e.g. `"Paris (09:00)"`.
    pub fn rendered(&self) -> String {
        format!("{} ({})", self.city, self.time)
    }
}

/// Most-recent-first list of searches, unique by rendered string, capped at
/// [`HistoryStore::CAP`] entries.
#[derive(Debug, Clone, Default)]
pub struct HistoryStore {
    entries: Vec<HistoryEntry>,
}

impl HistoryStore {
    pub const CAP: usize = 10;

    pub fn new() -> Self {
        Self::default()
    }

    /// Record a search. A duplicate of an existing entry (same city and same
    /// HH:mm) is a no-op; otherwise the entry is prepended and, past the cap,
    /// the oldest entry is dropped.
    pub fn record(&mut self, city: impl Into<String>, time: impl Into<String>) {
        let entry = HistoryEntry { city: city.into(), time: time.into() };

        if self.entries.iter().any(|e| e.rendered() == entry.rendered()) {
            return;
        }

        self.entries.insert(0, entry);
        if self.entries.len() > Self::CAP {
            self.entries.pop();
        }
    }

    /// Entries in most-recent-first order.
    pub fn entries(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    pub fn get(&self, index: usize) -> Option<&HistoryEntry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
