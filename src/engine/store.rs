//! History and memory store.
//!
//! History is an append-only log of resolved calculations that can only be
//! cleared as a whole. Memory is a single slot holding a display value. The two
//! are independent of each other and of the calculation in progress.

use crate::domain::HistoryEntry;

/// Calculation log plus the memory slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Store {
    history: Vec<HistoryEntry>,
    memory: Option<String>,
}

impl Store {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Entries in evaluation order, oldest first.
    #[must_use]
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    pub fn record(&mut self, entry: HistoryEntry) {
        tracing::debug!(
            calculation = %entry.description(),
            result = %entry.result,
            "history entry recorded"
        );
        self.history.push(entry);
    }

    pub fn clear_history(&mut self) {
        tracing::debug!(cleared = self.history.len(), "history cleared");
        self.history.clear();
    }

    /// Stored display value, if any.
    #[must_use]
    pub fn memory(&self) -> Option<&str> {
        self.memory.as_deref()
    }

    /// Overwrites the memory slot.
    pub fn store_memory(&mut self, value: &str) {
        self.memory = Some(value.to_string());
    }

    pub fn clear_memory(&mut self) {
        self.memory = None;
    }
}
