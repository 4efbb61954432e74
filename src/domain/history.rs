// src/domain/history.rs
use crate::domain::models::Purchase;

/// Session-scoped record of purchases that were persisted remotely.
///
/// Entries are only ever appended. Viewing is non-destructive and yields the
/// most recent purchase first.
#[derive(Debug, Clone, Default)]
pub struct HistoryStore {
    entries: Vec<Purchase>,
}

impl HistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, purchase: Purchase) {
        self.entries.push(purchase);
    }

    pub fn recent_first(&self) -> impl Iterator<Item = &Purchase> {
        self.entries.iter().rev()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
