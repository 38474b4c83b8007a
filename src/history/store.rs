//! Bounded, deduplicated conversion history
//!
//! The list is newest-first, capped at [`MAX_HISTORY_ITEMS`], and persisted as
//! a JSON array under a fixed key. Every change builds a new list and swaps it
//! in whole; entries themselves are never edited.

use std::sync::Arc;

use super::entry::HistoryItem;
use super::storage::{KeyValueStore, StoreResult};

/// Entries kept per tool
pub const MAX_HISTORY_ITEMS: usize = 10;

/// History list for one tool
pub struct HistoryStore<T: HistoryItem> {
    key: String,
    storage: Arc<dyn KeyValueStore>,
    entries: Vec<T>,
}

impl<T: HistoryItem> HistoryStore<T> {
    /// Load the list stored under `key`
    ///
    /// History is advisory: a missing key, unreadable store or corrupt JSON
    /// all yield an empty list.
    pub fn load(storage: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        let key = key.into();

        let mut entries = match storage.get(&key) {
            Ok(Some(json)) => serde_json::from_str::<Vec<T>>(&json).unwrap_or_else(|e| {
                tracing::warn!("Discarding unreadable history under '{}': {}", key, e);
                Vec::new()
            }),
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!("Failed to load history '{}': {}", key, e);
                Vec::new()
            }
        };
        entries.truncate(MAX_HISTORY_ITEMS);

        Self {
            key,
            storage,
            entries,
        }
    }

    /// Storage key this history persists under
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Entries, newest first
    pub fn entries(&self) -> &[T] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Prepend `entry` unless it repeats the most recent conversion
    ///
    /// Returns whether the list changed.
    pub fn record(&mut self, entry: T) -> bool {
        if let Some(latest) = self.entries.first() {
            if latest.same_conversion(&entry) {
                tracing::debug!("Skipping duplicate history entry for '{}'", self.key);
                return false;
            }
        }

        let mut updated = Vec::with_capacity(MAX_HISTORY_ITEMS);
        updated.push(entry);
        updated.extend(self.entries.iter().take(MAX_HISTORY_ITEMS - 1).cloned());
        self.entries = updated;

        if let Err(e) = self.persist() {
            tracing::error!("Failed to save history '{}': {}", self.key, e);
        }
        true
    }

    /// Drop every entry and remove the stored key
    pub fn clear(&mut self) {
        self.entries = Vec::new();
        if let Err(e) = self.storage.remove(&self.key) {
            tracing::error!("Failed to clear history '{}': {}", self.key, e);
        }
    }

    fn persist(&self) -> StoreResult<()> {
        let json = serde_json::to_string(&self.entries)?;
        self.storage.set(&self.key, &json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::entry::ConversionHistoryEntry;
    use crate::history::storage::{MemoryStore, StoreError};

    const KEY: &str = "colorConverterHistory";

    fn entry(input: &str) -> ConversionHistoryEntry {
        ConversionHistoryEntry::new(input, format!("out-{}", input), "hex", "rgb")
    }

    fn store() -> Arc<dyn KeyValueStore> {
        Arc::new(MemoryStore::new())
    }

    /// Store whose every operation fails
    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> StoreResult<Option<String>> {
            Err(StoreError::Poisoned)
        }

        fn set(&self, _key: &str, _value: &str) -> StoreResult<()> {
            Err(StoreError::Poisoned)
        }

        fn remove(&self, _key: &str) -> StoreResult<()> {
            Err(StoreError::Poisoned)
        }
    }

    #[test]
    fn test_unreadable_store_loads_empty() {
        let history: HistoryStore<ConversionHistoryEntry> = HistoryStore::load(Arc::new(BrokenStore), KEY);
        assert!(history.is_empty());
    }

    #[test]
    fn test_failed_writes_keep_in_memory_history() {
        let mut history = HistoryStore::load(Arc::new(BrokenStore), KEY);
        for i in 0..12 {
            assert!(history.record(entry(&i.to_string())));
        }
        assert_eq!(history.len(), MAX_HISTORY_ITEMS);
        assert_eq!(history.entries()[0].input_value, "11");

        assert!(!history.record(entry("11")));

        history.clear();
        assert!(history.is_empty());
    }

    #[test]
    fn test_keeps_ten_most_recent_newest_first() {
        let mut history = HistoryStore::load(store(), KEY);
        for i in 0..11 {
            assert!(history.record(entry(&i.to_string())));
        }

        assert_eq!(history.len(), MAX_HISTORY_ITEMS);
        let inputs: Vec<&str> = history.entries().iter().map(|e| e.input_value.as_str()).collect();
        assert_eq!(inputs, vec!["10", "9", "8", "7", "6", "5", "4", "3", "2", "1"]);
    }

    #[test]
    fn test_duplicate_of_latest_is_ignored() {
        let mut history = HistoryStore::load(store(), KEY);
        history.record(entry("a"));
        history.record(entry("b"));
        let before = history.entries().to_vec();

        assert!(!history.record(entry("b")));
        assert_eq!(history.entries(), before.as_slice());
    }

    #[test]
    fn test_duplicate_of_older_entry_is_recorded() {
        let mut history = HistoryStore::load(store(), KEY);
        history.record(entry("a"));
        history.record(entry("b"));
        assert!(history.record(entry("a")));
        assert_eq!(history.len(), 3);
    }

    #[test]
    fn test_persists_and_reloads() {
        let storage = store();
        let mut history = HistoryStore::load(Arc::clone(&storage), KEY);
        history.record(entry("a"));
        history.record(entry("b"));

        let reloaded: HistoryStore<ConversionHistoryEntry> = HistoryStore::load(storage, KEY);
        assert_eq!(reloaded.entries(), history.entries());
    }

    #[test]
    fn test_clear_removes_key() {
        let storage = store();
        let mut history = HistoryStore::load(Arc::clone(&storage), KEY);
        history.record(entry("a"));
        history.clear();

        assert!(history.is_empty());
        assert_eq!(storage.get(KEY).unwrap(), None);
    }

    #[test]
    fn test_corrupt_json_loads_empty() {
        let storage = store();
        storage.set(KEY, "{not json").unwrap();

        let history: HistoryStore<ConversionHistoryEntry> = HistoryStore::load(storage, KEY);
        assert!(history.is_empty());
        assert_eq!(history.key(), KEY);
    }

    #[test]
    fn test_oversized_stored_list_is_truncated() {
        let storage = store();
        let entries: Vec<ConversionHistoryEntry> = (0..15).map(|i| entry(&i.to_string())).collect();
        storage.set(KEY, &serde_json::to_string(&entries).unwrap()).unwrap();

        let history: HistoryStore<ConversionHistoryEntry> = HistoryStore::load(storage, KEY);
        assert_eq!(history.len(), MAX_HISTORY_ITEMS);
        assert_eq!(history.entries()[0].input_value, "0");
    }
}
