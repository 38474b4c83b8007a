//! Conversion history
//!
//! Per-tool recent-conversion lists persisted to an injected key-value store,
//! with debounced writes.

pub mod debounce;
pub mod entry;
pub mod storage;
pub mod store;

pub use debounce::{DebouncedHistory, Debouncer, DEFAULT_DEBOUNCE};
pub use entry::{ConversionHistoryEntry, HistoryItem};
pub use storage::{KeyValueStore, MemoryStore, StoreError, StoreResult};
pub use store::{HistoryStore, MAX_HISTORY_ITEMS};
