//! Key-value storage backends for history persistence
//!
//! History code never reaches for a global store; it is handed one of these.

use std::collections::HashMap;
use std::sync::RwLock;

use thiserror::Error;

use crate::db::{kv, Database, DbError};

/// Storage error types
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] DbError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store lock poisoned")]
    Poisoned,
}

/// Result type for storage operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Minimal string key-value store
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    fn set(&self, key: &str, value: &str) -> StoreResult<()>;

    fn remove(&self, key: &str) -> StoreResult<()>;
}

/// In-memory store for tests and ephemeral sessions
#[derive(Default)]
pub struct MemoryStore {
    data: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let data = self.data.read().map_err(|_| StoreError::Poisoned)?;
        Ok(data.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        let mut data = self.data.write().map_err(|_| StoreError::Poisoned)?;
        data.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        let mut data = self.data.write().map_err(|_| StoreError::Poisoned)?;
        data.remove(key);
        Ok(())
    }
}

impl KeyValueStore for Database {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.with_conn(|conn| kv::get(conn, key))?)
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        Ok(self.with_conn(|conn| kv::set(conn, key, value))?)
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        self.with_conn(|conn| kv::delete(conn, key))?;
        Ok(())
    }
}
