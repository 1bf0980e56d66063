//! Key-value persistence
//!
//! The game only ever persists small scalar/JSON values under fixed keys, so
//! storage is abstracted as a string key-value store:
//! - `LocalStorage` backs it in the browser
//! - `MemoryStore` backs it natively and in tests

use std::collections::HashMap;

use thiserror::Error;

#[cfg(target_arch = "wasm32")]
mod local_storage;

#[cfg(target_arch = "wasm32")]
pub use local_storage::LocalStorage;

/// Errors raised by a storage backend
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// Backend is not available (private browsing, no window, ...)
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    /// Backend rejected a read
    #[error("failed to read '{key}': {reason}")]
    Read { key: String, reason: String },
    /// Backend rejected a write (quota exceeded, ...)
    #[error("failed to write '{key}': {reason}")]
    Write { key: String, reason: String },
}

/// Durable string key-value store
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-process store, lost on exit
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with a single entry
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.values.insert(key.to_string(), value.to_string());
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}
