use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Data directory not found")]
    DataDirNotFound,

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

pub type Result<T> = std::result::Result<T, StorageError>;

/// Flat string-to-string key-value namespace, the moral equivalent of a
/// browser's local storage.
pub trait KeyValueStore: Send + Sync {
    /// Raw document stored under `key`, `None` when the key was never written
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    fn set_item(&self, key: &str, value: &str) -> Result<()>;

    fn remove_item(&self, key: &str) -> Result<()>;
}

/// Handle widgets hold on to; cloned freely between widgets
pub type SharedStore = Arc<dyn KeyValueStore>;

/// Process-local store, used by tests and for throwaway sessions
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Convenience for building a [`SharedStore`] in one call
    pub fn shared() -> SharedStore {
        Arc::new(Self::new())
    }

    pub fn len(&self) -> usize {
        self.items.lock().map(|items| items.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        let items = self
            .items
            .lock()
            .map_err(|e| StorageError::Unavailable(e.to_string()))?;
        Ok(items.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let mut items = self
            .items
            .lock()
            .map_err(|e| StorageError::Unavailable(e.to_string()))?;
        items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        let mut items = self
            .items
            .lock()
            .map_err(|e| StorageError::Unavailable(e.to_string()))?;
        items.remove(key);
        Ok(())
    }
}

/// Backend whose every call fails, e.g. storage disabled or quota exceeded
#[cfg(test)]
pub(crate) struct BrokenStore;

#[cfg(test)]
impl BrokenStore {
    pub(crate) fn shared() -> SharedStore {
        Arc::new(BrokenStore)
    }
}

#[cfg(test)]
impl KeyValueStore for BrokenStore {
    fn get_item(&self, _key: &str) -> Result<Option<String>> {
        Err(StorageError::Unavailable("disabled".into()))
    }

    fn set_item(&self, _key: &str, _value: &str) -> Result<()> {
        Err(StorageError::Unavailable("quota exceeded".into()))
    }

    fn remove_item(&self, _key: &str) -> Result<()> {
        Err(StorageError::Unavailable("disabled".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_get_set_remove() {
        let store = MemoryStore::new();
        assert!(store.get_item("missing").unwrap().is_none());

        store.set_item("k", "[1,2]").unwrap();
        assert_eq!(store.get_item("k").unwrap().as_deref(), Some("[1,2]"));
        assert_eq!(store.len(), 1);

        store.set_item("k", "{}").unwrap();
        assert_eq!(store.get_item("k").unwrap().as_deref(), Some("{}"));

        store.remove_item("k").unwrap();
        assert!(store.get_item("k").unwrap().is_none());
        assert!(store.is_empty());
    }
}
