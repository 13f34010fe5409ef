use std::fmt;
use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::kv::SharedStore;

/// A single JSON document of type `T` bound to one storage key.
///
/// Reads never fail: a missing key, a backend error or a document that does
/// not decode as `T` all come back as `None`. Writes never fail either; a
/// rejected write is logged and dropped, the caller's in-memory value stays
/// authoritative.
pub struct Persisted<T> {
    store: SharedStore,
    key: &'static str,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Clone for Persisted<T> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            key: self.key,
            _marker: PhantomData,
        }
    }
}

impl<T> fmt::Debug for Persisted<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Persisted").field("key", &self.key).finish()
    }
}

impl<T> Persisted<T>
where
    T: Serialize + DeserializeOwned,
{
    pub fn new(store: SharedStore, key: &'static str) -> Self {
        Self {
            store,
            key,
            _marker: PhantomData,
        }
    }

    pub fn key(&self) -> &'static str {
        self.key
    }

    pub fn load(&self) -> Option<T> {
        let raw = match self.store.get_item(self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                log::warn!("Failed to read '{}', using defaults: {}", self.key, e);
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                log::warn!("Ignoring malformed document under '{}': {}", self.key, e);
                None
            }
        }
    }

    pub fn load_or_default(&self) -> T
    where
        T: Default,
    {
        self.load().unwrap_or_default()
    }

    pub fn load_or_else(&self, default: impl FnOnce() -> T) -> T {
        self.load().unwrap_or_else(default)
    }

    pub fn save(&self, value: &T) {
        let json = match serde_json::to_string_pretty(value) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Failed to serialize '{}', write dropped: {}", self.key, e);
                return;
            }
        };

        match self.store.set_item(self.key, &json) {
            Ok(()) => log::debug!("Saved '{}' ({} bytes)", self.key, json.len()),
            Err(e) => log::warn!("Failed to write '{}', write dropped: {}", self.key, e),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use serde::Deserialize;

    use super::*;
    use crate::store::{BrokenStore, KeyValueStore, MemoryStore};

    #[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct Sample {
        name: String,
        tags: Vec<String>,
        counts: BTreeMap<String, u32>,
        is_open: bool,
    }

    #[test]
    fn test_round_trip() {
        let store = MemoryStore::shared();
        let record: Persisted<Sample> = Persisted::new(store, "sample_v1");

        let mut counts = BTreeMap::new();
        counts.insert("a".to_string(), 3);
        let value = Sample {
            name: "Biology".to_string(),
            tags: vec!["cells".to_string(), "exam".to_string()],
            counts,
            is_open: true,
        };

        record.save(&value);
        assert_eq!(record.load(), Some(value));
    }

    #[test]
    fn test_missing_key_is_absent() {
        let record: Persisted<Sample> = Persisted::new(MemoryStore::shared(), "sample_v1");
        assert_eq!(record.load(), None);
        assert_eq!(record.load_or_default(), Sample::default());
    }

    #[test]
    fn test_malformed_content_falls_back() {
        let store = MemoryStore::shared();
        store.set_item("sample_v1", "not json {").unwrap();
        let record: Persisted<Sample> = Persisted::new(store.clone(), "sample_v1");
        assert_eq!(record.load(), None);

        // Valid JSON, wrong shape
        store.set_item("sample_v1", "[1, 2, 3]").unwrap();
        assert_eq!(record.load(), None);
        let fallback = record.load_or_else(|| Sample {
            name: "fallback".to_string(),
            ..Default::default()
        });
        assert_eq!(fallback.name, "fallback");
    }

    #[test]
    fn test_broken_backend_never_raises() {
        let store = BrokenStore::shared();
        let record: Persisted<Sample> = Persisted::new(store, "sample_v1");

        record.save(&Sample::default());
        assert_eq!(record.load(), None);
    }

    #[test]
    fn test_documents_are_camel_case() {
        let store = MemoryStore::shared();
        let record: Persisted<Sample> = Persisted::new(store.clone(), "sample_v1");
        record.save(&Sample {
            is_open: true,
            ..Default::default()
        });

        let raw = store.get_item("sample_v1").unwrap().unwrap();
        assert!(raw.contains("\"isOpen\": true"));
    }
}
