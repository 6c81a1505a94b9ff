//! Key-Value Storage
//!
//! Small string store injected into components that persist UI state
//! (recent searches). Values are JSON encoded by the typed helpers.

mod json_file;
mod recent;

use std::sync::Mutex;

use ahash::AHashMap;
use serde::{de::DeserializeOwned, Serialize};
use tracing::warn;

use crate::error::{Error, Result};

pub use json_file::JsonFileStore;
pub use recent::{seed_recent_searches, SAMPLE_RECENT_SEARCHES};

/// A string key-value store
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

/// In-memory store, used by tests and as a fallback when no data
/// directory is available
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<AHashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self, key: &str) -> Result<std::sync::MutexGuard<'_, AHashMap<String, String>>> {
        self.entries.lock().map_err(|_| Error::Storage {
            key: key.to_string(),
            message: "memory store lock poisoned".to_string(),
        })
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.lock(key)?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.lock(key)?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.lock(key)?.remove(key);
        Ok(())
    }
}

/// Read and decode a JSON value; missing keys yield `None`
pub fn load_json<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Result<Option<T>> {
    match store.get(key)? {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

/// Encode and write a JSON value
pub fn save_json<T: Serialize + ?Sized>(store: &dyn KeyValueStore, key: &str, value: &T) -> Result<()> {
    let raw = serde_json::to_string(value)?;
    store.set(key, &raw)
}

/// Like `load_json`, but logs failures and falls back to the default
pub fn load_json_or_default<T: DeserializeOwned + Default>(store: &dyn KeyValueStore, key: &str) -> T {
    match load_json(store, key) {
        Ok(value) => value.unwrap_or_default(),
        Err(e) => {
            warn!(key, error = %e, "Failed to read stored value, using default");
            T::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_round_trip() {
        let store = MemoryStore::new();
        assert_eq!(store.get("k").expect("get"), None);
        store.set("k", "v").expect("set");
        assert_eq!(store.get("k").expect("get").as_deref(), Some("v"));
        store.remove("k").expect("remove");
        assert_eq!(store.get("k").expect("get"), None);
    }

    #[test]
    fn test_json_helpers() {
        let store = MemoryStore::new();
        save_json(&store, "list", &vec!["a", "b"]).expect("save");
        let list: Option<Vec<String>> = load_json(&store, "list").expect("load");
        assert_eq!(list, Some(vec!["a".to_string(), "b".to_string()]));
    }

    #[test]
    fn test_corrupt_value_falls_back() {
        let store = MemoryStore::new();
        store.set("list", "not json").expect("set");
        assert!(load_json::<Vec<String>>(&store, "list").is_err());
        let list: Vec<String> = load_json_or_default(&store, "list");
        assert!(list.is_empty());
    }
}
