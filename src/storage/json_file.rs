//! JsonFileStore - Key-value storage backed by one JSON object file

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde_json::{Map, Value};
use tracing::{error, info};

use super::KeyValueStore;
use crate::error::{Error, Result};
use crate::helpers::get_or_create_data_dir;

/// File name used under the data directory
pub const STORAGE_FILE_NAME: &str = "storage.json";

/// Stores every key as a string field of a single JSON object.
///
/// The file is read once on open and rewritten on every change.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: Mutex<Map<String, Value>>,
}

impl JsonFileStore {
    /// Open the store in the gallery's data directory
    pub fn open_default() -> Result<Self> {
        let path = get_or_create_data_dir()?.join(STORAGE_FILE_NAME);
        Self::open(path)
    }

    /// Open a store at `path`. A missing or empty file starts empty.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let entries = if path.exists() {
            let content = fs::read_to_string(&path)?;
            if content.trim().is_empty() {
                Map::new()
            } else {
                serde_json::from_str(&content).map_err(|e| {
                    error!(error = %e, path = ?path, "Failed to parse storage file");
                    e
                })?
            }
        } else {
            Map::new()
        };
        info!(path = ?path, keys = entries.len(), "Opened storage file");
        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn update(&self, key: &str, apply: impl FnOnce(&mut Map<String, Value>)) -> Result<()> {
        let mut entries = self.entries.lock().map_err(|_| Error::Storage {
            key: key.to_string(),
            message: "storage lock poisoned".to_string(),
        })?;
        let mut next = entries.clone();
        apply(&mut next);
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(&next)?;
        fs::write(&self.path, content)?;
        *entries = next;
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let entries = self.entries.lock().map_err(|_| Error::Storage {
            key: key.to_string(),
            message: "storage lock poisoned".to_string(),
        })?;
        Ok(entries.get(key).and_then(Value::as_str).map(str::to_string))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.update(key, |entries| {
            entries.insert(key.to_string(), Value::String(value.to_string()));
        })
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.update(key, |entries| {
            entries.remove(key);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values_persist_across_open() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(STORAGE_FILE_NAME);

        let store = JsonFileStore::open(&path).expect("open");
        store.set("theme", "dark").expect("set");
        store.set("gone", "x").expect("set");
        store.remove("gone").expect("remove");

        let reopened = JsonFileStore::open(&path).expect("reopen");
        assert_eq!(reopened.get("theme").expect("get").as_deref(), Some("dark"));
        assert_eq!(reopened.get("gone").expect("get"), None);
    }

    #[test]
    fn test_failed_write_keeps_previous_value() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(STORAGE_FILE_NAME);

        let store = JsonFileStore::open(&path).expect("open");
        store.set("theme", "dark").expect("set");

        fs::remove_file(&path).expect("remove file");
        fs::create_dir(&path).expect("block path with a directory");

        assert!(store.set("theme", "light").is_err());
        assert_eq!(store.get("theme").expect("get").as_deref(), Some("dark"));
        assert!(store.remove("theme").is_err());
        assert_eq!(store.get("theme").expect("get").as_deref(), Some("dark"));
    }

    #[test]
    fn test_empty_file_starts_empty() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(STORAGE_FILE_NAME);
        fs::write(&path, "  ").expect("write");

        let store = JsonFileStore::open(&path).expect("open");
        assert_eq!(store.get("anything").expect("get"), None);
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(STORAGE_FILE_NAME);
        fs::write(&path, "{not json").expect("write");

        assert!(matches!(JsonFileStore::open(&path), Err(Error::Json { .. })));
    }
}
