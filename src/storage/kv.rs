//! Key-value persistence backends
//!
//! Stores hold their records in memory and hand a full JSON snapshot to a
//! `KeyValueStore` after every mutation. The file backend keeps one
//! `<key>.json` file per key.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::{NexTrackError, NexTrackResult};

use super::file_io::write_atomic;

/// String values stored under string keys
pub trait KeyValueStore: Send + Sync {
    /// Read the value under `key`, `None` if never written or removed
    fn get(&self, key: &str) -> NexTrackResult<Option<String>>;

    /// Replace the value under `key`
    fn set(&self, key: &str, value: &str) -> NexTrackResult<()>;

    /// Remove `key`; removing a missing key is not an error
    fn remove(&self, key: &str) -> NexTrackResult<()>;
}

/// File-per-key backend rooted at a directory
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Path of the file backing `key`
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> NexTrackResult<Option<String>> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(NexTrackError::Storage(format!(
                "Failed to read {}: {}",
                path.display(),
                e
            ))),
        }
    }

    fn set(&self, key: &str, value: &str) -> NexTrackResult<()> {
        write_atomic(self.path_for(key), value.as_bytes())
    }

    fn remove(&self, key: &str) -> NexTrackResult<()> {
        let path = self.path_for(key);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(NexTrackError::Storage(format!(
                "Failed to remove {}: {}",
                path.display(),
                e
            ))),
        }
    }
}

/// In-memory backend
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> NexTrackResult<Option<String>> {
        let entries = self.entries.read().map_err(|e| {
            NexTrackError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> NexTrackResult<()> {
        let mut entries = self.entries.write().map_err(|e| {
            NexTrackError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> NexTrackResult<()> {
        let mut entries = self.entries.write().map_err(|e| {
            NexTrackError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn exercise(store: &dyn KeyValueStore) {
        assert_eq!(store.get("missing").unwrap(), None);

        store.set("k", "[1]").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("[1]"));

        store.set("k", "[1,2]").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("[1,2]"));

        store.remove("k").unwrap();
        assert_eq!(store.get("k").unwrap(), None);

        // Removing again is fine
        store.remove("k").unwrap();
    }

    #[test]
    fn test_memory_store() {
        exercise(&MemoryStore::new());
    }

    #[test]
    fn test_file_store() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path().join("data"));
        exercise(&store);
    }

    #[test]
    fn test_file_store_layout() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path().to_path_buf());

        store.set("nextrack-budgets", "[]").unwrap();
        assert!(temp_dir.path().join("nextrack-budgets.json").exists());
    }
}
