//! Append-only record sequence mirrored to a key-value backend

use std::sync::{Arc, RwLock};

use serde::{de::DeserializeOwned, Serialize};

use crate::error::{NexTrackError, NexTrackResult};

use super::kv::KeyValueStore;

/// Ordered records held in memory, persisted as one JSON array under `key`
pub(crate) struct SnapshotCollection<T> {
    key: &'static str,
    backend: Arc<dyn KeyValueStore>,
    items: RwLock<Vec<T>>,
}

impl<T> SnapshotCollection<T>
where
    T: Serialize + DeserializeOwned + Clone,
{
    pub(crate) fn new(key: &'static str, backend: Arc<dyn KeyValueStore>) -> Self {
        Self {
            key,
            backend,
            items: RwLock::new(Vec::new()),
        }
    }

    pub(crate) fn key(&self) -> &'static str {
        self.key
    }

    /// Replace the in-memory sequence with what the backend holds
    pub(crate) fn load(&self) -> NexTrackResult<()> {
        let loaded: Vec<T> = match self.backend.get(self.key)? {
            Some(json) => serde_json::from_str(&json).map_err(|e| {
                NexTrackError::Storage(format!("Failed to parse {}: {}", self.key, e))
            })?,
            None => Vec::new(),
        };

        let mut items = self.items.write().map_err(|e| {
            NexTrackError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        *items = loaded;
        Ok(())
    }

    /// Append a record and persist the full snapshot
    ///
    /// The in-memory sequence only changes once the backend accepted the
    /// new snapshot.
    pub(crate) fn append(&self, item: T) -> NexTrackResult<()> {
        let mut items = self.items.write().map_err(|e| {
            NexTrackError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        let mut snapshot = items.clone();
        snapshot.push(item);

        let json = serde_json::to_string(&snapshot).map_err(|e| {
            NexTrackError::Storage(format!("Failed to serialize {}: {}", self.key, e))
        })?;
        self.backend.set(self.key, &json)?;

        *items = snapshot;
        Ok(())
    }

    /// Snapshot of all records in insertion order
    pub(crate) fn all(&self) -> NexTrackResult<Vec<T>> {
        let items = self.items.read().map_err(|e| {
            NexTrackError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;
        Ok(items.clone())
    }

    pub(crate) fn find<F>(&self, predicate: F) -> NexTrackResult<Option<T>>
    where
        F: Fn(&T) -> bool,
    {
        let items = self.items.read().map_err(|e| {
            NexTrackError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;
        Ok(items.iter().find(|item| predicate(item)).cloned())
    }

    pub(crate) fn len(&self) -> NexTrackResult<usize> {
        let items = self.items.read().map_err(|e| {
            NexTrackError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;
        Ok(items.len())
    }

    /// Drop every record and remove the key from the backend
    pub(crate) fn clear(&self) -> NexTrackResult<()> {
        let mut items = self.items.write().map_err(|e| {
            NexTrackError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        items.clear();
        self.backend.remove(self.key)
    }
}
