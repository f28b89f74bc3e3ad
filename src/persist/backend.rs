//! Key-value storage capability used by the persistence gateway.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use thiserror::Error;

/// Errors that can occur in a storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage I/O failed for '{key}': {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Storage directory '{path}' is locked by another process: {source}")]
    Locked {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// Durable string storage addressed by key.
#[async_trait]
pub trait StorageBackend: Send + Sync {
    /// Returns `None` when nothing is stored under `key`.
    async fn load(&self, key: &str) -> Result<Option<String>, StorageError>;

    async fn save(&self, key: &str, blob: &str) -> Result<(), StorageError>;

    /// Removing a missing key succeeds.
    async fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// In-memory backend for tests and throwaway sessions.
///
/// Clones share the same entries.
#[derive(Clone, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
    failing: Arc<AtomicBool>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: impl Into<String>, blob: impl Into<String>) -> Self {
        let storage = Self::new();
        storage.entries.lock().insert(key.into(), blob.into());
        storage
    }

    /// Synchronous peek at a stored value.
    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().get(key).cloned()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    /// Make every operation fail until reset.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    fn check(&self) -> Result<(), StorageError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(StorageError::Unavailable("memory storage set to fail".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl StorageBackend for MemoryStorage {
    async fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.check()?;
        Ok(self.get(key))
    }

    async fn save(&self, key: &str, blob: &str) -> Result<(), StorageError> {
        self.check()?;
        self.entries.lock().insert(key.to_string(), blob.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.check()?;
        self.entries.lock().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn memory_roundtrip() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.load("k").await.unwrap(), None);

        storage.save("k", "v").await.unwrap();
        assert_eq!(storage.load("k").await.unwrap().as_deref(), Some("v"));

        storage.remove("k").await.unwrap();
        storage.remove("k").await.unwrap();
        assert!(storage.is_empty());
    }

    #[tokio::test]
    async fn failing_storage_reports_unavailable() {
        let storage = MemoryStorage::with_entry("k", "v");
        storage.set_failing(true);
        assert!(matches!(
            storage.load("k").await,
            Err(StorageError::Unavailable(_))
        ));
        storage.set_failing(false);
        assert_eq!(storage.load("k").await.unwrap().as_deref(), Some("v"));
    }
}
