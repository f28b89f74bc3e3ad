//! Directory-backed storage: one file per key.

use std::fs::{File, OpenOptions};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use fs2::FileExt;
use tokio::io::AsyncWriteExt;

use super::backend::{StorageBackend, StorageError};

const LOCK_FILE: &str = ".lock";

/// Stores each key as `<sanitized-key>.json` under a directory.
///
/// Writes go to a temporary file that is fsynced and renamed over the
/// target, so a crash leaves either the old or the new blob. An exclusive
/// lock on `<dir>/.lock` is held for the lifetime of the value: a second
/// process opening the same directory fails instead of interleaving
/// writes.
pub struct FileStorage {
    dir: PathBuf,
    _lock: File,
}

impl FileStorage {
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir).map_err(|source| StorageError::Io {
            key: dir.display().to_string(),
            source,
        })?;

        let lock_path = dir.join(LOCK_FILE);
        let lock = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)
            .map_err(|source| StorageError::Io {
                key: lock_path.display().to_string(),
                source,
            })?;
        lock.try_lock_exclusive()
            .map_err(|source| StorageError::Locked {
                path: dir.clone(),
                source,
            })?;

        tracing::debug!(dir = %dir.display(), "opened file storage");
        Ok(Self { dir, _lock: lock })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File backing `key`. Characters outside `[A-Za-z0-9_-]` become `_`.
    pub fn path_for(&self, key: &str) -> PathBuf {
        let name: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.dir.join(format!("{}.json", name))
    }

    fn io_error(key: &str, source: std::io::Error) -> StorageError {
        StorageError::Io {
            key: key.to_string(),
            source,
        }
    }
}

#[async_trait]
impl StorageBackend for FileStorage {
    async fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        match tokio::fs::read_to_string(self.path_for(key)).await {
            Ok(blob) => Ok(Some(blob)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(Self::io_error(key, e)),
        }
    }

    async fn save(&self, key: &str, blob: &str) -> Result<(), StorageError> {
        let path = self.path_for(key);
        let tmp_path = path.with_extension("json.tmp");

        let mut tmp = tokio::fs::File::create(&tmp_path)
            .await
            .map_err(|e| Self::io_error(key, e))?;
        tmp.write_all(blob.as_bytes())
            .await
            .map_err(|e| Self::io_error(key, e))?;
        tmp.sync_all().await.map_err(|e| Self::io_error(key, e))?;
        drop(tmp);

        tokio::fs::rename(&tmp_path, &path)
            .await
            .map_err(|e| Self::io_error(key, e))
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        match tokio::fs::remove_file(self.path_for(key)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(Self::io_error(key, e)),
        }
    }
}
