//! Durable state: storage backends and the persistence gateway.
//!
//! Only the slices named in [`PersistConfig::slices`] are written, under
//! keys namespaced by [`PersistConfig::key_prefix`].

mod backend;
mod file;
mod gateway;

use std::collections::BTreeSet;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::PersistSettings;
use crate::store::RootState;

pub use backend::{MemoryStorage, StorageBackend, StorageError};
pub use file::FileStorage;
pub use gateway::{hydrate, HydrationReport, PersistenceGateway};

/// Slices that can be persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PersistedSlice {
    Auth,
}

impl PersistedSlice {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Auth => "auth",
        }
    }

    /// Serialize this slice's durable projection of `state`.
    pub fn project(&self, state: &RootState) -> serde_json::Result<String> {
        match self {
            Self::Auth => serde_json::to_string(&state.auth.persisted()),
        }
    }
}

/// Which slices are persisted and how.
#[derive(Debug, Clone, PartialEq)]
pub struct PersistConfig {
    pub slices: BTreeSet<PersistedSlice>,
    pub key_prefix: String,
    /// Delay before a changed state is written; zero writes immediately.
    pub debounce: Duration,
}

impl Default for PersistConfig {
    fn default() -> Self {
        Self::from(&PersistSettings::default())
    }
}

impl From<&PersistSettings> for PersistConfig {
    fn from(settings: &PersistSettings) -> Self {
        Self {
            slices: settings.slices.iter().copied().collect(),
            key_prefix: settings.key_prefix.clone(),
            debounce: Duration::from_millis(settings.debounce_ms),
        }
    }
}

impl PersistConfig {
    pub fn key(&self, slice: PersistedSlice) -> String {
        format!("{}{}", self.key_prefix, slice.as_str())
    }
}
