use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::persist::PersistedSlice;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub persist: PersistSettings,
}

/// Remote source connection settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL every endpoint path is appended to.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Total request timeout in seconds (default: 30).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

/// Durable state settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistSettings {
    /// Slices written to storage (default: `["auth"]`).
    #[serde(default = "default_persisted_slices")]
    pub slices: Vec<PersistedSlice>,
    /// Prefix namespacing storage keys (default: `"persist:"`).
    #[serde(default = "default_key_prefix")]
    pub key_prefix: String,
    /// Delay before writing a changed state, coalescing bursts (default: 0).
    #[serde(default)]
    pub debounce_ms: u64,
    /// Storage directory. Defaults to the platform data directory.
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

fn default_base_url() -> String {
    "http://127.0.0.1:8000/api".to_string()
}

fn default_timeout() -> u32 {
    30
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_persisted_slices() -> Vec<PersistedSlice> {
    vec![PersistedSlice::Auth]
}

fn default_key_prefix() -> String {
    "persist:".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for PersistSettings {
    fn default() -> Self {
        Self {
            slices: default_persisted_slices(),
            key_prefix: default_key_prefix(),
            debounce_ms: 0,
            dir: None,
        }
    }
}
