//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod fake_api;
pub mod mock_api;

use std::path::PathBuf;

use serde_json::{json, Value};
use skillpath::model::{Secret, Session, UserSummary};
use skillpath::mvi::Phase;
use skillpath::slices::auth::AuthAction;
use skillpath::store::{Rehydration, RootAction, Store};
use tempfile::TempDir;

pub const TOKEN: &str = "abc";

pub fn user_json() -> Value {
    json!({"id": 1, "name": "Ada", "email": "ada@example.com"})
}

pub fn session_json(token: &str) -> Value {
    json!({"token": token, "user": user_json()})
}

pub fn note_json(id: u64, title: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "content": format!("{} body", title),
        "created_at": "2024-03-01T10:00:00Z",
        "updated_at": "2024-03-01T10:00:00Z",
    })
}

pub fn session(token: &str) -> Session {
    Session {
        token: Secret::new(token),
        user: UserSummary {
            id: 1,
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
        },
    }
}

/// A rehydrated store holding a signed-in session with `token`.
pub fn signed_in_store(token: &str) -> Store {
    let store = Store::new();
    store.dispatch(RootAction::Rehydrate(Rehydration::default()));
    store.dispatch(AuthAction::Login(Phase::Pending {
        arg: "ada@example.com".to_string(),
    }));
    store.dispatch(AuthAction::Login(Phase::Fulfilled {
        arg: "ada@example.com".to_string(),
        payload: session(token),
    }));
    store
}

/// Write `content` to a config file inside a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}
