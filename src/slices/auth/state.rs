//! State for the authentication session.

use serde::{Deserialize, Serialize};

use crate::model::{Secret, UserSummary};
use crate::mvi::{LoadStatus, SliceState};

/// Error shown after the remote source rejects the stored token.
pub const SESSION_EXPIRED: &str = "Session expired, please sign in again";

/// Authentication session.
///
/// Invariant: `is_authenticated` implies `token.is_some()`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub token: Option<Secret>,
    pub is_authenticated: bool,
    pub user: Option<UserSummary>,
    pub status: LoadStatus,
}

impl SliceState for AuthState {}

/// Durable projection of [`AuthState`].
///
/// Loading and error bookkeeping is never persisted so a restart can not
/// resurrect a spinner or a stale message.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedAuth {
    pub token: Option<Secret>,
    #[serde(default)]
    pub is_authenticated: bool,
    #[serde(default)]
    pub user: Option<UserSummary>,
}

impl AuthState {
    pub fn token(&self) -> Option<&str> {
        self.token.as_ref().map(Secret::expose)
    }

    pub fn is_loading(&self) -> bool {
        self.status.is_loading
    }

    pub fn error(&self) -> Option<&str> {
        self.status.error.as_deref()
    }

    /// True when a token is present and the session is marked signed-in.
    pub fn has_session(&self) -> bool {
        self.is_authenticated && self.token.is_some()
    }

    pub fn holds_invariant(&self) -> bool {
        !self.is_authenticated || self.token.is_some()
    }

    pub fn persisted(&self) -> PersistedAuth {
        PersistedAuth {
            token: self.token.clone(),
            is_authenticated: self.is_authenticated,
            user: self.user.clone(),
        }
    }

    /// Overwrite the persisted fields with `persisted`, keeping the
    /// in-memory loading/error bookkeeping. Applying the same blob twice
    /// yields the same state as applying it once.
    pub fn merge_persisted(self, persisted: PersistedAuth) -> Self {
        let token = persisted.token.filter(|t| !t.is_empty());
        let is_authenticated = persisted.is_authenticated && token.is_some();
        Self {
            token,
            is_authenticated,
            user: persisted.user,
            status: self.status,
        }
    }
}
