//! Actions for the authentication session.

use crate::model::{Secret, Session};
use crate::mvi::{Action, ActionKind, Phase};

use super::state::PersistedAuth;

/// Actions that can be dispatched to the auth slice.
///
/// Login and signup carry the email address as their request argument;
/// passwords never enter the action stream.
#[derive(Debug, Clone, PartialEq)]
pub enum AuthAction {
    Login(Phase<String, Session>),

    Signup(Phase<String, Session>),

    /// Exchange the current token for a fresh one.
    Refresh(Phase<(), Secret>),

    /// Merge state restored from durable storage. `None` means nothing
    /// usable was found.
    Rehydrate(Option<PersistedAuth>),

    SignedOut,

    /// The remote source rejected the stored token.
    SessionExpired,
}

impl Action for AuthAction {
    fn kind(&self) -> ActionKind {
        match self {
            Self::Login(phase) => ActionKind::staged("auth", "login", phase.stage()),
            Self::Signup(phase) => ActionKind::staged("auth", "signup", phase.stage()),
            Self::Refresh(phase) => ActionKind::staged("auth", "refresh", phase.stage()),
            Self::Rehydrate(_) => ActionKind::new("auth", "rehydrate"),
            Self::SignedOut => ActionKind::new("auth", "signedOut"),
            Self::SessionExpired => ActionKind::new("auth", "sessionExpired"),
        }
    }
}
