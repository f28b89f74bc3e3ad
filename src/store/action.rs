use crate::mvi::{Action, ActionKind};
use crate::slices::auth::{AuthAction, PersistedAuth};
use crate::slices::courses::CoursesAction;
use crate::slices::notes::NotesAction;
use crate::slices::user::UserAction;

/// Slices restored by the persistence gateway. `None` marks a slice that
/// was not configured, absent, or discarded as unreadable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Rehydration {
    pub auth: Option<PersistedAuth>,
}

/// Every action the store accepts.
#[derive(Debug, Clone, PartialEq)]
pub enum RootAction {
    Auth(AuthAction),
    User(UserAction),
    Courses(CoursesAction),
    Notes(NotesAction),

    /// Merge restored state and mark the store rehydrated.
    Rehydrate(Rehydration),

    /// End the session: clears auth, profile and notes. The public catalog
    /// is kept.
    SignedOut,

    /// Like [`RootAction::SignedOut`], with an expiry message on the auth
    /// slice.
    SessionExpired,
}

impl Action for RootAction {
    fn kind(&self) -> ActionKind {
        match self {
            Self::Auth(action) => action.kind(),
            Self::User(action) => action.kind(),
            Self::Courses(action) => action.kind(),
            Self::Notes(action) => action.kind(),
            Self::Rehydrate(_) => ActionKind::new("persist", "rehydrate"),
            Self::SignedOut => ActionKind::new("root", "signedOut"),
            Self::SessionExpired => ActionKind::new("root", "sessionExpired"),
        }
    }
}

impl From<AuthAction> for RootAction {
    fn from(action: AuthAction) -> Self {
        Self::Auth(action)
    }
}

impl From<UserAction> for RootAction {
    fn from(action: UserAction) -> Self {
        Self::User(action)
    }
}

impl From<CoursesAction> for RootAction {
    fn from(action: CoursesAction) -> Self {
        Self::Courses(action)
    }
}

impl From<NotesAction> for RootAction {
    fn from(action: NotesAction) -> Self {
        Self::Notes(action)
    }
}
