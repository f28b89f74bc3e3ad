use crate::model::UserProfile;
use crate::mvi::{Action, ActionKind, Phase};

#[derive(Debug, Clone, PartialEq)]
pub enum UserAction {
    FetchProfile(Phase<(), UserProfile>),
    UpdateProfile(Phase<(), UserProfile>),
    /// Drop the profile on sign-out.
    Clear,
}

impl Action for UserAction {
    fn kind(&self) -> ActionKind {
        match self {
            Self::FetchProfile(phase) => ActionKind::staged("user", "fetchProfile", phase.stage()),
            Self::UpdateProfile(phase) => {
                ActionKind::staged("user", "updateProfile", phase.stage())
            }
            Self::Clear => ActionKind::new("user", "clear"),
        }
    }
}
