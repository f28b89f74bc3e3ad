use crate::model::UserProfile;
use crate::mvi::{LoadStatus, SliceState};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserState {
    pub profile: Option<UserProfile>,
    pub status: LoadStatus,
}

impl SliceState for UserState {}

impl UserState {
    pub fn is_loading(&self) -> bool {
        self.status.is_loading
    }

    pub fn error(&self) -> Option<&str> {
        self.status.error.as_deref()
    }
}
