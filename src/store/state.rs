use crate::mvi::SliceState;
use crate::slices::auth::AuthState;
use crate::slices::courses::CoursesState;
use crate::slices::notes::NotesState;
use crate::slices::user::UserState;

/// The full state tree. The only object consumers read from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RootState {
    pub auth: AuthState,
    pub user: UserState,
    pub courses: CoursesState,
    pub notes: NotesState,
    /// Set once the persistence gateway finished hydrating, whether or not
    /// anything was restored.
    pub rehydrated: bool,
}

impl SliceState for RootState {}

impl RootState {
    /// True while any slice has a request in flight.
    pub fn is_busy(&self) -> bool {
        self.auth.is_loading()
            || self.user.is_loading()
            || self.courses.is_loading()
            || self.notes.is_loading()
    }
}
