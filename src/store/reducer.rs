use crate::mvi::Reducer;
use crate::slices::auth::{AuthAction, AuthReducer};
use crate::slices::courses::CoursesReducer;
use crate::slices::notes::{NotesAction, NotesReducer};
use crate::slices::user::{UserAction, UserReducer};

use super::action::RootAction;
use super::state::RootState;

/// Routes each action to the slice that owns it. Session-wide actions fan
/// out to every affected slice as that slice's own action.
pub struct RootReducer;

impl Reducer for RootReducer {
    type State = RootState;
    type Action = RootAction;

    fn reduce(state: Self::State, action: Self::Action) -> Self::State {
        match action {
            RootAction::Auth(action) => RootState {
                auth: AuthReducer::reduce(state.auth, action),
                ..state
            },
            RootAction::User(action) => RootState {
                user: UserReducer::reduce(state.user, action),
                ..state
            },
            RootAction::Courses(action) => RootState {
                courses: CoursesReducer::reduce(state.courses, action),
                ..state
            },
            RootAction::Notes(action) => RootState {
                notes: NotesReducer::reduce(state.notes, action),
                ..state
            },
            RootAction::Rehydrate(rehydration) => RootState {
                auth: AuthReducer::reduce(state.auth, AuthAction::Rehydrate(rehydration.auth)),
                rehydrated: true,
                ..state
            },
            RootAction::SignedOut => end_session(state, AuthAction::SignedOut),
            RootAction::SessionExpired => end_session(state, AuthAction::SessionExpired),
        }
    }
}

fn end_session(state: RootState, auth_action: AuthAction) -> RootState {
    RootState {
        auth: AuthReducer::reduce(state.auth, auth_action),
        user: UserReducer::reduce(state.user, UserAction::Clear),
        notes: NotesReducer::reduce(state.notes, NotesAction::Clear),
        ..state
    }
}
