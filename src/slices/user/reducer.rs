use crate::mvi::{Phase, Reducer};

use super::action::UserAction;
use super::state::UserState;

pub struct UserReducer;

impl Reducer for UserReducer {
    type State = UserState;
    type Action = UserAction;

    fn reduce(state: Self::State, action: Self::Action) -> Self::State {
        match action {
            // Both operations answer with the authoritative profile.
            UserAction::FetchProfile(phase) | UserAction::UpdateProfile(phase) => match phase {
                Phase::Pending { .. } => UserState {
                    status: state.status.begin(),
                    ..state
                },
                Phase::Fulfilled { payload, .. } if state.status.in_flight() > 0 => UserState {
                    profile: Some(payload),
                    status: state.status.succeed(),
                },
                // Nothing outstanding: the request predates a `Clear`.
                Phase::Fulfilled { .. } => state,
                Phase::Rejected { error, .. } => UserState {
                    status: state.status.fail(&error),
                    ..state
                },
            },
            UserAction::Clear => UserState::default(),
        }
    }
}
