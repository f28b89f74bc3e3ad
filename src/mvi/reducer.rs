//! Reducer trait for MVI architecture.

use super::action::Action;
use super::state::SliceState;

/// Reducer transforms state based on actions.
///
/// The reducer is the only place where state transitions happen.
/// It must be a pure function: (State, Action) -> State. It has no
/// access to the store, so it can never dispatch.
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: SliceState;

    /// The action type this reducer handles.
    type Action: Action;

    /// Process an action and return the new state.
    ///
    /// Actions that do not apply to the current state must return it
    /// unchanged.
    fn reduce(state: Self::State, action: Self::Action) -> Self::State;
}
