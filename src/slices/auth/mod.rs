//! Authentication session slice.

mod action;
mod reducer;
mod state;

pub use action::AuthAction;
pub use reducer::AuthReducer;
pub use state::{AuthState, PersistedAuth, SESSION_EXPIRED};
