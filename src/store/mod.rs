//! Root store composing the four slices into one state tree.
//!
//! All mutation flows through [`Store::dispatch`]; consumers read
//! immutable snapshots via [`Store::state`] and observe changes through
//! [`Store::subscribe`].

mod action;
mod dispatch;
mod reducer;
mod state;

pub use action::{Rehydration, RootAction};
pub use dispatch::{Store, Subscription};
pub use reducer::RootReducer;
pub use state::RootState;
