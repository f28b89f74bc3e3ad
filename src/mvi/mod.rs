//! Model-View-Intent primitives shared by every state slice.
//!
//! # Architecture
//!
//! ```text
//! Effect ──→ Action ──→ Reducer ──→ State ──→ Subscribers
//!    ↑                                           │
//!    └───────────────────────────────────────────┘
//! ```
//!
//! - **State**: immutable slice snapshot
//! - **Action**: a state transition request, usually one phase of an
//!   asynchronous operation
//! - **Reducer**: pure function `(State, Action) -> State`

mod action;
mod phase;
mod reducer;
mod state;

pub use action::{Action, ActionKind, Stage};
pub use phase::{LoadStatus, Phase};
pub use reducer::Reducer;
pub use state::SliceState;
