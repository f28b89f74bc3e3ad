//! The four independently reducible partitions of the state tree.
//!
//! Each slice follows the same layout:
//! - `state.rs` - slice state
//! - `action.rs` - actions the slice understands
//! - `reducer.rs` - state transitions
//!
//! No reducer reads another slice's state.

pub mod auth;
pub mod courses;
pub mod notes;
pub mod user;
