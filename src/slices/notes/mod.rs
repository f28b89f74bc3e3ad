//! Personal notes with optimistic create/update/delete.
//!
//! The authoritative list (`NotesState::notes`) only changes when the
//! remote source confirms an operation. Speculative changes live beside
//! it as [`PendingNote`] records keyed by a client-side [`LocalId`] and are
//! merged into the view by [`NotesState::visible`].
//!
//! [`LocalId`]: crate::model::LocalId

mod action;
mod reducer;
mod state;

pub use action::NotesAction;
pub use reducer::NotesReducer;
pub use state::{NoteEntry, NotesState, PendingNote, PendingOp};
