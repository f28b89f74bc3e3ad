use crate::model::Note;
use crate::mvi::{Action, ActionKind, Phase};

use super::state::PendingNote;

/// Actions for the notes slice.
///
/// Mutations carry the speculative change as their argument so every
/// phase can be reconciled with it by `local_id`.
#[derive(Debug, Clone, PartialEq)]
pub enum NotesAction {
    List(Phase<(), Vec<Note>>),
    Create(Phase<PendingNote, Note>),
    Update(Phase<PendingNote, Note>),
    Delete(Phase<PendingNote, ()>),
    /// Drop all notes on sign-out.
    Clear,
}

impl Action for NotesAction {
    fn kind(&self) -> ActionKind {
        match self {
            Self::List(phase) => ActionKind::staged("notes", "list", phase.stage()),
            Self::Create(phase) => ActionKind::staged("notes", "create", phase.stage()),
            Self::Update(phase) => ActionKind::staged("notes", "update", phase.stage()),
            Self::Delete(phase) => ActionKind::staged("notes", "delete", phase.stage()),
            Self::Clear => ActionKind::new("notes", "clear"),
        }
    }
}
