use crate::model::{LocalId, Note, NoteDraft, NoteId};
use crate::mvi::{LoadStatus, SliceState};

/// A speculative change awaiting confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingOp {
    Create(NoteDraft),
    Update { id: NoteId, draft: NoteDraft },
    Delete { id: NoteId },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingNote {
    pub local_id: LocalId,
    pub op: PendingOp,
}

impl PendingNote {
    pub fn create(draft: NoteDraft) -> Self {
        Self {
            local_id: LocalId::generate(),
            op: PendingOp::Create(draft),
        }
    }

    pub fn update(id: NoteId, draft: NoteDraft) -> Self {
        Self {
            local_id: LocalId::generate(),
            op: PendingOp::Update { id, draft },
        }
    }

    pub fn delete(id: NoteId) -> Self {
        Self {
            local_id: LocalId::generate(),
            op: PendingOp::Delete { id },
        }
    }

    /// Remote id the change targets, `None` for creations.
    pub fn target(&self) -> Option<NoteId> {
        match &self.op {
            PendingOp::Create(_) => None,
            PendingOp::Update { id, .. } | PendingOp::Delete { id } => Some(*id),
        }
    }
}

/// One row of the merged view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteEntry<'a> {
    Confirmed(&'a Note),
    Pending {
        local_id: LocalId,
        /// Remote id when the entry edits an existing note.
        id: Option<NoteId>,
        draft: &'a NoteDraft,
    },
}

impl NoteEntry<'_> {
    pub fn title(&self) -> &str {
        match self {
            Self::Confirmed(note) => &note.title,
            Self::Pending { draft, .. } => &draft.title,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending { .. })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NotesState {
    /// Authoritative list, in remote order.
    pub notes: Vec<Note>,
    /// Speculative changes, in dispatch order.
    pub pending: Vec<PendingNote>,
    pub status: LoadStatus,
}

impl SliceState for NotesState {}

impl NotesState {
    pub fn is_loading(&self) -> bool {
        self.status.is_loading
    }

    pub fn error(&self) -> Option<&str> {
        self.status.error.as_deref()
    }

    pub fn get(&self, id: NoteId) -> Option<&Note> {
        self.notes.iter().find(|n| n.id == id)
    }

    /// Authoritative notes overlaid with speculative changes.
    ///
    /// Pending deletions hide their note, the latest pending update of a
    /// note replaces it in place, and pending creations follow the
    /// confirmed notes.
    pub fn visible(&self) -> Vec<NoteEntry<'_>> {
        let mut entries = Vec::with_capacity(self.notes.len() + self.pending.len());

        for note in &self.notes {
            let overlay = self
                .pending
                .iter()
                .rev()
                .find(|p| p.target() == Some(note.id));
            match overlay {
                Some(PendingNote {
                    op: PendingOp::Delete { .. },
                    ..
                }) => {}
                Some(PendingNote {
                    local_id,
                    op: PendingOp::Update { id, draft },
                }) => entries.push(NoteEntry::Pending {
                    local_id: *local_id,
                    id: Some(*id),
                    draft,
                }),
                _ => entries.push(NoteEntry::Confirmed(note)),
            }
        }

        for pending in &self.pending {
            if let PendingOp::Create(draft) = &pending.op {
                entries.push(NoteEntry::Pending {
                    local_id: pending.local_id,
                    id: None,
                    draft,
                });
            }
        }

        entries
    }
}
