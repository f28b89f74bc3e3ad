use crate::model::Note;
use crate::mvi::{Phase, Reducer};

use super::action::NotesAction;
use super::state::{NotesState, PendingNote, PendingOp};

pub struct NotesReducer;

impl Reducer for NotesReducer {
    type State = NotesState;
    type Action = NotesAction;

    fn reduce(state: Self::State, action: Self::Action) -> Self::State {
        match action {
            NotesAction::List(phase) => match phase {
                Phase::Pending { .. } => NotesState {
                    status: state.status.begin(),
                    ..state
                },
                Phase::Fulfilled { payload, .. } if state.status.in_flight() > 0 => NotesState {
                    notes: payload,
                    status: state.status.succeed(),
                    ..state
                },
                // Nothing outstanding: the listing predates a `Clear`.
                Phase::Fulfilled { .. } => state,
                Phase::Rejected { error, .. } => NotesState {
                    status: state.status.fail(&error),
                    ..state
                },
            },

            NotesAction::Create(phase) | NotesAction::Update(phase) => {
                reduce_mutation(state, phase, |notes, _, note| upsert(notes, note))
            }

            NotesAction::Delete(phase) => reduce_mutation(state, phase, |notes, op, ()| {
                if let PendingOp::Delete { id } = op {
                    notes.retain(|n| n.id != *id);
                }
            }),

            NotesAction::Clear => NotesState::default(),
        }
    }
}

/// Shared lifecycle of optimistic mutations.
///
/// `confirm` runs only when the speculative record is still present, so a
/// confirmation arriving after the record was dropped (sign-out, or a
/// duplicate response) leaves the authoritative list alone.
fn reduce_mutation<P>(
    state: NotesState,
    phase: Phase<PendingNote, P>,
    confirm: impl FnOnce(&mut Vec<Note>, &PendingOp, P),
) -> NotesState {
    let NotesState {
        mut notes,
        mut pending,
        status,
    } = state;

    match phase {
        Phase::Pending { arg } => {
            if !pending.iter().any(|p| p.local_id == arg.local_id) {
                pending.push(arg);
            }
            NotesState {
                notes,
                pending,
                status: status.begin(),
            }
        }
        Phase::Fulfilled { arg, payload } => {
            let before = pending.len();
            pending.retain(|p| p.local_id != arg.local_id);
            if pending.len() < before {
                confirm(&mut notes, &arg.op, payload);
            }
            NotesState {
                notes,
                pending,
                status: status.succeed(),
            }
        }
        Phase::Rejected { arg, error } => {
            pending.retain(|p| p.local_id != arg.local_id);
            NotesState {
                notes,
                pending,
                status: status.fail(&error),
            }
        }
    }
}

fn upsert(notes: &mut Vec<Note>, note: Note) {
    match notes.iter_mut().find(|n| n.id == note.id) {
        Some(existing) => *existing = note,
        None => notes.push(note),
    }
}
