//! Note intents. Create, update and delete are optimistic: the pending
//! phase carries a [`PendingNote`] that stays visible until the remote
//! source answers, and is dropped without touching the confirmed list if
//! it fails.

use crate::api::{ApiError, RemoteApi};
use crate::model::{Note, NoteDraft, NoteId};
use crate::mvi::Phase;
use crate::slices::notes::{NotesAction, PendingNote};
use crate::validation::validate_note_draft;

use super::{EffectError, Effects};

impl<A: RemoteApi + ?Sized> Effects<A> {
    pub async fn list_notes(&self) -> Result<Vec<Note>, EffectError> {
        self.store.dispatch(NotesAction::List(Phase::pending()));
        let result = match self.token() {
            Ok(token) => self.api.list_notes(&token).await,
            Err(e) => Err(e),
        };
        match result {
            Ok(notes) => {
                self.store.dispatch(NotesAction::List(Phase::fulfilled(notes.clone())));
                Ok(notes)
            }
            Err(e) => {
                let action = NotesAction::List(Phase::rejected(e.user_message()));
                self.reject(action, &e, true);
                Err(e.into())
            }
        }
    }

    pub async fn create_note(&self, draft: NoteDraft) -> Result<Note, EffectError> {
        validate_note_draft(&draft)?;
        let pending = PendingNote::create(draft.clone());
        tracing::debug!(local_id = %pending.local_id, "creating note");

        self.store.dispatch(NotesAction::Create(Phase::Pending {
            arg: pending.clone(),
        }));
        let result = match self.token() {
            Ok(token) => self.api.create_note(&token, &draft).await,
            Err(e) => Err(e),
        };
        match result {
            Ok(note) => {
                self.store.dispatch(NotesAction::Create(Phase::Fulfilled {
                    arg: pending,
                    payload: note.clone(),
                }));
                Ok(note)
            }
            Err(e) => {
                let action = NotesAction::Create(Phase::Rejected {
                    arg: pending,
                    error: e.user_message(),
                });
                self.reject(action, &e, true);
                Err(e.into())
            }
        }
    }

    pub async fn update_note(&self, id: NoteId, draft: NoteDraft) -> Result<Note, EffectError> {
        validate_note_draft(&draft)?;
        let pending = PendingNote::update(id, draft.clone());

        self.store.dispatch(NotesAction::Update(Phase::Pending {
            arg: pending.clone(),
        }));
        let result = match self.token() {
            Ok(token) => self.api.update_note(&token, id, &draft).await,
            Err(e) => Err(e),
        };
        match result {
            Ok(note) => {
                self.store.dispatch(NotesAction::Update(Phase::Fulfilled {
                    arg: pending,
                    payload: note.clone(),
                }));
                Ok(note)
            }
            Err(e) => {
                let action = NotesAction::Update(Phase::Rejected {
                    arg: pending,
                    error: e.user_message(),
                });
                self.reject(action, &e, true);
                Err(e.into())
            }
        }
    }

    pub async fn delete_note(&self, id: NoteId) -> Result<(), EffectError> {
        let pending = PendingNote::delete(id);

        self.store.dispatch(NotesAction::Delete(Phase::Pending {
            arg: pending.clone(),
        }));
        let result: Result<(), ApiError> = match self.token() {
            Ok(token) => self.api.delete_note(&token, id).await,
            Err(e) => Err(e),
        };
        match result {
            Ok(()) => {
                self.store.dispatch(NotesAction::Delete(Phase::Fulfilled {
                    arg: pending,
                    payload: (),
                }));
                Ok(())
            }
            Err(e) => {
                let action = NotesAction::Delete(Phase::Rejected {
                    arg: pending,
                    error: e.user_message(),
                });
                self.reject(action, &e, true);
                Err(e.into())
            }
        }
    }
}
