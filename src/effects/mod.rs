//! Bridges user intents to remote calls.
//!
//! Every intent follows the same sequence: validate the input, dispatch
//! `pending`, call the remote source, then dispatch `fulfilled` with the
//! response or `rejected` with [`ApiError::user_message`]. Tokens are read
//! from the store at call time, never cached here.
//!
//! Superseded requests are not cancelled; whichever response arrives last
//! wins, and the slice's in-flight count keeps `is_loading` consistent.

mod catalog;
mod notes;
mod session;

use std::sync::Arc;

use thiserror::Error;

use crate::api::{ApiError, RemoteApi};
use crate::model::Secret;
use crate::mvi::Action;
use crate::store::{RootAction, Store};
use crate::validation::ValidationError;

/// Why an intent did not complete.
#[derive(Debug, Error)]
pub enum EffectError {
    /// Rejected before anything was dispatched.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The remote call failed; the slice already carries the message.
    #[error(transparent)]
    Request(#[from] ApiError),
}

/// Intent handlers bound to one store and one remote source.
pub struct Effects<A: RemoteApi + ?Sized> {
    store: Store,
    api: Arc<A>,
}

impl<A: RemoteApi + ?Sized> Clone for Effects<A> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            api: Arc::clone(&self.api),
        }
    }
}

impl<A: RemoteApi + ?Sized> Effects<A> {
    pub fn new(store: Store, api: Arc<A>) -> Self {
        Self { store, api }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Token of the current session.
    fn token(&self) -> Result<Secret, ApiError> {
        self.store
            .state()
            .auth
            .token
            .clone()
            .ok_or(ApiError::NotSignedIn)
    }

    /// Settle a failed request.
    ///
    /// A 401 on a call made with the session token ends the session.
    fn reject(&self, action: impl Into<RootAction>, error: &ApiError, authorized: bool) {
        let action = action.into();
        tracing::warn!(action = %action.kind(), error = %error, "request failed");
        self.store.dispatch(action);
        if authorized && error.is_unauthorized() {
            tracing::info!("session token rejected, signing out");
            self.store.dispatch(RootAction::SessionExpired);
        }
    }
}
