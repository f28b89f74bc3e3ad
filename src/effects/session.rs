//! Sign-in lifecycle and profile intents.

use crate::api::{ApiError, Credentials, RemoteApi, Registration};
use crate::model::{ProfileUpdate, Session, UserProfile, UserSummary};
use crate::mvi::Phase;
use crate::slices::auth::AuthAction;
use crate::slices::user::UserAction;
use crate::store::RootAction;
use crate::validation::{validate_credentials, validate_profile_update, validate_registration};

use super::{EffectError, Effects};

fn non_empty_token(session: Session) -> Result<Session, ApiError> {
    if session.token.is_empty() {
        return Err(ApiError::Decode("session token is empty".to_string()));
    }
    Ok(session)
}

impl<A: RemoteApi + ?Sized> Effects<A> {
    /// Sign in. On success the token is in the store; read it from there.
    pub async fn login(&self, credentials: Credentials) -> Result<UserSummary, EffectError> {
        validate_credentials(&credentials)?;
        let email = credentials.email.trim().to_string();
        let credentials = Credentials {
            email: email.clone(),
            ..credentials
        };

        self.store.dispatch(AuthAction::Login(Phase::Pending { arg: email.clone() }));
        match self.api.login(&credentials).await.and_then(non_empty_token) {
            Ok(session) => {
                let user = session.user.clone();
                tracing::info!(user_id = user.id, "signed in");
                self.store.dispatch(AuthAction::Login(Phase::Fulfilled {
                    arg: email,
                    payload: session,
                }));
                Ok(user)
            }
            Err(e) => {
                let action = AuthAction::Login(Phase::Rejected {
                    arg: email,
                    error: e.user_message(),
                });
                self.reject(action, &e, false);
                Err(e.into())
            }
        }
    }

    pub async fn signup(&self, registration: Registration) -> Result<UserSummary, EffectError> {
        validate_registration(&registration)?;
        let email = registration.email.trim().to_string();
        let registration = Registration {
            name: registration.name.trim().to_string(),
            email: email.clone(),
            ..registration
        };

        self.store.dispatch(AuthAction::Signup(Phase::Pending { arg: email.clone() }));
        match self.api.signup(&registration).await.and_then(non_empty_token) {
            Ok(session) => {
                let user = session.user.clone();
                tracing::info!(user_id = user.id, "account created");
                self.store.dispatch(AuthAction::Signup(Phase::Fulfilled {
                    arg: email,
                    payload: session,
                }));
                Ok(user)
            }
            Err(e) => {
                let action = AuthAction::Signup(Phase::Rejected {
                    arg: email,
                    error: e.user_message(),
                });
                self.reject(action, &e, false);
                Err(e.into())
            }
        }
    }

    /// Exchange the current token for a fresh one.
    pub async fn refresh_session(&self) -> Result<(), EffectError> {
        self.store.dispatch(AuthAction::Refresh(Phase::pending()));
        let result = match self.token() {
            Ok(token) => self.api.refresh(&token).await,
            Err(e) => Err(e),
        };
        match result {
            Ok(token) => {
                self.store.dispatch(AuthAction::Refresh(Phase::fulfilled(token)));
                Ok(())
            }
            Err(e) => {
                let action = AuthAction::Refresh(Phase::rejected(e.user_message()));
                self.reject(action, &e, true);
                Err(e.into())
            }
        }
    }

    /// End the session locally. Profile and notes are cleared with it.
    pub fn logout(&self) {
        tracing::info!("signed out");
        self.store.dispatch(RootAction::SignedOut);
    }

    pub async fn fetch_profile(&self) -> Result<UserProfile, EffectError> {
        self.store.dispatch(UserAction::FetchProfile(Phase::pending()));
        let result = match self.token() {
            Ok(token) => self.api.fetch_profile(&token).await,
            Err(e) => Err(e),
        };
        match result {
            Ok(profile) => {
                self.store.dispatch(UserAction::FetchProfile(Phase::fulfilled(profile.clone())));
                Ok(profile)
            }
            Err(e) => {
                let action = UserAction::FetchProfile(Phase::rejected(e.user_message()));
                self.reject(action, &e, true);
                Err(e.into())
            }
        }
    }

    pub async fn update_profile(&self, update: ProfileUpdate) -> Result<UserProfile, EffectError> {
        validate_profile_update(&update)?;

        self.store.dispatch(UserAction::UpdateProfile(Phase::pending()));
        let result = match self.token() {
            Ok(token) => self.api.update_profile(&token, &update).await,
            Err(e) => Err(e),
        };
        match result {
            Ok(profile) => {
                self.store.dispatch(UserAction::UpdateProfile(Phase::fulfilled(profile.clone())));
                Ok(profile)
            }
            Err(e) => {
                let action = UserAction::UpdateProfile(Phase::rejected(e.user_message()));
                self.reject(action, &e, true);
                Err(e.into())
            }
        }
    }
}
