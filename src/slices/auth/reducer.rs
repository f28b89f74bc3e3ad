//! Reducer for the authentication session.

use crate::model::Session;
use crate::mvi::{LoadStatus, Phase, Reducer};

use super::action::AuthAction;
use super::state::{AuthState, SESSION_EXPIRED};

const EMPTY_TOKEN: &str = "Server returned an empty session token";

/// Reducer for auth slice state transitions.
pub struct AuthReducer;

impl Reducer for AuthReducer {
    type State = AuthState;
    type Action = AuthAction;

    fn reduce(state: Self::State, action: Self::Action) -> Self::State {
        let next = match action {
            AuthAction::Login(phase) | AuthAction::Signup(phase) => reduce_session(state, phase),

            AuthAction::Refresh(phase) => match phase {
                Phase::Pending { .. } => AuthState {
                    status: state.status.begin(),
                    ..state
                },
                Phase::Fulfilled { payload, .. } => {
                    // A refresh that lands after sign-out must not revive the session.
                    let token = if state.is_authenticated && !payload.is_empty() {
                        Some(payload)
                    } else {
                        state.token
                    };
                    AuthState {
                        token,
                        status: state.status.succeed(),
                        ..state
                    }
                }
                Phase::Rejected { error, .. } => AuthState {
                    status: state.status.fail(&error),
                    ..state
                },
            },

            AuthAction::Rehydrate(Some(persisted)) => state.merge_persisted(persisted),
            AuthAction::Rehydrate(None) => state,

            AuthAction::SignedOut => AuthState::default(),

            AuthAction::SessionExpired => AuthState {
                status: LoadStatus::default().fail(SESSION_EXPIRED),
                ..AuthState::default()
            },
        };
        debug_assert!(next.holds_invariant());
        next
    }
}

fn reduce_session(state: AuthState, phase: Phase<String, Session>) -> AuthState {
    match phase {
        Phase::Pending { .. } => AuthState {
            status: state.status.begin(),
            ..state
        },
        Phase::Fulfilled { payload, .. } if payload.token.is_empty() => AuthState {
            status: state.status.fail(EMPTY_TOKEN),
            ..state
        },
        Phase::Fulfilled { payload, .. } => AuthState {
            token: Some(payload.token),
            is_authenticated: true,
            user: Some(payload.user),
            status: state.status.succeed(),
        },
        Phase::Rejected { error, .. } => AuthState {
            status: state.status.fail(&error),
            ..state
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Secret, UserSummary};
    use crate::slices::auth::PersistedAuth;

    fn session(token: &str) -> Session {
        Session {
            token: Secret::new(token),
            user: UserSummary {
                id: 1,
                name: "Ada".to_string(),
                email: "ada@example.com".to_string(),
            },
        }
    }

    fn login(phase: Phase<String, Session>) -> AuthAction {
        AuthAction::Login(phase)
    }

    fn pending() -> AuthAction {
        login(Phase::Pending {
            arg: "ada@example.com".to_string(),
        })
    }

    fn fulfilled(token: &str) -> AuthAction {
        login(Phase::Fulfilled {
            arg: "ada@example.com".to_string(),
            payload: session(token),
        })
    }

    fn rejected(error: &str) -> AuthAction {
        login(Phase::Rejected {
            arg: "ada@example.com".to_string(),
            error: error.to_string(),
        })
    }

    fn signed_in() -> AuthState {
        let state = AuthReducer::reduce(AuthState::default(), pending());
        AuthReducer::reduce(state, fulfilled("abc"))
    }

    #[test]
    fn login_pending_sets_loading_and_clears_error() {
        let state = AuthReducer::reduce(AuthState::default(), rejected("bad"));
        let state = AuthReducer::reduce(state, pending());
        assert!(state.is_loading());
        assert_eq!(state.error(), None);
    }

    #[test]
    fn login_fulfilled_stores_session() {
        let state = signed_in();
        assert!(!state.is_loading());
        assert!(state.is_authenticated);
        assert_eq!(state.token(), Some("abc"));
        assert_eq!(state.user.as_ref().map(|u| u.id), Some(1));
        assert_eq!(state.error(), None);
    }

    #[test]
    fn login_rejected_sets_error() {
        let state = AuthReducer::reduce(AuthState::default(), pending());
        let state = AuthReducer::reduce(state, rejected("Invalid credentials"));
        assert!(!state.is_loading());
        assert!(!state.is_authenticated);
        assert_eq!(state.error(), Some("Invalid credentials"));
    }

    #[test]
    fn empty_token_is_treated_as_failure() {
        let state = AuthReducer::reduce(AuthState::default(), pending());
        let state = AuthReducer::reduce(state, fulfilled(""));
        assert!(!state.is_authenticated);
        assert_eq!(state.token(), None);
        assert_eq!(state.error(), Some(EMPTY_TOKEN));
    }

    #[test]
    fn signup_behaves_like_login() {
        let state = AuthReducer::reduce(
            AuthState::default(),
            AuthAction::Signup(Phase::Pending {
                arg: "new@example.com".to_string(),
            }),
        );
        let state = AuthReducer::reduce(
            state,
            AuthAction::Signup(Phase::Fulfilled {
                arg: "new@example.com".to_string(),
                payload: session("fresh"),
            }),
        );
        assert!(state.has_session());
        assert_eq!(state.token(), Some("fresh"));
    }

    #[test]
    fn concurrent_logins_last_writer_wins_and_loading_settles() {
        let state = AuthReducer::reduce(AuthState::default(), pending());
        let state = AuthReducer::reduce(state, pending());
        let state = AuthReducer::reduce(state, fulfilled("first"));
        assert!(state.is_loading());
        let state = AuthReducer::reduce(state, fulfilled("second"));
        assert!(!state.is_loading());
        assert_eq!(state.token(), Some("second"));
    }

    #[test]
    fn refresh_replaces_token_while_signed_in() {
        let state = AuthReducer::reduce(signed_in(), AuthAction::Refresh(Phase::pending()));
        let state = AuthReducer::reduce(
            state,
            AuthAction::Refresh(Phase::fulfilled(Secret::new("rotated"))),
        );
        assert_eq!(state.token(), Some("rotated"));
        assert!(state.is_authenticated);
        assert!(!state.is_loading());
    }

    #[test]
    fn refresh_after_sign_out_is_ignored() {
        let state = AuthReducer::reduce(signed_in(), AuthAction::Refresh(Phase::pending()));
        let state = AuthReducer::reduce(state, AuthAction::SignedOut);
        let state = AuthReducer::reduce(
            state,
            AuthAction::Refresh(Phase::fulfilled(Secret::new("rotated"))),
        );
        assert_eq!(state.token(), None);
        assert!(!state.is_authenticated);
        assert!(!state.is_loading());
    }

    #[test]
    fn signed_out_resets_everything() {
        let state = AuthReducer::reduce(signed_in(), AuthAction::SignedOut);
        assert_eq!(state, AuthState::default());
    }

    #[test]
    fn session_expired_signs_out_with_message() {
        let state = AuthReducer::reduce(signed_in(), AuthAction::SessionExpired);
        assert!(!state.is_authenticated);
        assert_eq!(state.token(), None);
        assert_eq!(state.error(), Some(SESSION_EXPIRED));
    }

    #[test]
    fn rehydrate_none_is_identity() {
        let state = signed_in();
        assert_eq!(
            AuthReducer::reduce(state.clone(), AuthAction::Rehydrate(None)),
            state
        );
    }

    #[test]
    fn rehydrate_restores_session() {
        let blob = PersistedAuth {
            token: Some(Secret::new("abc")),
            is_authenticated: true,
            user: None,
        };
        let state = AuthReducer::reduce(AuthState::default(), AuthAction::Rehydrate(Some(blob)));
        assert!(state.has_session());
    }

    #[test]
    fn no_sequence_authenticates_without_token() {
        let actions = vec![
            pending(),
            fulfilled(""),
            AuthAction::Rehydrate(Some(PersistedAuth {
                token: None,
                is_authenticated: true,
                user: None,
            })),
            AuthAction::Refresh(Phase::fulfilled(Secret::new(""))),
            fulfilled("abc"),
            AuthAction::Refresh(Phase::fulfilled(Secret::new(""))),
            AuthAction::SessionExpired,
            AuthAction::Refresh(Phase::fulfilled(Secret::new("x"))),
            rejected("nope"),
        ];
        let mut state = AuthState::default();
        for action in actions {
            state = AuthReducer::reduce(state, action);
            assert!(state.holds_invariant(), "invariant broken: {:?}", state);
        }
    }
}
