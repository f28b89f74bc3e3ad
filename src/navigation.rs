//! Route selection from session state.
//!
//! The gate is the only consumer allowed to turn state changes into route
//! changes. It never decides before the store has been rehydrated.

use tokio::sync::watch;

use crate::store::{RootState, Store, Subscription};

/// Top-level destinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    /// Waiting for hydration.
    Splash,
    SignIn,
    Home,
}

/// The part of the state tree routing depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionView {
    pub is_authenticated: bool,
    pub has_token: bool,
    pub rehydrated: bool,
}

impl From<&RootState> for SessionView {
    fn from(state: &RootState) -> Self {
        Self {
            is_authenticated: state.auth.is_authenticated,
            has_token: state.auth.token.is_some(),
            rehydrated: state.rehydrated,
        }
    }
}

pub fn resolve_route(view: SessionView) -> Route {
    if !view.rehydrated {
        Route::Splash
    } else if view.is_authenticated && view.has_token {
        Route::Home
    } else {
        Route::SignIn
    }
}

/// Publishes the current [`Route`] of a store.
///
/// Receivers are only woken when the route actually changes, not on every
/// state change. Dropping the gate detaches it.
pub struct NavigationGate {
    routes: watch::Receiver<Route>,
    subscription: Option<Subscription>,
}

impl NavigationGate {
    pub fn attach(store: &Store) -> Self {
        let initial = resolve_route(SessionView::from(store.state().as_ref()));
        let (tx, routes) = watch::channel(initial);

        let subscription = store.subscribe(move |state| {
            let next = resolve_route(SessionView::from(state));
            tx.send_if_modified(|route| {
                if *route == next {
                    return false;
                }
                tracing::debug!(from = ?*route, to = ?next, "route changed");
                *route = next;
                true
            });
        });

        Self {
            routes,
            subscription: Some(subscription),
        }
    }

    pub fn current(&self) -> Route {
        *self.routes.borrow()
    }

    /// A receiver that observes every route change from now on.
    pub fn routes(&self) -> watch::Receiver<Route> {
        self.routes.clone()
    }

    /// Stop following the store. Outstanding receivers see the channel
    /// close.
    pub fn detach(self) {
        drop(self);
    }
}

impl Drop for NavigationGate {
    fn drop(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            subscription.unsubscribe();
        }
    }
}
