//! Single mutation path and change notification.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};

use parking_lot::{Mutex, ReentrantMutex, RwLock};

use crate::mvi::{Action, Reducer};

use super::action::RootAction;
use super::reducer::RootReducer;
use super::state::RootState;

type Listener = Arc<dyn Fn(&RootState) + Send + Sync>;

#[derive(Default)]
struct DispatchQueue {
    actions: VecDeque<RootAction>,
    draining: bool,
}

struct StoreInner {
    state: RwLock<Arc<RootState>>,
    dispatch: ReentrantMutex<RefCell<DispatchQueue>>,
    listeners: Mutex<Vec<(u64, Listener)>>,
    next_listener: AtomicU64,
}

/// Handle to the application state.
///
/// Cloning is cheap and every clone addresses the same state tree. The
/// store is constructed explicitly and passed to whoever needs it; there
/// is no global instance.
///
/// Reductions never overlap: dispatches from other threads wait for the
/// current one, and a dispatch made by a subscriber while it is being
/// notified is queued and applied right after the current notification
/// round, before the outer `dispatch` returns.
#[derive(Clone)]
pub struct Store {
    inner: Arc<StoreInner>,
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Store {
    /// Create a store holding the default (signed-out, not yet
    /// rehydrated) state.
    pub fn new() -> Self {
        Self::with_state(RootState::default())
    }

    pub fn with_state(state: RootState) -> Self {
        Self {
            inner: Arc::new(StoreInner {
                state: RwLock::new(Arc::new(state)),
                dispatch: ReentrantMutex::new(RefCell::new(DispatchQueue::default())),
                listeners: Mutex::new(Vec::new()),
                next_listener: AtomicU64::new(0),
            }),
        }
    }

    /// Immutable snapshot of the current state.
    pub fn state(&self) -> Arc<RootState> {
        Arc::clone(&self.inner.state.read())
    }

    /// Apply `action` and notify subscribers if the state changed.
    pub fn dispatch(&self, action: impl Into<RootAction>) {
        let queue = self.inner.dispatch.lock();
        {
            let mut pending = queue.borrow_mut();
            pending.actions.push_back(action.into());
            if pending.draining {
                return;
            }
            pending.draining = true;
        }

        // A panicking subscriber must not leave the queue marked as draining.
        let _reset = scopeguard::guard(&queue, |queue| {
            let mut pending = queue.borrow_mut();
            pending.draining = false;
            pending.actions.clear();
        });

        loop {
            let next = queue.borrow_mut().actions.pop_front();
            let Some(action) = next else {
                break;
            };
            self.apply(action);
        }
    }

    /// Register `listener`, called with the new state after every change,
    /// in subscription order.
    ///
    /// The listener stays registered until [`Subscription::unsubscribe`] is
    /// called; dropping the handle does not unsubscribe.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&RootState) + Send + Sync + 'static,
    {
        let id = self.inner.next_listener.fetch_add(1, Ordering::Relaxed);
        self.inner.listeners.lock().push((id, Arc::new(listener)));
        Subscription {
            id,
            store: Arc::downgrade(&self.inner),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.listeners.lock().len()
    }

    fn apply(&self, action: RootAction) {
        let kind = action.kind();
        let current = self.state();
        let next = RootReducer::reduce(RootState::clone(&current), action);

        if next == *current {
            tracing::trace!(action = %kind, "action left state unchanged");
            return;
        }
        tracing::debug!(action = %kind, "state updated");

        let next = Arc::new(next);
        *self.inner.state.write() = Arc::clone(&next);

        // Snapshot the listener list so listeners may (un)subscribe.
        let listeners: Vec<Listener> = self
            .inner
            .listeners
            .lock()
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();
        for listener in listeners {
            listener(&next);
        }
    }
}

/// Registration handle returned by [`Store::subscribe`].
#[must_use = "keep the subscription to be able to unsubscribe"]
pub struct Subscription {
    id: u64,
    store: Weak<StoreInner>,
}

impl Subscription {
    pub fn unsubscribe(self) {
        if let Some(inner) = self.store.upgrade() {
            inner.listeners.lock().retain(|(id, _)| *id != self.id);
        }
    }
}
