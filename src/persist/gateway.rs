//! Hydration on startup and write-behind of persisted slices.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::slices::auth::PersistedAuth;
use crate::store::{Rehydration, RootAction, RootState, Store, Subscription};

use super::backend::StorageBackend;
use super::{PersistConfig, PersistedSlice};

/// Outcome of a hydration pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HydrationReport {
    /// Slices restored from storage.
    pub restored: Vec<PersistedSlice>,
    /// Slices whose stored blob was unreadable or corrupt and was ignored.
    pub discarded: Vec<PersistedSlice>,
}

/// Latest projections waiting to be written.
#[derive(Debug, Clone, Default)]
struct Snapshot {
    seq: u64,
    entries: Vec<(String, String)>,
}

/// Load the configured slices from `backend`, merge them into `store` and
/// mark it rehydrated.
///
/// Never fails: unreadable storage or corrupt blobs are logged and the
/// slice keeps its default state. The store is marked rehydrated in every
/// case.
pub async fn hydrate(
    store: &Store,
    backend: &dyn StorageBackend,
    config: &PersistConfig,
) -> HydrationReport {
    let mut rehydration = Rehydration::default();
    let mut report = HydrationReport::default();

    for &slice in &config.slices {
        let key = config.key(slice);
        let blob = match backend.load(&key).await {
            Ok(Some(blob)) => blob,
            Ok(None) => continue,
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "failed to read persisted state");
                report.discarded.push(slice);
                continue;
            }
        };

        match slice {
            PersistedSlice::Auth => match serde_json::from_str::<PersistedAuth>(&blob) {
                Ok(auth) => {
                    rehydration.auth = Some(auth);
                    report.restored.push(slice);
                }
                Err(e) => {
                    tracing::warn!(key = %key, error = %e, "discarding corrupt persisted state");
                    report.discarded.push(slice);
                }
            },
        }
    }

    store.dispatch(RootAction::Rehydrate(rehydration));
    tracing::info!(
        restored = ?report.restored,
        discarded = ?report.discarded,
        "store rehydrated"
    );
    report
}

fn project(config: &PersistConfig, state: &RootState) -> Vec<(String, String)> {
    config
        .slices
        .iter()
        .filter_map(|&slice| match slice.project(state) {
            Ok(blob) => Some((config.key(slice), blob)),
            Err(e) => {
                tracing::warn!(slice = slice.as_str(), error = %e, "failed to serialize slice");
                None
            }
        })
        .collect()
}

/// Keeps the configured slices of a [`Store`] durable.
///
/// Created by [`PersistenceGateway::start`], which hydrates the store
/// before subscribing, so the default state can never overwrite what was
/// stored by a previous run. Every change to a persisted slice is
/// published to a single writer task; when changes arrive faster than
/// they are written only the latest is kept.
///
/// Dropping the gateway detaches it from the store. The writer then
/// finishes the snapshot it already holds and exits; use
/// [`PersistenceGateway::shutdown`] to wait for that.
pub struct PersistenceGateway {
    backend: Arc<dyn StorageBackend>,
    config: PersistConfig,
    report: HydrationReport,
    subscription: Option<Subscription>,
    seq: Arc<AtomicU64>,
    written: watch::Receiver<u64>,
    writer: Option<JoinHandle<()>>,
}

impl PersistenceGateway {
    /// Hydrate `store` from `backend`, then start writing changes back.
    ///
    /// Must be called within a Tokio runtime.
    pub async fn start(
        store: &Store,
        backend: Arc<dyn StorageBackend>,
        config: PersistConfig,
    ) -> Self {
        let report = hydrate(store, backend.as_ref(), &config).await;

        let seq = Arc::new(AtomicU64::new(0));
        let (snapshot_tx, snapshot_rx) = watch::channel(Snapshot::default());
        let (written_tx, written_rx) = watch::channel(0u64);

        let last = Mutex::new(project(&config, &store.state()));
        let listener_config = config.clone();
        let listener_seq = Arc::clone(&seq);
        let subscription = store.subscribe(move |state| {
            let entries = project(&listener_config, state);
            let mut last = last.lock();
            if *last == entries {
                return;
            }
            *last = entries.clone();
            let seq = listener_seq.fetch_add(1, Ordering::SeqCst) + 1;
            snapshot_tx.send_replace(Snapshot { seq, entries });
        });

        let writer = tokio::spawn(write_behind(
            Arc::clone(&backend),
            snapshot_rx,
            written_tx,
            config.debounce,
        ));

        Self {
            backend,
            config,
            report,
            subscription: Some(subscription),
            seq,
            written: written_rx,
            writer: Some(writer),
        }
    }

    pub fn hydration_report(&self) -> &HydrationReport {
        &self.report
    }

    /// Wait until the latest observed change has been written.
    pub async fn flush(&self) {
        let target = self.seq.load(Ordering::SeqCst);
        let mut written = self.written.clone();
        if written.wait_for(|seq| *seq >= target).await.is_err() {
            tracing::warn!("persistence writer stopped before flushing");
        }
    }

    /// Remove every configured key from storage.
    ///
    /// Later changes are written again as usual.
    pub async fn purge(&self) {
        self.flush().await;
        for &slice in &self.config.slices {
            let key = self.config.key(slice);
            if let Err(e) = self.backend.remove(&key).await {
                tracing::warn!(key = %key, error = %e, "failed to purge persisted state");
            }
        }
    }

    /// Flush pending writes, detach from the store and stop the writer.
    pub async fn shutdown(mut self) {
        self.flush().await;
        self.detach();
        if let Some(writer) = self.writer.take() {
            if let Err(e) = writer.await {
                tracing::warn!(error = %e, "persistence writer task failed");
            }
        }
    }

    fn detach(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            subscription.unsubscribe();
        }
    }
}

impl Drop for PersistenceGateway {
    fn drop(&mut self) {
        self.detach();
    }
}

async fn write_behind(
    backend: Arc<dyn StorageBackend>,
    mut snapshots: watch::Receiver<Snapshot>,
    written: watch::Sender<u64>,
    debounce: Duration,
) {
    while snapshots.changed().await.is_ok() {
        if !debounce.is_zero() {
            tokio::time::sleep(debounce).await;
        }
        let snapshot = snapshots.borrow_and_update().clone();
        for (key, blob) in &snapshot.entries {
            match backend.save(key, blob).await {
                Ok(()) => tracing::trace!(key = %key, seq = snapshot.seq, "persisted state"),
                Err(e) => tracing::warn!(key = %key, error = %e, "failed to persist state"),
            }
        }
        written.send_replace(snapshot.seq);
    }
}
