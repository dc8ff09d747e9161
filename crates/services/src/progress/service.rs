use std::sync::Arc;

use tokio::sync::Mutex;

use mastery_core::catalog::Catalog;
use mastery_core::model::{ProgressState, TopicId};
use mastery_core::stats::ProgressStats;
use storage::repository::{ProgressRepository, StorageError};

use super::listeners::{Listeners, SubscriptionId};
use super::snapshot::ProgressSnapshot;

/// Owns the completed-topic set and keeps it durable.
///
/// Every mutation updates memory first, then writes the whole set through the
/// repository and notifies listeners, all while still holding the state lock.
/// The last mutation is therefore always the last write and the last
/// notification. Storage failures are logged and never reach the caller;
/// memory stays authoritative for the rest of the session.
pub struct ProgressService {
    catalog: Arc<Catalog>,
    repo: Arc<dyn ProgressRepository>,
    state: Mutex<ProgressState>,
    listeners: Listeners,
}

impl ProgressService {
    /// Create a service with an empty completed set. Nothing is read yet.
    #[must_use]
    pub fn new(catalog: Arc<Catalog>, repo: Arc<dyn ProgressRepository>) -> Self {
        Self {
            catalog,
            repo,
            state: Mutex::new(ProgressState::new()),
            listeners: Listeners::default(),
        }
    }

    /// Create a service and initialize it from the persisted record.
    pub async fn open(catalog: Arc<Catalog>, repo: Arc<dyn ProgressRepository>) -> Self {
        let service = Self::new(catalog, repo);
        service.load().await;
        service
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Replace the in-memory set with the persisted one.
    ///
    /// An absent, unreadable, or malformed record yields the empty set.
    pub async fn load(&self) -> ProgressState {
        let loaded = match self.repo.load_progress().await {
            Ok(Some(state)) => state,
            Ok(None) => ProgressState::new(),
            Err(StorageError::Serialization(reason)) => {
                tracing::warn!(%reason, "stored progress is malformed; starting empty");
                ProgressState::new()
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to read stored progress; starting empty");
                ProgressState::new()
            }
        };

        let mut state = self.state.lock().await;
        *state = loaded.clone();
        tracing::debug!(completed = loaded.len(), "progress loaded");
        self.listeners.notify(&self.snapshot_of(&state));
        loaded
    }

    /// Overwrite the persisted record with `state`.
    ///
    /// Does not touch the in-memory set. A failed write is logged and not retried.
    pub async fn save(&self, state: &ProgressState) {
        if let Err(err) = self.repo.save_progress(state).await {
            tracing::warn!(error = %err, "failed to persist progress; continuing in memory");
        }
    }

    /// Flip completion of `id` and persist. Ids outside the catalog are accepted.
    pub async fn toggle(&self, id: &TopicId) -> ProgressState {
        let mut state = self.state.lock().await;
        let completed = state.toggle(id);
        tracing::debug!(topic = %id, completed, "topic toggled");
        self.save(&state).await;
        self.listeners.notify(&self.snapshot_of(&state));
        state.clone()
    }

    /// Clear every completion and delete the persisted record.
    pub async fn reset(&self) -> ProgressState {
        let mut state = self.state.lock().await;
        state.clear();
        if let Err(err) = self.repo.remove_progress().await {
            tracing::warn!(error = %err, "failed to remove stored progress");
        }
        tracing::debug!("progress reset");
        self.listeners.notify(&self.snapshot_of(&state));
        state.clone()
    }

    /// The current completed set.
    pub async fn completed(&self) -> ProgressState {
        self.state.lock().await.clone()
    }

    pub async fn is_completed(&self, id: &str) -> bool {
        self.state.lock().await.is_completed(id)
    }

    pub async fn stats(&self) -> ProgressStats {
        let state = self.state.lock().await;
        ProgressStats::compute(&self.catalog, &state)
    }

    pub async fn snapshot(&self) -> ProgressSnapshot {
        let state = self.state.lock().await;
        self.snapshot_of(&state)
    }

    /// Register `listener` to run after every change to the completed set,
    /// including `load`.
    ///
    /// Listeners run on the mutating task while the state lock is held, so
    /// they see changes in mutation order. They must not block on the
    /// service's async methods.
    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(&ProgressSnapshot) + Send + Sync + 'static,
    {
        self.listeners.add(Arc::new(listener))
    }

    /// Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.listeners.remove(id)
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.listeners.len()
    }

    fn snapshot_of(&self, state: &ProgressState) -> ProgressSnapshot {
        ProgressSnapshot {
            completed: state.clone(),
            stats: ProgressStats::compute(&self.catalog, state),
        }
    }
}
