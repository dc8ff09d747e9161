use async_trait::async_trait;
use mastery_core::model::ProgressState;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

use crate::record::{PROGRESS_KEY, decode_progress, encode_progress};

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("not found")]
    NotFound,

    #[error("conflict")]
    Conflict,

    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Persistence port for the single progress record.
///
/// Adapters own the slot addressed by [`PROGRESS_KEY`] and touch nothing else.
#[async_trait]
pub trait ProgressRepository: Send + Sync {
    /// Read the persisted completed set.
    ///
    /// Returns `Ok(None)` when no record exists.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Serialization` if the stored payload is not a
    /// list of strings, or other storage errors if the slot cannot be read.
    async fn load_progress(&self) -> Result<Option<ProgressState>, StorageError>;

    /// Overwrite the record with `state`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the record cannot be written.
    async fn save_progress(&self, state: &ProgressState) -> Result<(), StorageError>;

    /// Delete the record. Removing an absent record is not an error.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the slot cannot be cleared.
    async fn remove_progress(&self) -> Result<(), StorageError>;
}

/// Simple in-memory repository implementation for testing and prototyping.
///
/// Slots hold raw payload strings, so tests can plant malformed records.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    slots: Arc<Mutex<HashMap<String, String>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Store a raw payload under `key`, bypassing encoding.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Connection` if the slot map lock is poisoned.
    pub fn insert_raw(&self, key: &str, payload: impl Into<String>) -> Result<(), StorageError> {
        let mut guard = self
            .slots
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.insert(key.to_string(), payload.into());
        Ok(())
    }

    /// Raw payload stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Connection` if the slot map lock is poisoned.
    pub fn raw(&self, key: &str) -> Result<Option<String>, StorageError> {
        let guard = self
            .slots
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.get(key).cloned())
    }
}

#[async_trait]
impl ProgressRepository for InMemoryRepository {
    async fn load_progress(&self) -> Result<Option<ProgressState>, StorageError> {
        self.raw(PROGRESS_KEY)?
            .map(|payload| decode_progress(&payload))
            .transpose()
    }

    async fn save_progress(&self, state: &ProgressState) -> Result<(), StorageError> {
        let payload = encode_progress(state)?;
        self.insert_raw(PROGRESS_KEY, payload)
    }

    async fn remove_progress(&self) -> Result<(), StorageError> {
        let mut guard = self
            .slots
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.remove(PROGRESS_KEY);
        Ok(())
    }
}

/// Aggregates repositories behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub progress: Arc<dyn ProgressRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        let progress: Arc<dyn ProgressRepository> = Arc::new(InMemoryRepository::new());
        Self { progress }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_record_loads_as_none() {
        let repo = InMemoryRepository::new();
        assert!(repo.load_progress().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn round_trips_completed_set() {
        let repo = InMemoryRepository::new();
        let state = ProgressState::from_ids(["useref-hook", "components-props", "gone-topic"]);
        repo.save_progress(&state).await.unwrap();

        let loaded = repo.load_progress().await.unwrap();
        assert_eq!(loaded, Some(state));
    }

    #[tokio::test]
    async fn save_overwrites_previous_record() {
        let repo = InMemoryRepository::new();
        repo.save_progress(&ProgressState::from_ids(["a", "b"]))
            .await
            .unwrap();
        repo.save_progress(&ProgressState::from_ids(["c"]))
            .await
            .unwrap();

        assert_eq!(repo.raw(PROGRESS_KEY).unwrap().as_deref(), Some(r#"["c"]"#));
    }

    #[tokio::test]
    async fn remove_deletes_the_slot() {
        let repo = InMemoryRepository::new();
        repo.save_progress(&ProgressState::from_ids(["a"]))
            .await
            .unwrap();
        repo.remove_progress().await.unwrap();

        assert!(repo.raw(PROGRESS_KEY).unwrap().is_none());
        // Removing twice is fine.
        repo.remove_progress().await.unwrap();
    }

    #[tokio::test]
    async fn malformed_payload_is_a_serialization_error() {
        let repo = InMemoryRepository::new();
        repo.insert_raw(PROGRESS_KEY, "{not json").unwrap();
        let err = repo.load_progress().await.unwrap_err();
        assert!(matches!(err, StorageError::Serialization(_)));
    }

    #[tokio::test]
    async fn other_slots_are_untouched() {
        let repo = InMemoryRepository::new();
        repo.insert_raw("theme", "dark").unwrap();
        repo.save_progress(&ProgressState::from_ids(["a"]))
            .await
            .unwrap();
        repo.remove_progress().await.unwrap();
        assert_eq!(repo.raw("theme").unwrap().as_deref(), Some("dark"));
    }
}
