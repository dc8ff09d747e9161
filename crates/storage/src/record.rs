//! Wire shape of the persisted progress record.
//!
//! The record is a JSON array of topic-id strings, written in sorted order.
//! Adapters store it verbatim under [`PROGRESS_KEY`].

use mastery_core::model::{ProgressState, TopicId};

use crate::repository::StorageError;

/// Fixed key of the single progress slot.
pub const PROGRESS_KEY: &str = "react-master-progress";

/// Serialize the completed set to its persisted form.
///
/// # Errors
///
/// Returns `StorageError::Serialization` if JSON encoding fails.
pub fn encode_progress(state: &ProgressState) -> Result<String, StorageError> {
    let ids: Vec<&str> = state.iter().map(TopicId::as_str).collect();
    serde_json::to_string(&ids).map_err(|err| StorageError::Serialization(err.to_string()))
}

/// Parse a persisted payload.
///
/// # Errors
///
/// Returns `StorageError::Serialization` unless the payload is a JSON array
/// whose elements are all strings.
pub fn decode_progress(payload: &str) -> Result<ProgressState, StorageError> {
    let ids: Vec<String> =
        serde_json::from_str(payload).map_err(|err| StorageError::Serialization(err.to_string()))?;
    Ok(ids.into_iter().map(TopicId::from).collect())
}
