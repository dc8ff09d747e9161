//! Shared error types for the services crate.
//!
//! Progress operations do not appear here: storage failures behind them are
//! logged and absorbed so the UI always keeps working.

use thiserror::Error;

use storage::sqlite::SqliteInitError;

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
}
