use std::sync::Arc;

use storage::repository::Storage;

use crate::error::AppServicesError;
use crate::progress::ProgressService;
use crate::topic_service::TopicService;

/// Assembles app-facing services over one storage backend.
#[derive(Clone)]
pub struct AppServices {
    topics: Arc<TopicService>,
    progress: Arc<ProgressService>,
}

impl AppServices {
    /// Build services backed by `SQLite` storage and load stored progress.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization fails.
    pub async fn new_sqlite(db_url: &str) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        Ok(Self::from_storage(&storage).await)
    }

    /// Build services over the in-memory backend. Progress is lost on exit.
    pub async fn in_memory() -> Self {
        Self::from_storage(&Storage::in_memory()).await
    }

    /// Build services over an already-initialized storage backend.
    pub async fn from_storage(storage: &Storage) -> Self {
        let topics = Arc::new(TopicService::builtin());
        let progress = Arc::new(
            ProgressService::open(topics.catalog_handle(), Arc::clone(&storage.progress)).await,
        );
        Self { topics, progress }
    }

    #[must_use]
    pub fn topics(&self) -> Arc<TopicService> {
        Arc::clone(&self.topics)
    }

    #[must_use]
    pub fn progress(&self) -> Arc<ProgressService> {
        Arc::clone(&self.progress)
    }
}
