use serde::Serialize;

use mastery_core::model::ProgressState;
use mastery_core::stats::{Milestone, ProgressStats};

/// Completed set plus the statistics derived from it, captured together.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProgressSnapshot {
    pub completed: ProgressState,
    pub stats: ProgressStats,
}

impl ProgressSnapshot {
    #[must_use]
    pub fn is_completed(&self, id: &str) -> bool {
        self.completed.is_completed(id)
    }

    #[must_use]
    pub fn milestone(&self) -> Option<Milestone> {
        self.stats.milestone()
    }
}
