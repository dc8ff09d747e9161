use serde::Serialize;
use std::collections::BTreeSet;

use crate::model::ids::TopicId;

/// The set of topics a learner has marked done.
///
/// Membership is not checked against any catalog; a stale id from a removed
/// topic is kept until it is toggled off or the state is cleared.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ProgressState {
    completed: BTreeSet<TopicId>,
}

impl ProgressState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_ids<I, T>(ids: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<TopicId>,
    {
        Self {
            completed: ids.into_iter().map(Into::into).collect(),
        }
    }

    /// Flip membership of `id`. Returns `true` when the topic is now completed.
    pub fn toggle(&mut self, id: &TopicId) -> bool {
        if self.completed.remove(id) {
            false
        } else {
            self.completed.insert(id.clone());
            true
        }
    }

    pub fn clear(&mut self) {
        self.completed.clear();
    }

    #[must_use]
    pub fn is_completed(&self, id: &str) -> bool {
        self.completed.contains(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.completed.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.completed.is_empty()
    }

    /// Completed ids in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &TopicId> {
        self.completed.iter()
    }
}

impl<'a> IntoIterator for &'a ProgressState {
    type Item = &'a TopicId;
    type IntoIter = std::collections::btree_set::Iter<'a, TopicId>;

    fn into_iter(self) -> Self::IntoIter {
        self.completed.iter()
    }
}

impl FromIterator<TopicId> for ProgressState {
    fn from_iter<I: IntoIterator<Item = TopicId>>(iter: I) -> Self {
        Self {
            completed: iter.into_iter().collect(),
        }
    }
}
