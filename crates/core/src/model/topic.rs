use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::catalog::TopicSeed;
use crate::model::ids::TopicId;

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TopicError {
    #[error("topic id cannot be empty")]
    EmptyId,
    #[error("topic title cannot be empty")]
    EmptyTitle,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown category: {raw}")]
pub struct ParseCategoryError {
    raw: String,
}

//
// ─── CATEGORY ─────────────────────────────────────────────────────────────────
//

/// Difficulty band of a topic.
///
/// The set is closed: adding a band means touching every exhaustive match,
/// including the per-category statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Beginner,
    Intermediate,
    Advanced,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 3] = [
        Category::Beginner,
        Category::Intermediate,
        Category::Advanced,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Category::Beginner => "Beginner",
            Category::Intermediate => "Intermediate",
            Category::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseCategoryError { raw: s.to_string() })
    }
}

//
// ─── TOPIC ────────────────────────────────────────────────────────────────────
//

/// A single checklist entry in the learning catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topic {
    id: TopicId,
    title: String,
    description: String,
    category: Category,
    concepts: Vec<String>,
}

impl Topic {
    /// Create a validated topic.
    ///
    /// # Errors
    ///
    /// Returns `TopicError::EmptyId` or `TopicError::EmptyTitle` when the
    /// respective field is blank after trimming.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        category: Category,
        concepts: Vec<String>,
    ) -> Result<Self, TopicError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(TopicError::EmptyId);
        }
        let title = title.into();
        if title.trim().is_empty() {
            return Err(TopicError::EmptyTitle);
        }

        Ok(Self {
            id: TopicId::new(id.trim()),
            title: title.trim().to_string(),
            description: description.into(),
            category,
            concepts,
        })
    }

    /// Builds a topic from compiled-in seed data, which is checked by the catalog tests.
    pub(crate) fn from_seed(seed: &TopicSeed) -> Self {
        Self {
            id: TopicId::new(seed.id),
            title: seed.title.to_string(),
            description: seed.description.to_string(),
            category: seed.category,
            concepts: seed.concepts.iter().map(|c| (*c).to_string()).collect(),
        }
    }

    #[must_use]
    pub fn id(&self) -> &TopicId {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn category(&self) -> Category {
        self.category
    }

    #[must_use]
    pub fn concepts(&self) -> &[String] {
        &self.concepts
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
