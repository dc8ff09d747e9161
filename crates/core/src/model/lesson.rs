use thiserror::Error;

use crate::catalog::LessonSeed;
use crate::model::topic::Category;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LessonError {
    #[error("lesson title cannot be empty")]
    EmptyTitle,
    #[error("lesson route must start with '/': {0}")]
    InvalidRoute(String),
}

/// A lesson page: the landing-page card that links to one route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lesson {
    title: String,
    description: String,
    level: Category,
    concepts: Vec<String>,
    route: String,
}

impl Lesson {
    /// Create a validated lesson.
    ///
    /// # Errors
    ///
    /// Returns `LessonError` if the title is blank or the route is not an
    /// absolute path.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        level: Category,
        concepts: Vec<String>,
        route: impl Into<String>,
    ) -> Result<Self, LessonError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(LessonError::EmptyTitle);
        }
        let route = route.into();
        if !route.starts_with('/') {
            return Err(LessonError::InvalidRoute(route));
        }

        Ok(Self {
            title,
            description: description.into(),
            level,
            concepts,
            route,
        })
    }

    pub(crate) fn from_seed(seed: &LessonSeed) -> Self {
        Self {
            title: seed.title.to_string(),
            description: seed.description.to_string(),
            level: seed.level,
            concepts: seed.concepts.iter().map(|c| (*c).to_string()).collect(),
            route: seed.route.to_string(),
        }
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
    pub fn level(&self) -> Category {
        self.level
    }

    #[must_use]
    pub fn concepts(&self) -> &[String] {
        &self.concepts
    }

    #[must_use]
    pub fn route(&self) -> &str {
        &self.route
    }
}
