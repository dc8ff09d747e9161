mod ids;
mod lesson;
mod progress;
mod topic;

pub use ids::{ParseIdError, TopicId};
pub use lesson::{Lesson, LessonError};
pub use progress::ProgressState;
pub use topic::{Category, ParseCategoryError, Topic, TopicError};
