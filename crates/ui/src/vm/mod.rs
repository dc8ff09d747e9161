mod lesson_vm;
mod progress_vm;

pub use lesson_vm::{LessonCardVm, map_lesson_cards};
pub use progress_vm::{
    CategoryTallyVm, MilestoneVm, ProgressVm, TopicRowVm, VISIBLE_CONCEPTS, map_progress,
};
