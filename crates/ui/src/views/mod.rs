mod home;
mod lesson;
mod not_found;
mod progress;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use home::HomeView;
pub use lesson::LessonView;
pub use not_found::{NotFoundContent, NotFoundView};
pub use progress::{ProgressPanel, ProgressTracker};
pub use state::{ViewState, view_state_from_resource};
