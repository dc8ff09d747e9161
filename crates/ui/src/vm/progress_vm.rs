use mastery_core::catalog::Catalog;
use mastery_core::model::{Topic, TopicId};
use mastery_core::stats::Milestone;
use services::ProgressSnapshot;

use crate::vm::lesson_vm::level_class;

/// Concept tags shown per topic before collapsing into "+N more".
pub const VISIBLE_CONCEPTS: usize = 3;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryTallyVm {
    pub label: &'static str,
    pub completed: usize,
    pub total: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MilestoneVm {
    Halfway,
    Mastered,
}

impl MilestoneVm {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            MilestoneVm::Mastered => "🎉 React Master Achieved!",
            MilestoneVm::Halfway => "Halfway There! Keep Going!",
        }
    }

    #[must_use]
    pub fn detail(self) -> &'static str {
        match self {
            MilestoneVm::Mastered => "You've completed all topics in the course!",
            MilestoneVm::Halfway => "You're making great progress on your React journey.",
        }
    }

    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            MilestoneVm::Mastered => "progress-milestone progress-milestone--mastered",
            MilestoneVm::Halfway => "progress-milestone progress-milestone--halfway",
        }
    }
}

impl From<Milestone> for MilestoneVm {
    fn from(milestone: Milestone) -> Self {
        match milestone {
            Milestone::Halfway => MilestoneVm::Halfway,
            Milestone::Mastered => MilestoneVm::Mastered,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TopicRowVm {
    pub id: TopicId,
    pub title: String,
    pub description: String,
    pub category_label: &'static str,
    pub category_class: &'static str,
    pub concepts: Vec<String>,
    /// Count of concepts hidden behind the "+N more" pill.
    pub hidden_concepts: usize,
    pub completed: bool,
    pub current: bool,
}

impl TopicRowVm {
    fn new(topic: &Topic, completed: bool, current: bool) -> Self {
        let concepts = topic.concepts();
        Self {
            id: topic.id().clone(),
            title: topic.title().to_owned(),
            description: topic.description().to_owned(),
            category_label: topic.category().label(),
            category_class: level_class(topic.category()),
            concepts: concepts.iter().take(VISIBLE_CONCEPTS).cloned().collect(),
            hidden_concepts: concepts.len().saturating_sub(VISIBLE_CONCEPTS),
            completed,
            current,
        }
    }

    #[must_use]
    pub fn overflow_label(&self) -> Option<String> {
        (self.hidden_concepts > 0).then(|| format!("+{} more", self.hidden_concepts))
    }

    #[must_use]
    pub fn toggle_label(&self) -> &'static str {
        if self.completed {
            "Mark as incomplete"
        } else {
            "Mark as complete"
        }
    }
}

/// Everything the progress tracker renders, precomputed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProgressVm {
    pub total: usize,
    pub completed: usize,
    pub percentage: u32,
    pub categories: Vec<CategoryTallyVm>,
    pub milestone: Option<MilestoneVm>,
    pub topics: Vec<TopicRowVm>,
}

impl ProgressVm {
    #[must_use]
    pub fn percentage_label(&self) -> String {
        format!("{}%", self.percentage)
    }

    /// Bar width in percent; the raw percentage may exceed 100 with stale ids.
    #[must_use]
    pub fn bar_width(&self) -> u32 {
        self.percentage.min(100)
    }

    #[must_use]
    pub fn summary_label(&self) -> String {
        format!("{} of {} topics completed", self.completed, self.total)
    }
}

/// Build the tracker view model. Topics listed in `highlighted` are marked current.
#[must_use]
pub fn map_progress(
    catalog: &Catalog,
    snapshot: &ProgressSnapshot,
    highlighted: &[TopicId],
) -> ProgressVm {
    let stats = &snapshot.stats;
    let categories = stats
        .by_category
        .iter()
        .map(|(category, tally)| CategoryTallyVm {
            label: category.label(),
            completed: tally.completed,
            total: tally.total,
        })
        .collect();
    let topics = catalog
        .topics()
        .iter()
        .map(|topic| {
            TopicRowVm::new(
                topic,
                snapshot.is_completed(topic.id().as_str()),
                highlighted.contains(topic.id()),
            )
        })
        .collect();

    ProgressVm {
        total: stats.total,
        completed: stats.completed,
        percentage: stats.percentage,
        categories,
        milestone: stats.milestone().map(MilestoneVm::from),
        topics,
    }
}
