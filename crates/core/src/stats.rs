//! Derived progress statistics.
//!
//! Everything here is recomputed from `(catalog, completed)` on demand and is
//! never persisted. The overall completed count trusts the stored set, so ids
//! the catalog no longer knows still count toward it; the per-category
//! breakdown walks the catalog and therefore ignores them.

use serde::Serialize;

use crate::catalog::Catalog;
use crate::model::{Category, ProgressState};

/// Completed/total counts for one category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CategoryTally {
    pub completed: usize,
    pub total: usize,
}

/// Per-category tallies. Every category is always present, even with zero topics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CategoryBreakdown {
    pub beginner: CategoryTally,
    pub intermediate: CategoryTally,
    pub advanced: CategoryTally,
}

impl CategoryBreakdown {
    #[must_use]
    pub fn get(&self, category: Category) -> CategoryTally {
        match category {
            Category::Beginner => self.beginner,
            Category::Intermediate => self.intermediate,
            Category::Advanced => self.advanced,
        }
    }

    fn get_mut(&mut self, category: Category) -> &mut CategoryTally {
        match category {
            Category::Beginner => &mut self.beginner,
            Category::Intermediate => &mut self.intermediate,
            Category::Advanced => &mut self.advanced,
        }
    }

    /// Tallies in `Category::ALL` order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, CategoryTally)> + '_ {
        Category::ALL
            .into_iter()
            .map(move |category| (category, self.get(category)))
    }
}

/// Encouragement level reached by the learner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Milestone {
    /// At least half of the catalog is done.
    Halfway,
    /// Everything is done.
    Mastered,
}

impl Milestone {
    #[must_use]
    pub fn for_percentage(percentage: u32) -> Option<Self> {
        match percentage {
            100.. => Some(Milestone::Mastered),
            50..=99 => Some(Milestone::Halfway),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ProgressStats {
    pub total: usize,
    pub completed: usize,
    /// `completed / total * 100`, rounded half up. Zero for an empty catalog.
    ///
    /// Not clamped: stale ids can push it past 100.
    pub percentage: u32,
    pub by_category: CategoryBreakdown,
}

impl ProgressStats {
    #[must_use]
    pub fn compute(catalog: &Catalog, completed: &ProgressState) -> Self {
        let mut by_category = CategoryBreakdown::default();
        for topic in catalog.topics() {
            let tally = by_category.get_mut(topic.category());
            tally.total += 1;
            if completed.is_completed(topic.id().as_str()) {
                tally.completed += 1;
            }
        }

        let total = catalog.len();
        let completed = completed.len();
        Self {
            total,
            completed,
            percentage: rounded_percentage(completed, total),
            by_category,
        }
    }

    #[must_use]
    pub fn milestone(&self) -> Option<Milestone> {
        Milestone::for_percentage(self.percentage)
    }
}

/// Integer round-half-up of `part / whole * 100`.
fn rounded_percentage(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        return 0;
    }
    let part = part as u128;
    let whole = whole as u128;
    let rounded = (part * 200 + whole) / (whole * 2);
    u32::try_from(rounded).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Topic, TopicId};

    fn catalog(entries: &[(&str, Category)]) -> Catalog {
        Catalog::new(
            entries
                .iter()
                .map(|(id, category)| Topic::new(*id, *id, "", *category, vec![]).unwrap())
                .collect(),
        )
        .unwrap()
    }

    fn four_topics() -> Catalog {
        catalog(&[
            ("t1", Category::Beginner),
            ("t2", Category::Beginner),
            ("t3", Category::Advanced),
            ("t4", Category::Intermediate),
        ])
    }

    #[test]
    fn empty_catalog_reports_zero_percent() {
        let stats = ProgressStats::compute(&Catalog::empty(), &ProgressState::new());
        assert_eq!(stats.total, 0);
        assert_eq!(stats.percentage, 0);
        for (_, tally) in stats.by_category.iter() {
            assert_eq!(tally, CategoryTally::default());
        }
    }

    #[test]
    fn stale_ids_with_empty_catalog_still_report_zero_percent() {
        let stats = ProgressStats::compute(&Catalog::empty(), &ProgressState::from_ids(["ghost"]));
        assert_eq!(stats.completed, 1);
        assert_eq!(stats.percentage, 0);
    }

    #[test]
    fn all_done_is_one_hundred_percent() {
        let catalog = four_topics();
        let all = ProgressState::from_ids(["t1", "t2", "t3", "t4"]);
        let stats = ProgressStats::compute(&catalog, &all);
        assert_eq!(stats.percentage, 100);
        assert_eq!(stats.milestone(), Some(Milestone::Mastered));
    }

    #[test]
    fn half_rounds_up() {
        let entries: Vec<(String, Category)> =
            (0..8).map(|i| (format!("t{i}"), Category::Beginner)).collect();
        let refs: Vec<(&str, Category)> =
            entries.iter().map(|(id, c)| (id.as_str(), *c)).collect();
        let catalog = catalog(&refs);

        let one = ProgressStats::compute(&catalog, &ProgressState::from_ids(["t0"]));
        assert_eq!(one.percentage, 13);

        let three = ProgressStats::compute(&catalog, &ProgressState::from_ids(["t0", "t1", "t2"]));
        // 37.5 -> 38
        assert_eq!(three.percentage, 38);
    }

    #[test]
    fn one_third_rounds_down() {
        let catalog = catalog(&[
            ("a", Category::Beginner),
            ("b", Category::Beginner),
            ("c", Category::Beginner),
        ]);
        let stats = ProgressStats::compute(&catalog, &ProgressState::from_ids(["a"]));
        assert_eq!(stats.percentage, 33);
        let stats = ProgressStats::compute(&catalog, &ProgressState::from_ids(["a", "b"]));
        assert_eq!(stats.percentage, 67);
    }

    #[test]
    fn stale_ids_count_overall_but_not_per_category() {
        let catalog = four_topics();
        let state = ProgressState::from_ids(["t1", "removed-topic"]);
        let stats = ProgressStats::compute(&catalog, &state);

        assert_eq!(stats.completed, 2);
        assert_eq!(stats.percentage, 50);
        let category_completed: usize = stats.by_category.iter().map(|(_, t)| t.completed).sum();
        assert_eq!(category_completed, 1);
    }

    #[test]
    fn category_totals_sum_to_total() {
        let catalog = Catalog::builtin();
        let states = [
            ProgressState::new(),
            ProgressState::from_ids(["components-props", "react-memo", "nope"]),
            catalog.topics().iter().map(|t| t.id().clone()).collect(),
        ];
        for state in &states {
            let stats = ProgressStats::compute(catalog, state);
            let totals: usize = stats.by_category.iter().map(|(_, t)| t.total).sum();
            let done: usize = stats.by_category.iter().map(|(_, t)| t.completed).sum();
            assert_eq!(totals, stats.total);
            assert!(done <= stats.completed);
        }
    }

    #[test]
    fn four_topic_walkthrough() {
        let catalog = catalog(&[
            ("t1", Category::Beginner),
            ("t2", Category::Beginner),
            ("t3", Category::Advanced),
            ("t4", Category::Intermediate),
        ]);
        let mut state = ProgressState::new();
        state.toggle(&TopicId::new("t1"));
        state.toggle(&TopicId::new("t3"));

        let stats = ProgressStats::compute(&catalog, &state);
        assert_eq!(stats.completed, 2);
        assert_eq!(stats.percentage, 50);
        assert_eq!(
            stats.by_category.get(Category::Beginner),
            CategoryTally { completed: 1, total: 2 }
        );
        assert_eq!(
            stats.by_category.get(Category::Intermediate),
            CategoryTally { completed: 0, total: 1 }
        );
        assert_eq!(
            stats.by_category.get(Category::Advanced),
            CategoryTally { completed: 1, total: 1 }
        );
        assert_eq!(stats.milestone(), Some(Milestone::Halfway));

        state.toggle(&TopicId::new("t1"));
        let stats = ProgressStats::compute(&catalog, &state);
        assert_eq!(stats.completed, 1);
        assert_eq!(stats.percentage, 25);
        assert_eq!(stats.milestone(), None);
    }

    #[test]
    fn milestone_thresholds() {
        assert_eq!(Milestone::for_percentage(0), None);
        assert_eq!(Milestone::for_percentage(49), None);
        assert_eq!(Milestone::for_percentage(50), Some(Milestone::Halfway));
        assert_eq!(Milestone::for_percentage(99), Some(Milestone::Halfway));
        assert_eq!(Milestone::for_percentage(100), Some(Milestone::Mastered));
        assert_eq!(Milestone::for_percentage(125), Some(Milestone::Mastered));
    }
}
