use mastery_core::model::{Category, Lesson};

/// UI-ready lesson card for the home page grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LessonCardVm {
    pub slug: String,
    pub title: String,
    pub description: String,
    pub level_label: &'static str,
    pub level_class: &'static str,
    pub concepts: Vec<String>,
}

impl From<&Lesson> for LessonCardVm {
    fn from(lesson: &Lesson) -> Self {
        Self {
            slug: lesson.route().trim_start_matches('/').to_owned(),
            title: lesson.title().to_owned(),
            description: lesson.description().to_owned(),
            level_label: lesson.level().label(),
            level_class: level_class(lesson.level()),
            concepts: lesson.concepts().to_vec(),
        }
    }
}

#[must_use]
pub fn map_lesson_cards(lessons: &[Lesson]) -> Vec<LessonCardVm> {
    lessons.iter().map(LessonCardVm::from).collect()
}

pub(crate) fn level_class(category: Category) -> &'static str {
    match category {
        Category::Beginner => "badge badge--beginner",
        Category::Intermediate => "badge badge--intermediate",
        Category::Advanced => "badge badge--advanced",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mastery_core::catalog::builtin_lessons;

    #[test]
    fn lesson_cards_use_route_slug() {
        let cards = map_lesson_cards(builtin_lessons());
        assert_eq!(cards.len(), 8);
        assert_eq!(cards[0].slug, "basic-concepts");
        assert_eq!(cards[0].level_label, "Beginner");
        assert_eq!(cards[0].level_class, "badge badge--beginner");
    }
}
