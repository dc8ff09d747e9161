use std::sync::Arc;

use mastery_core::RouteIndex;
use mastery_core::catalog::{Catalog, builtin_lessons};
use mastery_core::model::{Lesson, Topic, TopicId};

/// Read-only queries over the catalog, lessons, and route index.
#[derive(Clone)]
pub struct TopicService {
    catalog: Arc<Catalog>,
    routes: Arc<RouteIndex>,
}

impl TopicService {
    #[must_use]
    pub fn new(catalog: Arc<Catalog>, routes: Arc<RouteIndex>) -> Self {
        Self { catalog, routes }
    }

    /// Service over the compiled-in catalog and route index.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(
            Arc::new(Catalog::builtin().clone()),
            Arc::new(RouteIndex::builtin().clone()),
        )
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn catalog_handle(&self) -> Arc<Catalog> {
        Arc::clone(&self.catalog)
    }

    #[must_use]
    pub fn lessons(&self) -> &'static [Lesson] {
        builtin_lessons()
    }

    #[must_use]
    pub fn lesson_for_route(&self, route: &str) -> Option<&'static Lesson> {
        builtin_lessons().iter().find(|lesson| lesson.route() == route)
    }

    /// Topic ids a route covers. Unknown routes yield an empty slice.
    #[must_use]
    pub fn topic_ids_for_route(&self, route: &str) -> &[TopicId] {
        self.routes.lookup(route)
    }

    /// Topics a route covers, in page order. Ids missing from the catalog are skipped.
    #[must_use]
    pub fn topics_for_route(&self, route: &str) -> Vec<&Topic> {
        self.routes
            .lookup(route)
            .iter()
            .filter_map(|id| self.catalog.get(id.as_str()))
            .collect()
    }

    #[must_use]
    pub fn topic(&self, id: &str) -> Option<&Topic> {
        self.catalog.get(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mastery_core::model::Category;

    #[test]
    fn unknown_route_has_no_topics() {
        let service = TopicService::builtin();
        assert!(service.topic_ids_for_route("/does-not-exist").is_empty());
        assert!(service.topics_for_route("/does-not-exist").is_empty());
    }

    #[test]
    fn route_topics_resolve_in_page_order() {
        let service = TopicService::builtin();
        let titles: Vec<_> = service
            .topics_for_route("/testing-examples")
            .iter()
            .map(|t| t.title())
            .collect();
        assert_eq!(
            titles,
            ["Component Testing", "Hook Testing", "Async Testing", "Testing Strategies"]
        );
    }

    #[test]
    fn dangling_route_ids_are_skipped() {
        let topic = Topic::new("known", "Known", "", Category::Beginner, vec![]).unwrap();
        let service = TopicService::new(
            Arc::new(Catalog::new(vec![topic]).unwrap()),
            Arc::new(RouteIndex::new([("/page", ["missing", "known"])])),
        );
        assert_eq!(service.topic_ids_for_route("/page").len(), 2);
        let resolved = service.topics_for_route("/page");
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].id().as_str(), "known");
    }

    #[test]
    fn lessons_are_found_by_route() {
        let service = TopicService::builtin();
        let lesson = service.lesson_for_route("/hooks-demo").unwrap();
        assert_eq!(lesson.title(), "React Hooks");
        assert!(service.lesson_for_route("/nope").is_none());
    }
}
