use std::collections::HashMap;
use std::sync::LazyLock;

use crate::model::TopicId;

/// Static mapping from a page route to the topics that page covers.
///
/// Lookups never fail: a route without an entry yields an empty slice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteIndex {
    routes: HashMap<String, Vec<TopicId>>,
}

impl RouteIndex {
    #[must_use]
    pub fn new<R, I, T>(entries: impl IntoIterator<Item = (R, I)>) -> Self
    where
        R: Into<String>,
        I: IntoIterator<Item = T>,
        T: Into<TopicId>,
    {
        let routes = entries
            .into_iter()
            .map(|(route, ids)| (route.into(), ids.into_iter().map(Into::into).collect()))
            .collect();
        Self { routes }
    }

    /// The index shipped with the application.
    #[must_use]
    pub fn builtin() -> &'static RouteIndex {
        &BUILTIN_ROUTES
    }

    /// Topic ids for `route`, in page order.
    #[must_use]
    pub fn lookup(&self, route: &str) -> &[TopicId] {
        self.routes.get(route).map(Vec::as_slice).unwrap_or_default()
    }

    /// Routes that have at least one entry, sorted.
    #[must_use]
    pub fn routes(&self) -> Vec<&str> {
        let mut routes: Vec<&str> = self.routes.keys().map(String::as_str).collect();
        routes.sort_unstable();
        routes
    }
}

static BUILTIN_ROUTES: LazyLock<RouteIndex> = LazyLock::new(|| {
    RouteIndex::new(
        ROUTE_TABLE
            .iter()
            .map(|(route, ids)| (*route, ids.iter().copied())),
    )
});

const ROUTE_TABLE: &[(&str, &[&str])] = &[
    (
        "/basic-concepts",
        &[
            "components-props",
            "state-events",
            "conditional-rendering",
            "lists-keys",
            "forms-inputs",
        ],
    ),
    (
        "/hooks-demo",
        &[
            "usestate-hook",
            "useeffect-hook",
            "usereducer-hook",
            "usememo-hook",
            "usecallback-hook",
            "useref-hook",
            "custom-hooks",
        ],
    ),
    (
        "/context-demo",
        &[
            "usecontext-hook",
            "context-api",
            "state-patterns",
            "reducer-patterns",
        ],
    ),
    (
        "/performance",
        &[
            "react-memo",
            "usememo-hook",
            "usecallback-hook",
            "performance-optimization",
            "concurrent-features",
        ],
    ),
    (
        "/advanced-patterns",
        &[
            "higher-order-components",
            "render-props",
            "compound-components",
            "error-boundaries",
            "react-portals",
        ],
    ),
    (
        "/testing-examples",
        &[
            "component-testing",
            "hook-testing",
            "async-testing",
            "testing-strategies",
        ],
    ),
];
