//! The compiled-in topic catalog and lesson list.
//!
//! Both are immutable for the process lifetime. Custom catalogs (tests, other
//! courses) go through [`Catalog::new`], which enforces unique topic ids.

use std::collections::HashMap;
use std::sync::LazyLock;

use thiserror::Error;

use crate::model::{Category, Lesson, Topic, TopicId};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("duplicate topic id: {0}")]
    DuplicateId(TopicId),
}

/// Ordered, read-only collection of topics with unique ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    topics: Vec<Topic>,
    positions: HashMap<TopicId, usize>,
}

impl Catalog {
    /// Build a catalog preserving the given order.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::DuplicateId` if two topics share an id.
    pub fn new(topics: Vec<Topic>) -> Result<Self, CatalogError> {
        let mut positions = HashMap::with_capacity(topics.len());
        for (index, topic) in topics.iter().enumerate() {
            if positions.insert(topic.id().clone(), index).is_some() {
                return Err(CatalogError::DuplicateId(topic.id().clone()));
            }
        }
        Ok(Self { topics, positions })
    }

    /// An empty catalog.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            topics: Vec::new(),
            positions: HashMap::new(),
        }
    }

    /// The catalog shipped with the application.
    #[must_use]
    pub fn builtin() -> &'static Catalog {
        &BUILTIN_CATALOG
    }

    #[must_use]
    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.topics.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Topic> {
        self.positions.get(id).map(|&index| &self.topics[index])
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.positions.contains_key(id)
    }

    /// Topics of one category, in catalog order.
    pub fn in_category(&self, category: Category) -> impl Iterator<Item = &Topic> {
        self.topics
            .iter()
            .filter(move |topic| topic.category() == category)
    }
}

/// Lessons shown on the landing page, in display order.
#[must_use]
pub fn builtin_lessons() -> &'static [Lesson] {
    &BUILTIN_LESSONS
}

//
// ─── SEED DATA ─────────────────────────────────────────────────────────────────
//

pub(crate) struct TopicSeed {
    pub(crate) id: &'static str,
    pub(crate) title: &'static str,
    pub(crate) description: &'static str,
    pub(crate) category: Category,
    pub(crate) concepts: &'static [&'static str],
}

pub(crate) struct LessonSeed {
    pub(crate) title: &'static str,
    pub(crate) description: &'static str,
    pub(crate) level: Category,
    pub(crate) concepts: &'static [&'static str],
    pub(crate) route: &'static str,
}

static BUILTIN_CATALOG: LazyLock<Catalog> = LazyLock::new(|| {
    let topics: Vec<Topic> = TOPIC_SEEDS.iter().map(Topic::from_seed).collect();
    let positions = topics
        .iter()
        .enumerate()
        .map(|(index, topic)| (topic.id().clone(), index))
        .collect();
    Catalog { topics, positions }
});

static BUILTIN_LESSONS: LazyLock<Vec<Lesson>> =
    LazyLock::new(|| LESSON_SEEDS.iter().map(Lesson::from_seed).collect());

const TOPIC_SEEDS: &[TopicSeed] = &[
    // Basic concepts
    TopicSeed {
        id: "components-props",
        title: "Components & Props",
        description: "Learn to create reusable components and pass data with props",
        category: Category::Beginner,
        concepts: &["Functional Components", "Props", "JSX", "Component Composition"],
    },
    TopicSeed {
        id: "state-events",
        title: "State & Events",
        description: "Manage component state and handle user interactions",
        category: Category::Beginner,
        concepts: &["useState", "Event Handlers", "Controlled Components"],
    },
    TopicSeed {
        id: "conditional-rendering",
        title: "Conditional Rendering",
        description: "Show/hide elements based on conditions and state",
        category: Category::Beginner,
        concepts: &["Ternary Operator", "Logical AND", "If Statements"],
    },
    TopicSeed {
        id: "lists-keys",
        title: "Lists & Keys",
        description: "Render dynamic lists with proper key management",
        category: Category::Beginner,
        concepts: &["map()", "Keys", "Dynamic Rendering", "List Updates"],
    },
    TopicSeed {
        id: "forms-inputs",
        title: "Forms & Inputs",
        description: "Build interactive forms with controlled inputs",
        category: Category::Beginner,
        concepts: &["Controlled Inputs", "Form Validation", "Form Submission"],
    },
    // Hooks
    TopicSeed {
        id: "usestate-hook",
        title: "useState Hook",
        description: "Master state management in functional components",
        category: Category::Intermediate,
        concepts: &["State Updates", "Functional Updates", "State Batching"],
    },
    TopicSeed {
        id: "useeffect-hook",
        title: "useEffect Hook",
        description: "Handle side effects and component lifecycle",
        category: Category::Intermediate,
        concepts: &["Side Effects", "Cleanup", "Dependencies", "Lifecycle"],
    },
    TopicSeed {
        id: "usecontext-hook",
        title: "useContext Hook",
        description: "Access context values without prop drilling",
        category: Category::Intermediate,
        concepts: &["Context API", "Provider", "Consumer", "Global State"],
    },
    TopicSeed {
        id: "usereducer-hook",
        title: "useReducer Hook",
        description: "Manage complex state logic with reducers",
        category: Category::Intermediate,
        concepts: &["Reducers", "Actions", "Complex State", "State Machines"],
    },
    TopicSeed {
        id: "usememo-hook",
        title: "useMemo Hook",
        description: "Optimize expensive calculations with memoization",
        category: Category::Advanced,
        concepts: &["Memoization", "Performance", "Dependencies", "Optimization"],
    },
    TopicSeed {
        id: "usecallback-hook",
        title: "useCallback Hook",
        description: "Memoize function references for performance",
        category: Category::Advanced,
        concepts: &["Function Memoization", "Re-renders", "Performance"],
    },
    TopicSeed {
        id: "useref-hook",
        title: "useRef Hook",
        description: "Access DOM elements and persist mutable values",
        category: Category::Intermediate,
        concepts: &["DOM References", "Mutable Values", "Imperative API"],
    },
    TopicSeed {
        id: "custom-hooks",
        title: "Custom Hooks",
        description: "Create reusable stateful logic with custom hooks",
        category: Category::Advanced,
        concepts: &["Hook Composition", "Reusable Logic", "State Encapsulation"],
    },
    // Context & state management
    TopicSeed {
        id: "context-api",
        title: "Context API",
        description: "Share state across component trees without prop drilling",
        category: Category::Intermediate,
        concepts: &["Context Provider", "Context Consumer", "Global State"],
    },
    TopicSeed {
        id: "state-patterns",
        title: "State Management Patterns",
        description: "Advanced patterns for managing application state",
        category: Category::Advanced,
        concepts: &["State Machines", "Flux Pattern", "State Normalization"],
    },
    TopicSeed {
        id: "reducer-patterns",
        title: "Reducer Patterns",
        description: "Complex state updates with reducer patterns",
        category: Category::Advanced,
        concepts: &["Action Creators", "State Immutability", "Reducer Composition"],
    },
    // Performance
    TopicSeed {
        id: "react-memo",
        title: "React.memo",
        description: "Prevent unnecessary re-renders with memoization",
        category: Category::Advanced,
        concepts: &["Component Memoization", "Shallow Comparison", "Re-renders"],
    },
    TopicSeed {
        id: "performance-optimization",
        title: "Performance Optimization",
        description: "Techniques to optimize React application performance",
        category: Category::Advanced,
        concepts: &["Bundle Splitting", "Lazy Loading", "Performance Profiling"],
    },
    TopicSeed {
        id: "concurrent-features",
        title: "Concurrent Features",
        description: "Use React 18 concurrent features for better UX",
        category: Category::Advanced,
        concepts: &["Concurrent Rendering", "Suspense", "Time Slicing"],
    },
    // Advanced patterns
    TopicSeed {
        id: "higher-order-components",
        title: "Higher-Order Components",
        description: "Enhance components with additional functionality",
        category: Category::Advanced,
        concepts: &["HOCs", "Component Enhancement", "Code Reuse"],
    },
    TopicSeed {
        id: "render-props",
        title: "Render Props",
        description: "Share code between components using render props",
        category: Category::Advanced,
        concepts: &["Function as Children", "Dynamic Rendering", "Code Sharing"],
    },
    TopicSeed {
        id: "compound-components",
        title: "Compound Components",
        description: "Create flexible, composable component APIs",
        category: Category::Advanced,
        concepts: &["Component Composition", "Flexible APIs", "Design Patterns"],
    },
    TopicSeed {
        id: "error-boundaries",
        title: "Error Boundaries",
        description: "Gracefully handle errors in React component trees",
        category: Category::Advanced,
        concepts: &["Error Handling", "Fallback UI", "Error Recovery"],
    },
    TopicSeed {
        id: "react-portals",
        title: "React Portals",
        description: "Render components outside the normal component tree",
        category: Category::Advanced,
        concepts: &["DOM Portals", "Modal Rendering", "Event Bubbling"],
    },
    // Testing
    TopicSeed {
        id: "component-testing",
        title: "Component Testing",
        description: "Test React components behavior and interactions",
        category: Category::Advanced,
        concepts: &["Unit Testing", "Integration Testing", "Test Utilities"],
    },
    TopicSeed {
        id: "hook-testing",
        title: "Hook Testing",
        description: "Test custom hooks in isolation",
        category: Category::Advanced,
        concepts: &["Hook Testing", "Test Isolation", "Mock Dependencies"],
    },
    TopicSeed {
        id: "async-testing",
        title: "Async Testing",
        description: "Test components with async operations and API calls",
        category: Category::Advanced,
        concepts: &["Async Testing", "Mock APIs", "Testing Library"],
    },
    TopicSeed {
        id: "testing-strategies",
        title: "Testing Strategies",
        description: "Comprehensive testing approaches for React apps",
        category: Category::Advanced,
        concepts: &["Test Pyramid", "E2E Testing", "Visual Testing"],
    },
];

const LESSON_SEEDS: &[LessonSeed] = &[
    LessonSeed {
        title: "Basic Concepts",
        description: "Master the fundamentals of React development",
        level: Category::Beginner,
        concepts: &["Components", "Props", "State", "Events", "Conditional Rendering", "Lists"],
        route: "/basic-concepts",
    },
    LessonSeed {
        title: "React Hooks",
        description: "Deep dive into React Hooks and state management",
        level: Category::Intermediate,
        concepts: &["useState", "useEffect", "useContext", "useReducer", "Custom Hooks"],
        route: "/hooks-demo",
    },
    LessonSeed {
        title: "Context & State",
        description: "Advanced state management and data flow patterns",
        level: Category::Intermediate,
        concepts: &["Context API", "Reducers", "Global State", "State Patterns"],
        route: "/context-demo",
    },
    LessonSeed {
        title: "Performance",
        description: "Optimization techniques and performance best practices",
        level: Category::Advanced,
        concepts: &["React.memo", "useMemo", "useCallback", "Code Splitting", "Lazy Loading"],
        route: "/performance",
    },
    LessonSeed {
        title: "Advanced Patterns",
        description: "Expert-level React patterns and architectures",
        level: Category::Advanced,
        concepts: &["HOCs", "Render Props", "Compound Components", "Portals", "Error Boundaries"],
        route: "/advanced-patterns",
    },
    LessonSeed {
        title: "Testing",
        description: "Comprehensive testing strategies for React applications",
        level: Category::Advanced,
        concepts: &["Unit Tests", "Integration Tests", "Mocking", "Testing Hooks"],
        route: "/testing-examples",
    },
    LessonSeed {
        title: "Next.js Fundamentals",
        description: "File-based routing, layouts, and project structure",
        level: Category::Beginner,
        concepts: &["File-based Routing", "Layouts", "Navigation", "Project Setup"],
        route: "/nextjs-fundamentals",
    },
    LessonSeed {
        title: "Data Fetching",
        description: "SSR, SSG, ISR, and client-side data fetching patterns",
        level: Category::Intermediate,
        concepts: &["SSR", "SSG", "ISR", "Client-Side Fetching", "SWR"],
        route: "/nextjs-data-fetching",
    },
];
