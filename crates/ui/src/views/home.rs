use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::ProgressTracker;
use crate::vm::{LessonCardVm, map_lesson_cards};

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let cards = map_lesson_cards(ctx.topics().lessons());

    rsx! {
        div { class: "page",
            h2 { "Master React" }
            p { class: "page-lead",
                "Work through the lessons below and tick topics off as you learn them."
            }
            div { class: "lesson-grid",
                for card in cards {
                    LessonCard { key: "{card.slug}", card }
                }
            }
            ProgressTracker { route: None }
        }
    }
}

#[component]
fn LessonCard(card: LessonCardVm) -> Element {
    rsx! {
        div { class: "lesson-card",
            div { class: "lesson-card-header",
                h3 { "{card.title}" }
                span { class: card.level_class, "{card.level_label}" }
            }
            p { "{card.description}" }
            div { class: "topic-concepts",
                for concept in card.concepts.iter() {
                    span { class: "concept-pill", "{concept}" }
                }
            }
            Link { class: "lesson-link", to: Route::Lesson { slug: card.slug.clone() }, "Start learning →" }
        }
    }
}
