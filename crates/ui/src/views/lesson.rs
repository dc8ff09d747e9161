use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{NotFoundContent, ProgressTracker};
use crate::vm::LessonCardVm;

/// A lesson page. The tracker below it highlights the topics this page covers.
#[component]
pub fn LessonView(slug: String) -> Element {
    let ctx = use_context::<AppContext>();
    let topics = ctx.topics();
    let route = format!("/{slug}");

    let Some(lesson) = topics.lesson_for_route(&route).map(LessonCardVm::from) else {
        return rsx! { NotFoundContent { path: route } };
    };
    let covered: Vec<String> = topics
        .topics_for_route(&route)
        .into_iter()
        .map(|topic| topic.title().to_owned())
        .collect();

    rsx! {
        div { class: "page",
            Link { class: "back-link", to: Route::Home {}, "← All lessons" }
            div { class: "lesson-header",
                h2 { "{lesson.title}" }
                span { class: lesson.level_class, "{lesson.level_label}" }
            }
            p { class: "page-lead", "{lesson.description}" }
            if !covered.is_empty() {
                div { class: "lesson-covers",
                    h3 { "Topics on this page" }
                    ul {
                        for title in covered {
                            li { key: "{title}", "{title}" }
                        }
                    }
                }
            }
            ProgressTracker { route: Some(route.clone()) }
        }
    }
}
