use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::context::AppContext;
use crate::views::{HomeView, LessonView, NotFoundView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/:slug", LessonView)] Lesson { slug: String },
    #[end_layout]
    #[route("/:..segments", NotFoundView)] NotFound { segments: Vec<String> },
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            Sidebar {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Sidebar() -> Element {
    let ctx = use_context::<AppContext>();
    let lessons = ctx.topics().lessons();

    rsx! {
        nav { class: "sidebar",
            h1 { "React Master" }
            ul {
                li { Link { to: Route::Home {}, "Home" } }
                for lesson in lessons {
                    li { key: "{lesson.route()}",
                        Link {
                            to: Route::Lesson { slug: lesson.route().trim_start_matches('/').to_owned() },
                            "{lesson.title()}"
                        }
                    }
                }
            }
        }
    }
}
