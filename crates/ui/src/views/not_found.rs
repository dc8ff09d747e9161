use dioxus::prelude::*;
use dioxus_router::Link;

use crate::routes::Route;

#[component]
pub fn NotFoundView(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    rsx! { NotFoundContent { path } }
}

#[component]
pub fn NotFoundContent(path: String) -> Element {
    rsx! {
        div { class: "page page--not-found",
            h2 { "404" }
            p { "Nothing lives at {path}." }
            Link { to: Route::Home {}, "Go back home" }
        }
    }
}
