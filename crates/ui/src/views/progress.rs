use dioxus::prelude::*;
use mastery_core::model::TopicId;

use crate::context::AppContext;
use crate::views::{ViewState, view_state_from_resource};
use crate::vm::{CategoryTallyVm, ProgressVm, TopicRowVm, map_progress};

/// Checklist of every catalog topic with overall and per-category progress.
///
/// `route` scopes the "Current" highlight to the topics a lesson page covers.
#[component]
pub fn ProgressTracker(#[props(!optional)] route: Option<String>) -> Element {
    let ctx = use_context::<AppContext>();
    let progress = ctx.progress();
    let topics = ctx.topics();

    let mut snapshot = use_resource(move || {
        let progress = progress.clone();
        async move { progress.snapshot().await }
    });

    let progress_for_toggle = ctx.progress();
    let on_toggle = use_callback(move |id: TopicId| {
        let progress = progress_for_toggle.clone();
        tracing::debug!(topic = %id, "toggle requested from tracker");
        spawn(async move {
            progress.toggle(&id).await;
            snapshot.restart();
        });
    });

    let progress_for_reset = ctx.progress();
    let on_reset = use_callback(move |()| {
        let progress = progress_for_reset.clone();
        spawn(async move {
            progress.reset().await;
            snapshot.restart();
        });
    });

    let highlighted = route
        .as_deref()
        .map(|route| topics.topic_ids_for_route(route).to_vec())
        .unwrap_or_default();

    let state = match view_state_from_resource(&snapshot) {
        ViewState::Ready(data) => {
            ViewState::Ready(map_progress(topics.catalog(), &data, &highlighted))
        }
        ViewState::Loading => ViewState::Loading,
        ViewState::Idle => ViewState::Idle,
    };

    rsx! {
        section { class: "progress-card",
            match state {
                ViewState::Ready(vm) => rsx! {
                    ProgressPanel { vm, on_toggle, on_reset }
                },
                ViewState::Loading | ViewState::Idle => rsx! {
                    p { "Loading progress..." }
                },
            }
        }
    }
}

#[component]
pub fn ProgressPanel(
    vm: ProgressVm,
    on_toggle: Callback<TopicId>,
    on_reset: Callback<()>,
) -> Element {
    let mut confirm_reset = use_signal(|| false);
    let has_progress = vm.completed > 0;

    rsx! {
        div { class: "progress-header",
            h2 { "📊 Learning Progress" }
            if has_progress {
                if confirm_reset() {
                    span { class: "progress-reset-confirm",
                        "Reset all progress? "
                        button {
                            class: "btn btn-danger",
                            r#type: "button",
                            onclick: move |_| {
                                confirm_reset.set(false);
                                on_reset.call(());
                            },
                            "Reset"
                        }
                        button {
                            class: "btn",
                            r#type: "button",
                            onclick: move |_| confirm_reset.set(false),
                            "Cancel"
                        }
                    }
                } else {
                    button {
                        class: "btn",
                        r#type: "button",
                        onclick: move |_| confirm_reset.set(true),
                        "Reset Progress"
                    }
                }
            }
        }

        div { class: "progress-overall",
            div { class: "progress-overall-row",
                span { "Overall Progress" }
                strong { class: "progress-percentage", "{vm.percentage_label()}" }
            }
            div { class: "progress-track",
                div { class: "progress-fill", style: "width: {vm.bar_width()}%" }
            }
            p { class: "progress-summary", "{vm.summary_label()}" }
        }

        div { class: "progress-categories",
            for tally in vm.categories.iter().cloned() {
                CategoryTally { key: "{tally.label}", tally }
            }
        }

        if let Some(milestone) = vm.milestone {
            div { class: milestone.class(),
                p { "{milestone.message()}" }
                p { "{milestone.detail()}" }
            }
        }

        div { class: "topic-list",
            for row in vm.topics.iter().cloned() {
                TopicRow { key: "{row.id}", row, on_toggle }
            }
        }
    }
}

#[component]
fn CategoryTally(tally: CategoryTallyVm) -> Element {
    rsx! {
        div { class: "progress-category",
            div { class: "progress-category-count", "{tally.completed}/{tally.total}" }
            div { class: "progress-category-label", "{tally.label}" }
        }
    }
}

#[component]
fn TopicRow(row: TopicRowVm, on_toggle: Callback<TopicId>) -> Element {
    let id = row.id.clone();
    let row_class = if row.current {
        "topic-row topic-row--current"
    } else {
        "topic-row"
    };
    let title_class = if row.completed {
        "topic-title topic-title--done"
    } else {
        "topic-title"
    };
    let mark = if row.completed { "✅" } else { "⬜" };
    let overflow = row.overflow_label();

    rsx! {
        div { class: row_class,
            button {
                class: "topic-toggle",
                r#type: "button",
                title: row.toggle_label(),
                onclick: move |_| on_toggle.call(id.clone()),
                "{mark}"
            }
            div { class: "topic-body",
                div { class: "topic-heading",
                    span { class: title_class, "{row.title}" }
                    span { class: row.category_class, "{row.category_label}" }
                    if row.current {
                        span { class: "badge badge--current", "Current" }
                    }
                }
                p { class: "topic-description", "{row.description}" }
                div { class: "topic-concepts",
                    for concept in row.concepts.iter() {
                        span { class: "concept-pill", "{concept}" }
                    }
                    if let Some(more) = overflow {
                        span { class: "concept-pill", "{more}" }
                    }
                }
            }
        }
    }
}
