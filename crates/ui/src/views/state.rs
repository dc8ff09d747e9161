use dioxus::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub enum ViewState<T> {
    Idle,
    Loading,
    Ready(T),
}

/// Collapse a resource into what the view should draw.
///
/// A restarted resource keeps its last value, so the view shows stale data
/// instead of flashing a loading state between mutations.
#[must_use]
pub fn view_state_from_resource<T: Clone>(resource: &Resource<T>) -> ViewState<T> {
    if let Some(data) = resource.value().read().as_ref() {
        return ViewState::Ready(data.clone());
    }
    match resource.state().cloned() {
        UseResourceState::Pending | UseResourceState::Ready => ViewState::Loading,
        UseResourceState::Paused | UseResourceState::Stopped => ViewState::Idle,
    }
}
