use dioxus::prelude::*;

use crate::components::display::{EmptyState, ErrorState, LoadingIndicator};
use crate::services::client::{ClientResult, Donor};
use crate::services::queries::QueryState;

/// Loading, error and empty states around a donor list.
///
/// `render` only runs for a non-empty result.
pub fn render_donor_list(
    resource: &Resource<Option<ClientResult<Vec<Donor>>>>,
    empty_message: &str,
    render: impl FnOnce(Vec<Donor>) -> Element,
) -> Element {
    let state = QueryState::from_resource(resource.read().as_ref());
    match state {
        QueryState::Idle => rsx! {},
        QueryState::Loading => rsx! {
            LoadingIndicator { message: "Loading donors...".to_string() }
        },
        QueryState::Failed(message) => rsx! {
            ErrorState { title: "Could not load donors".to_string(), message }
        },
        QueryState::Ready(donors) if donors.is_empty() => rsx! {
            EmptyState { message: empty_message.to_string() }
        },
        QueryState::Ready(donors) => render(donors),
    }
}
