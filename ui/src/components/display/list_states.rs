use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct EmptyStateProps {
    pub message: String,
}

#[component]
pub fn EmptyState(props: EmptyStateProps) -> Element {
    rsx! {
        div {
            class: "empty-state",
            "{props.message}"
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct ErrorStateProps {
    pub title: String,
    pub message: String,
}

#[component]
pub fn ErrorState(props: ErrorStateProps) -> Element {
    rsx! {
        div {
            class: "error-state",
            div { class: "error-title", "{props.title}" }
            div { class: "error-message", "{props.message}" }
        }
    }
}
