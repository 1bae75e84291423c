use dioxus::prelude::*;

use crate::features::donors::{RegistryAction, Section};

#[derive(Props, PartialEq, Clone)]
pub struct SectionGridProps {
    pub dispatch: EventHandler<RegistryAction>,
}

/// Dashboard landing view: one card per section
#[component]
pub fn SectionGrid(props: SectionGridProps) -> Element {
    let dispatch = props.dispatch;

    rsx! {
        div {
            class: "landing-actions",
            button {
                class: "primary-button",
                onclick: move |_| dispatch.call(RegistryAction::StartAddDonor),
                "+ Add Donor"
            }
        }
        div {
            class: "section-grid",
            for section in Section::ALL {
                button {
                    key: "{section.title()}",
                    class: "{section.css_class()}",
                    onclick: move |_| dispatch.call(RegistryAction::OpenSection(section)),
                    h3 { class: "section-card-title", "{section.title()}" }
                    p { class: "section-card-description", "{section.description()}" }
                }
            }
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct SectionHeaderProps {
    pub section: Section,
    pub dispatch: EventHandler<RegistryAction>,
    /// Optional primary action, e.g. "Add Donor"
    #[props(!optional)]
    pub action: Option<Element>,
}

#[component]
pub fn SectionHeader(props: SectionHeaderProps) -> Element {
    let dispatch = props.dispatch;

    rsx! {
        div {
            class: "section-header",
            button {
                class: "back-button",
                onclick: move |_| dispatch.call(RegistryAction::BackToSections),
                "← Back"
            }
            div {
                class: "section-heading",
                h2 { "{props.section.title()}" }
                p { class: "section-subtitle", "{props.section.description()}" }
            }
            if let Some(action) = props.action.clone() {
                div { class: "section-actions", {action} }
            }
        }
    }
}
