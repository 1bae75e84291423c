use dioxus::prelude::*;

use crate::features::donors::views::{RejectionBadge, StatusBadge};
use crate::services::client::BloodGroup;

#[derive(Props, PartialEq, Clone)]
pub struct StatusBadgeViewProps {
    pub badge: StatusBadge,
}

#[component]
pub fn StatusBadgeView(props: StatusBadgeViewProps) -> Element {
    rsx! {
        span { class: "{props.badge.class()}", "{props.badge.label()}" }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct RejectionBadgeViewProps {
    pub badge: RejectionBadge,
}

#[component]
pub fn RejectionBadgeView(props: RejectionBadgeViewProps) -> Element {
    rsx! {
        span { class: "{props.badge.class()}", "{props.badge.label()}" }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct BloodGroupBadgeProps {
    pub blood_group: BloodGroup,
}

#[component]
pub fn BloodGroupBadge(props: BloodGroupBadgeProps) -> Element {
    rsx! {
        span { class: "badge badge-blood-group", "{props.blood_group.label()}" }
    }
}
