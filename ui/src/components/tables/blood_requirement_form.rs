use dioxus::prelude::*;

use super::call_button::CallButton;
use super::list_body::render_donor_list;
use crate::app::context::use_donor_list;
use crate::components::display::{BloodGroupBadge, StatusBadgeView};
use crate::components::input::BloodGroupSelect;
use crate::features::donors::views::donor_rows;
use crate::features::donors::BloodGroupFilter;
use crate::utils::formatting::donor_count_label;

/// Finds donors for a required blood group. Nothing loads until a group
/// (or "Any Type") is chosen.
#[component]
pub fn BloodRequirementForm() -> Element {
    let mut filter = use_signal(BloodGroupFilter::default);
    let donors = use_donor_list(move || filter().query_key());

    rsx! {
        div {
            class: "requirement-form",
            BloodGroupSelect {
                id: "required-blood-group",
                label: "Required Blood Group",
                value: filter().select_value().to_string(),
                extra_option: (BloodGroupFilter::ANY_VALUE.to_string(), "Any Type".to_string()),
                on_change: move |value: String| filter.set(BloodGroupFilter::from_select_value(&value)),
            }
        }
        {render_donor_list(
            &donors,
            "No available donors found for this blood group.",
            |donors| {
                let count_label = donor_count_label(donors.len());
                let rows = donor_rows(&donors);
                rsx! {
                    div { class: "result-count", "{count_label}" }
                    div {
                        class: "table-container",
                        table {
                            class: "donor-table",
                            thead {
                                tr {
                                    th { "Name" }
                                    th { "Blood Group" }
                                    th { "Phone Number" }
                                    th { "Status" }
                                    th { class: "actions-column", "Actions" }
                                }
                            }
                            tbody {
                                for row in rows {
                                    tr {
                                        key: "{row.donor.id}",
                                        td { class: "donor-name", "{row.donor.name}" }
                                        td { BloodGroupBadge { blood_group: row.donor.blood_group } }
                                        td { class: "phone-number", "{row.donor.phone_number}" }
                                        td { StatusBadgeView { badge: row.status } }
                                        td {
                                            class: "actions-column",
                                            CallButton { donor: row.donor.clone() }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            },
        )}
    }
}
