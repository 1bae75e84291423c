use dioxus::prelude::*;

use super::call_button::CallButton;
use super::list_body::render_donor_list;
use crate::app::context::{use_donor_list, use_registry};
use crate::components::display::{BloodGroupBadge, StatusBadgeView};
use crate::features::donors::views::donor_rows;
use crate::features::donors::RegistryAction;
use crate::services::queries::QueryKey;

/// Every registered donor with call, edit and delete actions
#[component]
pub fn DonorTable() -> Element {
    let dispatch = use_registry().dispatch;
    let donors = use_donor_list(|| Some(QueryKey::AllDonors));

    render_donor_list(
        &donors,
        "No donors found. Add your first donor to get started.",
        |donors| {
            let rows = donor_rows(&donors);
            rsx! {
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
                                        button {
                                            class: "secondary-button",
                                            onclick: {
                                                let donor = row.donor.clone();
                                                move |_| dispatch.call(RegistryAction::OpenEditDonor(donor.clone()))
                                            },
                                            "Edit"
                                        }
                                        button {
                                            class: "danger-button",
                                            onclick: {
                                                let donor = row.donor.clone();
                                                move |_| dispatch.call(RegistryAction::OpenDeleteDonor(donor.clone()))
                                            },
                                            "Delete"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}
