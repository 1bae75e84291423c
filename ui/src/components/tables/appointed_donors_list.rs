use dioxus::prelude::*;

use super::call_button::CallButton;
use super::list_body::render_donor_list;
use crate::app::context::{use_donor_list, use_registry, RegistryContext};
use crate::components::display::BloodGroupBadge;
use crate::features::donors::submission::{submit_mark_donated, submit_mark_not_donated};
use crate::features::donors::views::appointed_rows;
use crate::services::client::Donor;
use crate::services::queries::QueryKey;

#[derive(Clone, Copy, PartialEq)]
enum DonationOutcome {
    Donated,
    NotDonated,
}

fn record_outcome(ctx: RegistryContext, donor: Donor, outcome: DonationOutcome, mut busy: Signal<bool>) {
    busy.set(true);
    spawn(async move {
        let result = match outcome {
            DonationOutcome::Donated => submit_mark_donated(&ctx.queries, &donor).await,
            DonationOutcome::NotDonated => submit_mark_not_donated(&ctx.queries, &donor).await,
        };
        match result {
            Ok(toast) => {
                ctx.refresh();
                ctx.notify(toast);
            }
            Err(e) => ctx.notify(e.toast()),
        }
        busy.set(false);
    });
}

/// Donors with an appointment, those most in need of a call first
#[component]
pub fn AppointedDonorsList() -> Element {
    let ctx = use_registry();
    let busy = use_signal(|| false);
    let donors = use_donor_list(|| Some(QueryKey::Appointed));

    render_donor_list(&donors, "No appointed donors at this time.", |donors| {
        let rows = appointed_rows(&donors);
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
                            th { "Appointment Date" }
                            th { "Patient Name" }
                            th { "Calls" }
                            th { "Last Called" }
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
                                td { "{row.appointment_date}" }
                                td { "{row.patient_name}" }
                                td { "{row.donor.call_count}" }
                                td { "{row.last_called}" }
                                td {
                                    class: "actions-column",
                                    CallButton { donor: row.donor.clone() }
                                    button {
                                        class: "primary-button",
                                        disabled: busy(),
                                        onclick: {
                                            let ctx = ctx.clone();
                                            let donor = row.donor.clone();
                                            move |_| record_outcome(ctx.clone(), donor.clone(), DonationOutcome::Donated, busy)
                                        },
                                        "Donated"
                                    }
                                    button {
                                        class: "secondary-button",
                                        disabled: busy(),
                                        onclick: {
                                            let ctx = ctx.clone();
                                            let donor = row.donor.clone();
                                            move |_| record_outcome(ctx.clone(), donor.clone(), DonationOutcome::NotDonated, busy)
                                        },
                                        "Not Donated"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    })
}
