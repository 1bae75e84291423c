use dioxus::prelude::*;
use time::OffsetDateTime;

use super::list_body::render_donor_list;
use crate::app::context::{use_donor_list, use_registry};
use crate::components::display::RejectionBadgeView;
use crate::features::donors::views::temp_rejected_rows;
use crate::services::queries::QueryKey;

#[component]
pub fn TempRejectedDonorsList() -> Element {
    let window = use_registry().config.donated_window();
    let donors = use_donor_list(|| Some(QueryKey::TempRejected));

    render_donor_list(
        &donors,
        "No temporarily rejected donors at this time.",
        |donors| {
            let rows = temp_rejected_rows(&donors, OffsetDateTime::now_utc(), &window);
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
                                th { "Available Date" }
                                th { "Reason" }
                            }
                        }
                        tbody {
                            for row in rows {
                                tr {
                                    key: "{row.id}",
                                    td { class: "donor-name", "{row.name}" }
                                    td { span { class: "badge badge-blood-group", "{row.blood_group}" } }
                                    td { class: "phone-number", "{row.phone_number}" }
                                    td { "{row.available_date}" }
                                    td { RejectionBadgeView { badge: row.badge } }
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}
