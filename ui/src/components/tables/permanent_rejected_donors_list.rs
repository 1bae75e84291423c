use dioxus::prelude::*;

use super::list_body::render_donor_list;
use crate::app::context::use_donor_list;
use crate::features::donors::views::permanent_rejected_rows;
use crate::services::queries::QueryKey;

#[component]
pub fn PermanentRejectedDonorsList() -> Element {
    let donors = use_donor_list(|| Some(QueryKey::PermanentlyRejected));

    render_donor_list(
        &donors,
        "No permanently rejected donors at this time.",
        |donors| {
            let rows = permanent_rejected_rows(&donors);
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
                            }
                        }
                        tbody {
                            for row in rows {
                                tr {
                                    key: "{row.id}",
                                    td { class: "donor-name", "{row.name}" }
                                    td { span { class: "badge badge-blood-group", "{row.blood_group}" } }
                                    td { class: "phone-number", "{row.phone_number}" }
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}
