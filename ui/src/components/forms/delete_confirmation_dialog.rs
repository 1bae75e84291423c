use dioxus::prelude::*;

use crate::app::context::use_registry;
use crate::components::layout::DialogFrame;
use crate::features::donors::submission::submit_delete_donor;
use crate::features::donors::RegistryAction;
use crate::services::client::Donor;

#[derive(Props, PartialEq, Clone)]
pub struct DeleteConfirmationDialogProps {
    pub donor: Donor,
}

#[component]
pub fn DeleteConfirmationDialog(props: DeleteConfirmationDialogProps) -> Element {
    let ctx = use_registry();
    let dispatch = ctx.dispatch;
    let donor = props.donor.clone();
    let mut deleting = use_signal(|| false);

    let on_delete = move |_| {
        let ctx = ctx.clone();
        let donor = donor.clone();
        deleting.set(true);
        spawn(async move {
            match submit_delete_donor(&ctx.queries, &donor).await {
                Ok(toast) => {
                    ctx.refresh();
                    ctx.notify(toast);
                    dispatch.call(RegistryAction::CloseDialog);
                }
                Err(e) => ctx.notify(e.toast()),
            }
            deleting.set(false);
        });
    };

    rsx! {
        DialogFrame {
            title: "Are you absolutely sure?",
            busy: deleting(),
            on_close: move |_| dispatch.call(RegistryAction::CloseDialog),
            p {
                class: "dialog-description",
                "This action cannot be undone. This will permanently delete "
                strong { "{props.donor.name}" }
                " from the donor database."
            }
            div {
                class: "dialog-actions",
                button {
                    class: "secondary-button",
                    disabled: deleting(),
                    onclick: move |_| dispatch.call(RegistryAction::CloseDialog),
                    "Cancel"
                }
                button {
                    class: "danger-button",
                    disabled: deleting(),
                    onclick: on_delete,
                    if deleting() { "Deleting..." } else { "Delete" }
                }
            }
        }
    }
}
