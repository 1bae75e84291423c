use dioxus::prelude::*;

use crate::app::context::use_registry;
use crate::components::forms::DonorFields;
use crate::components::layout::DialogFrame;
use crate::features::donors::submission::submit_edit_donor;
use crate::features::donors::{DonorForm, RegistryAction};
use crate::services::client::Donor;

#[derive(Props, PartialEq, Clone)]
pub struct EditDonorDialogProps {
    pub donor: Donor,
}

#[component]
pub fn EditDonorDialog(props: EditDonorDialogProps) -> Element {
    let ctx = use_registry();
    let dispatch = ctx.dispatch;
    let donor = props.donor.clone();
    let form = use_signal(|| DonorForm::from_donor(&props.donor));
    let mut submitting = use_signal(|| false);

    let on_submit = move |event: FormEvent| {
        event.prevent_default();
        let ctx = ctx.clone();
        let donor = donor.clone();
        let current = form();
        submitting.set(true);
        spawn(async move {
            match submit_edit_donor(&ctx.queries, &donor, &current).await {
                Ok(toast) => {
                    ctx.refresh();
                    ctx.notify(toast);
                    dispatch.call(RegistryAction::CloseDialog);
                }
                Err(e) => ctx.notify(e.toast()),
            }
            submitting.set(false);
        });
    };

    rsx! {
        DialogFrame {
            title: "Edit Donor",
            description: "Update the donor's information.".to_string(),
            busy: submitting(),
            on_close: move |_| dispatch.call(RegistryAction::CloseDialog),
            form {
                class: "dialog-form",
                onsubmit: on_submit,
                DonorFields { form, id_prefix: "edit-donor", disabled: submitting() }
                div {
                    class: "dialog-actions",
                    button {
                        r#type: "button",
                        class: "secondary-button",
                        disabled: submitting(),
                        onclick: move |_| dispatch.call(RegistryAction::CloseDialog),
                        "Cancel"
                    }
                    button {
                        r#type: "submit",
                        class: "primary-button",
                        disabled: submitting(),
                        if submitting() { "Saving..." } else { "Save Changes" }
                    }
                }
            }
        }
    }
}
