use dioxus::prelude::*;

use crate::app::context::use_registry;
use crate::components::forms::DonorFields;
use crate::components::layout::DialogFrame;
use crate::console_info;
use crate::features::donors::submission::submit_add_donor;
use crate::features::donors::{DonorForm, RegistryAction};

#[component]
pub fn AddDonorDialog() -> Element {
    let ctx = use_registry();
    let dispatch = ctx.dispatch;
    let form = use_signal(DonorForm::default);
    let mut submitting = use_signal(|| false);

    let on_submit = move |event: FormEvent| {
        event.prevent_default();
        let ctx = ctx.clone();
        let current = form();
        submitting.set(true);
        spawn(async move {
            match submit_add_donor(&ctx.queries, &current).await {
                Ok(toast) => {
                    console_info!("[Registry] Donor added: {}", current.name.trim());
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
            title: "Add New Donor",
            description: "Enter the details of the new blood donor.".to_string(),
            busy: submitting(),
            on_close: move |_| dispatch.call(RegistryAction::CloseDialog),
            form {
                class: "dialog-form",
                onsubmit: on_submit,
                DonorFields { form, id_prefix: "add-donor", disabled: submitting() }
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
                        if submitting() { "Adding..." } else { "Add Donor" }
                    }
                }
            }
        }
    }
}
