use dioxus::prelude::*;

use crate::app::context::use_registry;
use crate::components::input::{InputType, ValidatedInput};
use crate::components::layout::DialogFrame;
use crate::console_info;
use crate::features::donors::submission::submit_post_call;
use crate::features::donors::{CallResponse, PostCallForm, RegistryAction, RejectionKind};
use crate::services::client::Donor;
use crate::utils::platform::local_today;

#[derive(Props, PartialEq, Clone)]
pub struct PostCallDialogProps {
    pub donor: Donor,
}

/// Records the outcome of a call. Unmounting discards the form, so it
/// always reopens with its defaults.
#[component]
pub fn PostCallDialog(props: PostCallDialogProps) -> Element {
    let ctx = use_registry();
    let dispatch = ctx.dispatch;
    let donor = props.donor.clone();
    let mut form = use_signal(PostCallForm::default);
    let mut submitting = use_signal(|| false);
    let today = local_today();

    let on_submit = move |event: FormEvent| {
        event.prevent_default();
        let ctx = ctx.clone();
        let donor = donor.clone();
        let current = form();
        submitting.set(true);
        spawn(async move {
            match submit_post_call(&ctx.queries, &donor, &current, today).await {
                Ok(Some(toast)) => {
                    ctx.refresh();
                    ctx.notify(toast);
                    dispatch.call(RegistryAction::CloseDialog);
                }
                Ok(None) => {
                    console_info!("[Registry] Call to donor {} not attended", donor.id);
                    dispatch.call(RegistryAction::CloseDialog);
                }
                Err(e) => ctx.notify(e.toast()),
            }
            submitting.set(false);
        });
    };

    let response = form.read().response;
    let rejection = form.read().rejection;

    rsx! {
        DialogFrame {
            title: "Post-Call Response",
            description: format!("Record the outcome of your call with {}", props.donor.name),
            busy: submitting(),
            on_close: move |_| dispatch.call(RegistryAction::CloseDialog),
            form {
                class: "dialog-form",
                onsubmit: on_submit,

                fieldset {
                    class: "radio-group",
                    legend { class: "input-label", "Response" }
                    for option in CallResponse::ALL {
                        label {
                            key: "{option.value()}",
                            class: "radio-option",
                            input {
                                r#type: "radio",
                                name: "call-response",
                                value: "{option.value()}",
                                checked: response == option,
                                disabled: submitting(),
                                onchange: move |_| form.write().response = option,
                            }
                            "{option.label()}"
                        }
                    }
                }

                {match response {
                    CallResponse::Approved => rsx! {
                        div {
                            class: "outcome-panel outcome-approved",
                            ValidatedInput {
                                id: "appointment-date",
                                label: "Appointment Date *",
                                value: form.read().appointment_date.clone(),
                                input_type: InputType::Date,
                                min: today.to_string(),
                                disabled: submitting(),
                                on_change: move |value: String| form.write().appointment_date = value,
                            }
                            ValidatedInput {
                                id: "patient-name",
                                label: "Patient Name *",
                                value: form.read().patient_name.clone(),
                                placeholder: "Enter patient name",
                                disabled: submitting(),
                                on_change: move |value: String| form.write().patient_name = value,
                            }
                        }
                    },
                    CallResponse::Rejected => rsx! {
                        div {
                            class: "outcome-panel outcome-rejected",
                            fieldset {
                                class: "radio-group",
                                legend { class: "input-label", "Rejection Type" }
                                for kind in RejectionKind::ALL {
                                    label {
                                        key: "{kind.value()}",
                                        class: "radio-option",
                                        input {
                                            r#type: "radio",
                                            name: "rejection-kind",
                                            value: "{kind.value()}",
                                            checked: rejection == kind,
                                            disabled: submitting(),
                                            onchange: move |_| form.write().rejection = kind,
                                        }
                                        "{kind.label()}"
                                    }
                                }
                            }
                            if rejection == RejectionKind::Temporary {
                                ValidatedInput {
                                    id: "available-date",
                                    label: "Available Date *",
                                    value: form.read().available_date.clone(),
                                    input_type: InputType::Date,
                                    disabled: submitting(),
                                    on_change: move |value: String| form.write().available_date = value,
                                }
                            }
                        }
                    },
                    CallResponse::NotAttend => rsx! {
                        div {
                            class: "outcome-panel outcome-not-attend",
                            p { "No changes will be made to the donor's status." }
                        }
                    },
                }}

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
                        if submitting() { "Submitting..." } else { "Submit Response" }
                    }
                }
            }
        }
    }
}
