use dioxus::prelude::*;

use crate::app::context::use_registry;
use crate::features::donors::submission::submit_record_call;
use crate::features::donors::RegistryAction;
use crate::services::client::Donor;
use crate::utils::platform::open_dialer;

#[derive(Props, PartialEq, Clone)]
pub struct CallButtonProps {
    pub donor: Donor,
}

/// Dials the donor, records the call and opens the post-call form.
///
/// The form opens even when recording fails; the failure is reported as a toast.
#[component]
pub fn CallButton(props: CallButtonProps) -> Element {
    let ctx = use_registry();
    let dispatch = ctx.dispatch;
    let donor = props.donor.clone();
    let mut calling = use_signal(|| false);

    rsx! {
        button {
            class: "call-button",
            disabled: calling(),
            onclick: move |_| {
                let ctx = ctx.clone();
                let donor = donor.clone();
                open_dialer(&donor.phone_number);
                calling.set(true);
                spawn(async move {
                    match submit_record_call(&ctx.queries, &donor).await {
                        Ok(()) => ctx.refresh(),
                        Err(e) => ctx.notify(e.toast()),
                    }
                    calling.set(false);
                    dispatch.call(RegistryAction::OpenPostCall(donor));
                });
            },
            "📞 Call"
        }
    }
}
