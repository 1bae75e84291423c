//! Operator sign-in.
//!
//! The identity provider is external; the operator pastes the principal it
//! issued, which is kept in sessionStorage and sent with every request.

use dioxus::prelude::*;

use crate::components::input::ValidatedInput;
use crate::features::donors::RegistryAction;
use crate::services::client::{OperatorIdentity, SessionManager};
use crate::{console_error, console_info};

#[derive(Props, PartialEq, Clone)]
pub struct LoginFormProps {
    pub session: SessionManager,
    pub dispatch: EventHandler<RegistryAction>,
}

#[component]
pub fn LoginForm(props: LoginFormProps) -> Element {
    let dispatch = props.dispatch;
    let session = props.session.clone();
    let mut principal = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);

    let on_submit = move |event: FormEvent| {
        event.prevent_default();
        let identity = OperatorIdentity::new(&principal());
        if identity.is_anonymous() {
            error.set(Some("The anonymous principal cannot manage donors".to_string()));
            return;
        }
        match session.store_identity(&identity) {
            Ok(()) => {
                console_info!("[Auth] Signed in as {}", identity.principal);
                error.set(None);
                dispatch.call(RegistryAction::SignIn(identity));
            }
            Err(e) => {
                console_error!("[Auth] Sign-in refused: {}", e);
                error.set(Some(e.user_message()));
            }
        }
    };

    rsx! {
        div {
            class: "login-container",
            h2 { class: "form-title", "Blood Donor Registry" }
            p { class: "login-subtitle", "Sign in to manage donors" }
            form {
                class: "login-form",
                onsubmit: on_submit,
                ValidatedInput {
                    id: "principal",
                    label: "Principal",
                    value: principal(),
                    placeholder: "xxxxx-xxxxx-xxxxx-xxxxx-cai",
                    on_change: move |value: String| principal.set(value),
                }
                if let Some(message) = error() {
                    div { class: "validation-result error", "{message}" }
                }
                button {
                    r#type: "submit",
                    class: "login-button",
                    disabled: principal().trim().is_empty(),
                    "Sign In"
                }
            }
        }
    }
}
