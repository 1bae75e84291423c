use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

use crate::app::context::use_registry;
use crate::features::donors::{RegistryAction, Toast, ToastKind};

/// Stack of transient notifications in the corner of the page
#[component]
pub fn ToastDisplay() -> Element {
    let ctx = use_registry();
    let toasts = ctx.state.read().toasts.clone();

    rsx! {
        div {
            class: "toast-container",
            for toast in toasts {
                ToastItem { key: "{toast.id}", toast: toast.clone() }
            }
        }
    }
}

#[derive(Props, PartialEq, Clone)]
struct ToastItemProps {
    toast: Toast,
}

#[component]
fn ToastItem(props: ToastItemProps) -> Element {
    let ctx = use_registry();
    let id = props.toast.id;
    let duration_ms = ctx.config.toast_duration_ms;
    let dispatch = ctx.dispatch;

    // Runs once per toast; the task is dropped with the component
    use_hook(move || {
        spawn(async move {
            TimeoutFuture::new(duration_ms).await;
            dispatch.call(RegistryAction::DismissToast(id));
        })
    });

    let class = match props.toast.message.kind {
        ToastKind::Success => "toast toast-success",
        ToastKind::Error => "toast toast-error",
    };

    rsx! {
        div {
            class: "{class}",
            role: "status",
            div {
                class: "toast-body",
                div { class: "toast-title", "{props.toast.message.title}" }
                if let Some(description) = &props.toast.message.description {
                    div { class: "toast-description", "{description}" }
                }
            }
            button {
                class: "toast-close",
                aria_label: "Dismiss",
                onclick: move |_| dispatch.call(RegistryAction::DismissToast(id)),
                "×"
            }
        }
    }
}
