use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct DialogFrameProps {
    #[props(into)]
    pub title: String,
    pub description: Option<String>,
    /// Closing is refused while a request is in flight
    #[props(default)]
    pub busy: bool,
    pub on_close: EventHandler<()>,
    pub children: Element,
}

/// Modal overlay shared by every dialog
#[component]
pub fn DialogFrame(props: DialogFrameProps) -> Element {
    let busy = props.busy;
    let on_close = props.on_close;

    rsx! {
        div {
            class: "dialog-overlay",
            onclick: move |_| {
                if !busy {
                    on_close.call(());
                }
            },
            div {
                class: "dialog",
                role: "dialog",
                aria_modal: "true",
                onclick: move |event| event.stop_propagation(),
                div {
                    class: "dialog-header",
                    h2 { class: "dialog-title", "{props.title}" }
                    if let Some(description) = &props.description {
                        p { class: "dialog-description", "{description}" }
                    }
                }
                {props.children}
            }
        }
    }
}
