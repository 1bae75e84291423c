use dioxus::prelude::*;

#[derive(PartialEq, Clone, Copy, Debug)]
pub enum InputType {
    Text,
    Tel,
    Date,
}

impl InputType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputType::Text => "text",
            InputType::Tel => "tel",
            InputType::Date => "date",
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct ValidatedInputProps {
    #[props(into)]
    pub id: String,
    #[props(into)]
    pub label: String,
    pub value: String,
    #[props(default, into)]
    pub placeholder: String,
    #[props(default = InputType::Text)]
    pub input_type: InputType,
    /// `min` attribute for date inputs (`YYYY-MM-DD`)
    pub min: Option<String>,
    #[props(default)]
    pub disabled: bool,
    pub on_change: EventHandler<String>,
}

/// Labelled controlled input
#[component]
pub fn ValidatedInput(props: ValidatedInputProps) -> Element {
    rsx! {
        div {
            class: "input-section",
            label {
                class: "input-label",
                r#for: "{props.id}",
                "{props.label}"
            }
            input {
                id: "{props.id}",
                class: "input-field",
                r#type: "{props.input_type.as_str()}",
                value: "{props.value}",
                placeholder: "{props.placeholder}",
                min: props.min.clone(),
                disabled: props.disabled,
                oninput: move |event| props.on_change.call(event.value())
            }
        }
    }
}
