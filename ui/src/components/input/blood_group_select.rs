use dioxus::prelude::*;

use crate::services::client::BloodGroup;

#[derive(Props, PartialEq, Clone)]
pub struct BloodGroupSelectProps {
    #[props(into)]
    pub id: String,
    #[props(into)]
    pub label: String,
    /// Wire value of the selected group, `""` for none
    pub value: String,
    #[props(default = "Select blood group".to_string())]
    pub placeholder: String,
    /// Extra leading option as `(value, label)`, e.g. "Any Type"
    pub extra_option: Option<(String, String)>,
    #[props(default)]
    pub disabled: bool,
    pub on_change: EventHandler<String>,
}

#[component]
pub fn BloodGroupSelect(props: BloodGroupSelectProps) -> Element {
    rsx! {
        div {
            class: "input-section",
            label {
                class: "input-label",
                r#for: "{props.id}",
                "{props.label}"
            }
            select {
                id: "{props.id}",
                class: "input-field",
                value: "{props.value}",
                disabled: props.disabled,
                onchange: move |event| props.on_change.call(event.value()),
                option {
                    value: "",
                    disabled: true,
                    selected: props.value.is_empty(),
                    "{props.placeholder}"
                }
                if let Some((value, label)) = props.extra_option.clone() {
                    option {
                        selected: props.value == value,
                        value: "{value}",
                        "{label}"
                    }
                }
                for group in BloodGroup::ALL {
                    option {
                        key: "{group.as_wire()}",
                        value: "{group.as_wire()}",
                        selected: props.value == group.as_wire(),
                        "{group.description()}"
                    }
                }
            }
        }
    }
}
