use dioxus::prelude::*;

use crate::components::input::{BloodGroupSelect, InputType, ValidatedInput};
use crate::features::donors::DonorForm;

#[derive(Props, PartialEq, Clone)]
pub struct DonorFieldsProps {
    pub form: Signal<DonorForm>,
    /// Prefix for element ids so two dialogs never share one
    #[props(into)]
    pub id_prefix: String,
    pub disabled: bool,
}

/// Name, blood group and phone inputs bound to a [`DonorForm`]
#[component]
pub fn DonorFields(props: DonorFieldsProps) -> Element {
    let mut form = props.form;
    let prefix = props.id_prefix.clone();

    rsx! {
        ValidatedInput {
            id: format!("{}-name", prefix),
            label: "Name",
            value: form.read().name.clone(),
            placeholder: "Enter donor name",
            disabled: props.disabled,
            on_change: move |name: String| form.write().name = name,
        }
        BloodGroupSelect {
            id: format!("{}-blood-group", prefix),
            label: "Blood Group",
            value: form.read().blood_group_value().to_string(),
            disabled: props.disabled,
            on_change: move |value: String| form.write().set_blood_group(&value),
        }
        ValidatedInput {
            id: format!("{}-phone", prefix),
            label: "Phone Number",
            value: form.read().phone_number.clone(),
            placeholder: "Enter phone number",
            input_type: InputType::Tel,
            disabled: props.disabled,
            on_change: move |phone: String| form.write().phone_number = phone,
        }
    }
}
