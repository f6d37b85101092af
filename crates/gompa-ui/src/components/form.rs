//! Labeled form fields for the booking dialog.
//!
//! Thin wrappers pairing a label with an input, textarea, or select so
//! the dialog markup stays flat.

use dioxus::prelude::*;

/// Labeled single-line text input.
#[derive(Clone, PartialEq, Props)]
pub struct TextFieldProps {
    pub label: String,
    /// Bound value
    pub value: String,
    /// Called with the new value on every keystroke
    pub on_input: EventHandler<String>,
    #[props(default)]
    pub placeholder: Option<String>,
    /// Input type attribute ("text", "email", "date", ...)
    #[props(default = "text".to_string())]
    pub input_type: String,
}

#[component]
pub fn TextField(props: TextFieldProps) -> Element {
    let placeholder = props.placeholder.clone().unwrap_or_default();

    rsx! {
        div { class: "form-field",
            label { class: "form-label", "{props.label}" }
            input {
                class: "form-input",
                r#type: "{props.input_type}",
                value: "{props.value}",
                placeholder: "{placeholder}",
                oninput: move |e| props.on_input.call(e.value()),
            }
        }
    }
}

/// Labeled multi-line text input.
#[derive(Clone, PartialEq, Props)]
pub struct TextAreaFieldProps {
    pub label: String,
    pub value: String,
    pub on_input: EventHandler<String>,
    #[props(default)]
    pub placeholder: Option<String>,
}

#[component]
pub fn TextAreaField(props: TextAreaFieldProps) -> Element {
    let placeholder = props.placeholder.clone().unwrap_or_default();

    rsx! {
        div { class: "form-field",
            label { class: "form-label", "{props.label}" }
            textarea {
                class: "form-textarea",
                value: "{props.value}",
                placeholder: "{placeholder}",
                oninput: move |e| props.on_input.call(e.value()),
            }
        }
    }
}

/// Labeled select over `(value, label)` pairs, with a placeholder row
/// for the unselected state.
#[derive(Clone, PartialEq, Props)]
pub struct SelectFieldProps {
    pub label: String,
    /// `(value, label)` for each option
    pub options: Vec<(String, String)>,
    /// Currently selected value, empty when unselected
    pub selected: String,
    /// Called with the selected option's value
    pub on_select: EventHandler<String>,
    #[props(default = "Select...".to_string())]
    pub placeholder: String,
}

#[component]
pub fn SelectField(props: SelectFieldProps) -> Element {
    rsx! {
        div { class: "form-field",
            label { class: "form-label", "{props.label}" }
            select {
                class: "form-select",
                value: "{props.selected}",
                onchange: move |e| props.on_select.call(e.value()),

                option { value: "", disabled: true, selected: props.selected.is_empty(),
                    "{props.placeholder}"
                }
                for (value, label) in props.options.iter() {
                    option {
                        key: "{value}",
                        value: "{value}",
                        selected: *value == props.selected,
                        "{label}"
                    }
                }
            }
        }
    }
}
