//! # Input Components
//!
//! Form inputs shared by the entity forms and the auth pages:
//! - **TextInput**: single-line input (text, email, tel, date, number, password)
//! - **TextArea**: multi-line input
//! - **Select**: dropdown over a fixed list of values
//! - **Checkbox**: boolean input
//!
//! Every input shows its label, a required marker and an optional error line.

use dioxus::prelude::*;

// ============================================================================
// Text Input Component
// ============================================================================

#[derive(Props, Clone, PartialEq)]
pub struct TextInputProps {
    pub value: String,

    #[props(default)]
    pub label: Option<String>,

    #[props(default)]
    pub placeholder: Option<String>,

    /// Error message (shows error state)
    #[props(default)]
    pub error: Option<String>,

    #[props(default = false)]
    pub required: bool,

    #[props(default = false)]
    pub disabled: bool,

    /// HTML input type (text, email, tel, date, number, password)
    #[props(default = "text".to_string())]
    pub input_type: String,

    #[props(default)]
    pub on_change: EventHandler<String>,

    /// Enter key handler
    #[props(default)]
    pub on_enter: EventHandler<()>,
}

/// Single-line text input component
#[component]
pub fn TextInput(props: TextInputProps) -> Element {
    let input_class = build_input_class(props.error.is_some(), props.disabled);

    rsx! {
        div {
            class: "input-group",

            if let Some(label) = &props.label {
                InputLabel { text: label.clone(), required: props.required }
            }

            input {
                class: "{input_class}",
                r#type: "{props.input_type}",
                value: "{props.value}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                disabled: props.disabled,
                oninput: move |e| props.on_change.call(e.value()),
                onkeydown: move |e| {
                    if e.key() == Key::Enter {
                        props.on_enter.call(());
                    }
                },
            }

            if let Some(error) = &props.error {
                p { class: "input-error-text", "{error}" }
            }
        }
    }
}

// ============================================================================
// Text Area Component
// ============================================================================

#[derive(Props, Clone, PartialEq)]
pub struct TextAreaProps {
    pub value: String,

    #[props(default)]
    pub label: Option<String>,

    #[props(default)]
    pub placeholder: Option<String>,

    #[props(default)]
    pub error: Option<String>,

    /// Number of visible rows
    #[props(default = 3)]
    pub rows: usize,

    #[props(default = false)]
    pub required: bool,

    #[props(default = false)]
    pub disabled: bool,

    #[props(default)]
    pub on_change: EventHandler<String>,
}

/// Multi-line text input component
#[component]
pub fn TextArea(props: TextAreaProps) -> Element {
    let textarea_class = format!(
        "{} textarea",
        build_input_class(props.error.is_some(), props.disabled)
    );

    rsx! {
        div {
            class: "input-group",

            if let Some(label) = &props.label {
                InputLabel { text: label.clone(), required: props.required }
            }

            textarea {
                class: "{textarea_class}",
                rows: "{props.rows}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                disabled: props.disabled,
                value: "{props.value}",
                oninput: move |e| props.on_change.call(e.value()),
            }

            if let Some(error) = &props.error {
                p { class: "input-error-text", "{error}" }
            }
        }
    }
}

// ============================================================================
// Select Component
// ============================================================================

#[derive(Props, Clone, PartialEq)]
pub struct SelectProps {
    /// Selected value; empty shows the placeholder
    pub value: String,

    pub options: Vec<String>,

    #[props(default)]
    pub label: Option<String>,

    /// Placeholder (shown when no selection)
    #[props(default)]
    pub placeholder: Option<String>,

    #[props(default)]
    pub error: Option<String>,

    #[props(default = false)]
    pub required: bool,

    #[props(default = false)]
    pub disabled: bool,

    #[props(default)]
    pub on_change: EventHandler<String>,
}

/// Dropdown select component
#[component]
pub fn Select(props: SelectProps) -> Element {
    let select_class = format!(
        "{} select",
        build_input_class(props.error.is_some(), props.disabled)
    );

    rsx! {
        div {
            class: "input-group",

            if let Some(label) = &props.label {
                InputLabel { text: label.clone(), required: props.required }
            }

            select {
                class: "{select_class}",
                disabled: props.disabled,
                onchange: move |e| props.on_change.call(e.value()),

                option {
                    value: "",
                    disabled: true,
                    selected: props.value.is_empty(),
                    {props.placeholder.clone().unwrap_or_else(|| "Select...".to_string())}
                }

                for option in props.options.iter() {
                    option {
                        key: "{option}",
                        value: "{option}",
                        selected: props.value == *option,
                        "{option}"
                    }
                }
            }

            if let Some(error) = &props.error {
                p { class: "input-error-text", "{error}" }
            }
        }
    }
}

// ============================================================================
// Checkbox Component
// ============================================================================

#[derive(Props, Clone, PartialEq)]
pub struct CheckboxProps {
    pub checked: bool,

    #[props(default)]
    pub label: Option<String>,

    #[props(default = false)]
    pub disabled: bool,

    #[props(default)]
    pub on_change: EventHandler<bool>,
}

/// Boolean checkbox component
#[component]
pub fn Checkbox(props: CheckboxProps) -> Element {
    rsx! {
        label {
            class: if props.disabled { "checkbox checkbox-disabled" } else { "checkbox" },
            input {
                r#type: "checkbox",
                checked: props.checked,
                disabled: props.disabled,
                onchange: move |e| props.on_change.call(e.checked()),
            }
            if let Some(label) = &props.label {
                span { "{label}" }
            }
        }
    }
}

// ============================================================================
// Shared pieces
// ============================================================================

#[component]
fn InputLabel(text: String, required: bool) -> Element {
    rsx! {
        label {
            class: "input-label",
            "{text}"
            if required {
                span { class: "required-marker", "*" }
            }
        }
    }
}

/// Class list for text-like inputs
fn build_input_class(has_error: bool, disabled: bool) -> String {
    let mut classes = vec!["input"];
    if has_error {
        classes.push("input-invalid");
    }
    if disabled {
        classes.push("input-disabled");
    }
    classes.join(" ")
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_input_class() {
        assert_eq!(build_input_class(false, false), "input");
    }

    #[test]
    fn test_build_input_class_error() {
        let class = build_input_class(true, false);
        assert!(class.contains("input-invalid"));
        assert!(!class.contains("input-disabled"));
    }

    #[test]
    fn test_build_input_class_disabled() {
        assert_eq!(build_input_class(true, true), "input input-invalid input-disabled");
    }
}
