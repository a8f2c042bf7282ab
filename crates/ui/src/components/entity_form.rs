//! # Entity Form
//!
//! Schema-driven add/edit form. The inputs are generated from the schema's
//! field list; submitting hands the draft to the controller, which validates
//! required fields before any request is made.

use dioxus::prelude::*;
use procurex_core::FieldKind;
use procurex_schema::{EntitySchema, FieldSpec};
use serde_json::Value;

use crate::components::inputs::{Checkbox, Select, TextArea, TextInput};
use crate::hooks::UseCrud;

// ============================================================================
// Entity Form
// ============================================================================

#[derive(Props, Clone, PartialEq)]
pub struct EntityFormProps {
    pub crud: UseCrud,

    /// Overrides the "Add …" / "Edit …" heading
    #[props(default)]
    pub title: Option<String>,

    /// Hide the cancel button in edit mode
    #[props(default = false)]
    pub always_editing: bool,
}

#[component]
pub fn EntityForm(props: EntityFormProps) -> Element {
    let crud = props.crud;
    let state = crud.state();
    let current = state.read();
    let schema = current.schema();
    let editing = current.is_editing();
    let submitting = current.is_submitting();

    let fields: Vec<FieldValue> = schema
        .fields
        .iter()
        .map(|spec| FieldValue {
            spec: *spec,
            text: current.draft().text(spec.name),
            checked: current.draft().flag(spec.name),
            error: current.field_error(spec.name).map(str::to_string),
        })
        .collect();
    drop(current);

    let title = props
        .title
        .clone()
        .unwrap_or_else(|| form_title(schema, editing));
    let button_label = submit_label(schema, editing, submitting);

    rsx! {
        div {
            class: "entity-form",

            h3 { class: "form-title", "{title}" }

            div {
                class: "form-fields",
                for field in fields {
                    FieldInput {
                        key: "{field.spec.name}",
                        spec: field.spec,
                        text: field.text,
                        checked: field.checked,
                        error: field.error,
                        disabled: submitting,
                        on_change: move |(name, value): (&'static str, Value)| {
                            crud.update_field(name, value);
                        },
                        on_enter: move |_| crud.submit(),
                    }
                }
            }

            div {
                class: "form-actions",

                button {
                    r#type: "button",
                    class: "btn btn-primary",
                    disabled: submitting,
                    onclick: move |_| crud.submit(),
                    "{button_label}"
                }

                if editing && !props.always_editing {
                    button {
                        r#type: "button",
                        class: "btn btn-secondary",
                        disabled: submitting,
                        onclick: move |_| crud.cancel_edit(),
                        "Cancel"
                    }
                }
            }
        }
    }
}

// ============================================================================
// Field Input
// ============================================================================

#[derive(Clone, PartialEq)]
struct FieldValue {
    spec: FieldSpec,
    text: String,
    checked: bool,
    error: Option<String>,
}

#[derive(Props, Clone, PartialEq)]
pub struct FieldInputProps {
    pub spec: FieldSpec,
    pub text: String,
    pub checked: bool,

    #[props(default)]
    pub error: Option<String>,

    #[props(default = false)]
    pub disabled: bool,

    /// Receives the field name and its new JSON value
    pub on_change: EventHandler<(&'static str, Value)>,

    #[props(default)]
    pub on_enter: EventHandler<()>,
}

/// One input, chosen by the field kind
#[component]
pub fn FieldInput(props: FieldInputProps) -> Element {
    let spec = props.spec;
    let name = spec.name;
    let on_change = props.on_change;
    let label = Some(spec.label.to_string());
    let placeholder = Some(spec.placeholder_text().to_string());

    match spec.kind {
        FieldKind::Checkbox => rsx! {
            Checkbox {
                checked: props.checked,
                label,
                disabled: props.disabled,
                on_change: move |checked: bool| on_change.call((name, Value::Bool(checked))),
            }
        },
        FieldKind::TextArea => rsx! {
            TextArea {
                value: props.text.clone(),
                label,
                placeholder,
                error: props.error.clone(),
                required: spec.required,
                disabled: props.disabled,
                on_change: move |text: String| on_change.call((name, Value::String(text))),
            }
        },
        FieldKind::Select => rsx! {
            Select {
                value: props.text.clone(),
                options: spec.options.values(),
                label,
                placeholder: Some(format!("Select {}", spec.label.to_lowercase())),
                error: props.error.clone(),
                required: spec.required,
                disabled: props.disabled,
                on_change: move |text: String| on_change.call((name, Value::String(text))),
            }
        },
        kind => rsx! {
            TextInput {
                value: props.text.clone(),
                label,
                placeholder,
                error: props.error.clone(),
                required: spec.required,
                disabled: props.disabled,
                input_type: kind.input_type().to_string(),
                on_change: move |text: String| on_change.call((name, Value::String(text))),
                on_enter: move |_| props.on_enter.call(()),
            }
        },
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn form_title(schema: &EntitySchema, editing: bool) -> String {
    if editing {
        format!("Edit {}", schema.label)
    } else {
        format!("Add {}", schema.label)
    }
}

fn submit_label(schema: &EntitySchema, editing: bool, submitting: bool) -> String {
    match (submitting, editing) {
        (true, _) => "Saving...".to_string(),
        (false, true) => format!("Update {}", schema.label),
        (false, false) => format!("Add {}", schema.label),
    }
}

// ============================================================================
// Tests
// ============================================================================
