//! # Confirm Delete Dialog Component
//!
//! Inline confirmation shown in place of a row's actions while that row is
//! the pending delete. Nothing is sent until the user confirms.

use dioxus::prelude::*;

// ============================================================================
// Component Props
// ============================================================================

#[derive(Props, Clone, PartialEq)]
pub struct ConfirmDeleteDialogProps {
    /// Entity label, e.g. "Vendor"
    pub label: String,

    /// Display name of the record being deleted
    #[props(default)]
    pub item_name: Option<String>,

    /// The delete request is in flight
    #[props(default = false)]
    pub deleting: bool,

    pub on_confirm: EventHandler<()>,

    pub on_cancel: EventHandler<()>,
}

// ============================================================================
// Main Component
// ============================================================================

/// Confirmation prompt for a delete operation
#[component]
pub fn ConfirmDeleteDialog(props: ConfirmDeleteDialogProps) -> Element {
    let message = confirm_message(&props.label, props.item_name.as_deref());
    let deleting = props.deleting;

    rsx! {
        div {
            class: "confirm-delete",
            role: "alertdialog",

            span { class: "confirm-delete-message", "{message}" }

            div {
                class: "confirm-delete-actions",

                button {
                    r#type: "button",
                    class: "btn btn-danger btn-small",
                    disabled: deleting,
                    onclick: move |_| props.on_confirm.call(()),
                    if deleting { "Deleting..." } else { "Confirm" }
                }

                button {
                    r#type: "button",
                    class: "btn btn-secondary btn-small",
                    disabled: deleting,
                    onclick: move |_| props.on_cancel.call(()),
                    "Cancel"
                }
            }
        }
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn confirm_message(label: &str, item_name: Option<&str>) -> String {
    match item_name.map(str::trim).filter(|name| !name.is_empty()) {
        Some(name) => format!("Delete {} \"{}\"?", label.to_lowercase(), name),
        None => format!("Delete this {}?", label.to_lowercase()),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confirm_message_with_name() {
        assert_eq!(confirm_message("Vendor", Some("Acme")), "Delete vendor \"Acme\"?");
    }

    #[test]
    fn test_confirm_message_without_name() {
        assert_eq!(confirm_message("Receipt", None), "Delete this receipt?");
        assert_eq!(confirm_message("Receipt", Some("  ")), "Delete this receipt?");
    }
}
