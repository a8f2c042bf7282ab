//! # UI Components
//!
//! Reusable Dioxus components for the ProcureX console.
//!
//! ## Component Hierarchy
//!
//! ```text
//! CrudSection
//! ├── NotificationBanner
//! ├── EntityForm
//! │   └── FieldInput (TextInput / TextArea / Select / Checkbox)
//! └── EntityTable
//!     └── RowActions
//!         └── ConfirmDeleteDialog
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

pub mod crud_section;
pub mod dialogs;
pub mod entity_form;
pub mod entity_table;
pub mod inputs;
pub mod notification;

// ============================================================================
// Re-exports
// ============================================================================

pub use crud_section::CrudSection;
pub use dialogs::ConfirmDeleteDialog;
pub use entity_form::{EntityForm, FieldInput};
pub use entity_table::EntityTable;
pub use inputs::{Checkbox, Select, TextArea, TextInput};
pub use notification::NotificationBanner;
