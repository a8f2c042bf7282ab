//! # Dialog Components
//!
//! - **ConfirmDeleteDialog**: confirmation for destructive actions

pub mod confirm_delete;

pub use confirm_delete::ConfirmDeleteDialog;
