//! # ProcureX Schema
//!
//! Declarative description of every record kind the console manages.
//!
//! An [`EntitySchema`] is all a generic controller needs to drive a
//! list/form/delete workflow: the form fields, which key identifies a
//! record, which parent scopes it, and the REST paths to call.
//!
//! - **Field**: `FieldSpec` and select options
//! - **Entity**: `EntitySchema`, parent keys, endpoint templates
//! - **Catalog**: the static schemas for products, vendors and their children
//! - **Draft**: blank drafts, edit drafts and request payloads
//! - **Validation**: required-field checks collected into a `ValidationResult`
//!

pub mod catalog;
pub mod draft;
pub mod entity;
pub mod field;
pub mod validation;

pub use catalog::{catalog, find};
pub use entity::{EntitySchema, ParentKey, ParentKind, ResourcePaths, ToggleSpec};
pub use field::{FieldSpec, SelectOptions, MONTHS};
pub use validation::{ValidationError, ValidationErrorCode, ValidationResult};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
