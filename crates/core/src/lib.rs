//! # ProcureX Core
//!
//! Core types, traits, and error handling for ProcureX.
//!
//! This crate provides the foundational building blocks shared by every
//! other crate in the workspace:
//!
//! - **Types**: record identifiers, untyped JSON records, form field kinds
//! - **Traits**: `Validatable`
//! - **Errors**: the console error taxonomy with `ConsoleError` and `ConsoleResult`
//! - **Config**: `ConsoleConfig` loaded from defaults, TOML and the environment
//!

pub mod config;
pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at crate root
pub use config::{ApiConfig, ConsoleConfig, WindowConfig};
pub use error::{ConsoleError, ConsoleResult};
pub use traits::Validatable;
pub use types::{FieldKind, Record, RecordId};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
