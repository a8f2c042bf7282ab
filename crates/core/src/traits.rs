//! Core traits for ProcureX

use crate::error::ConsoleResult;

// ============================================================================
// Validatable Trait
// ============================================================================

/// Trait for types that can be validated before they leave the client
///
/// # Example
///
/// ```rust,ignore
/// use procurex_core::{ConsoleError, ConsoleResult, Validatable};
///
/// struct Credentials {
///     email: String,
///     password: String,
/// }
///
/// impl Validatable for Credentials {
///     fn validate(&self) -> ConsoleResult<()> {
///         if self.email.is_empty() {
///             return Err(ConsoleError::validation("Email is required"));
///         }
///         Ok(())
///     }
/// }
/// ```
pub trait Validatable {
    /// Validate the current state of the object
    ///
    /// Returns `Ok(())` if valid, or a `ConsoleError` describing the first problem.
    fn validate(&self) -> ConsoleResult<()>;

    /// Check if the object is valid without returning error details
    fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Get all validation errors (for types that can have multiple errors)
    fn validation_errors(&self) -> Vec<String> {
        match self.validate() {
            Ok(()) => vec![],
            Err(e) => vec![e.user_message()],
        }
    }
}
