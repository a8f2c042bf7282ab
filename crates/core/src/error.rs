//! Error types for ProcureX
//!
//! Every failure a console operation can hit is expressed as a
//! [`ConsoleError`]. Controllers store these values in their operation
//! state and turn them into notification text with
//! [`ConsoleError::user_message`], so nothing is reported through logs alone.

use thiserror::Error;

/// The main error type for ProcureX
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConsoleError {
    // ========================================================================
    // Transport Errors
    // ========================================================================
    /// The request never reached the server or the response never arrived
    #[error("Network error: {0}")]
    Network(String),

    /// The response body could not be decoded
    #[error("Failed to decode response: {0}")]
    Decode(String),

    // ========================================================================
    // Server Errors
    // ========================================================================
    /// The server answered with a non-success status
    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },

    // ========================================================================
    // Validation Errors
    // ========================================================================
    /// General validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// A single form field failed validation
    #[error("Field validation failed for '{entity}.{field}': {message}")]
    FieldValidation {
        entity: String,
        field: String,
        message: String,
    },

    // ========================================================================
    // Usage Errors
    // ========================================================================
    /// No entity with this name exists in the catalog
    #[error("Unknown entity: {0}")]
    UnknownEntity(String),

    /// A child resource was used without its parent id
    #[error("Entity '{entity}' requires a parent id")]
    MissingParent { entity: String },

    /// The same operation is already awaiting a response
    #[error("{operation} already in progress")]
    InProgress { operation: String },

    // ========================================================================
    // Configuration Errors
    // ========================================================================
    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // ========================================================================
    // Generic Errors
    // ========================================================================
    /// Internal error (should not happen)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ConsoleError {
    /// Create a network error
    pub fn network(msg: impl Into<String>) -> Self {
        ConsoleError::Network(msg.into())
    }

    /// Create a server error
    pub fn server(status: u16, msg: impl Into<String>) -> Self {
        ConsoleError::Server {
            status,
            message: msg.into(),
        }
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        ConsoleError::Validation(msg.into())
    }

    /// Create a field validation error
    pub fn field_validation(
        entity: impl Into<String>,
        field: impl Into<String>,
        msg: impl Into<String>,
    ) -> Self {
        ConsoleError::FieldValidation {
            entity: entity.into(),
            field: field.into(),
            message: msg.into(),
        }
    }

    /// Create an in-progress error
    pub fn in_progress(operation: impl Into<String>) -> Self {
        ConsoleError::InProgress {
            operation: operation.into(),
        }
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        ConsoleError::Internal(msg.into())
    }

    /// Check if this error is a transport failure
    pub fn is_network(&self) -> bool {
        matches!(self, ConsoleError::Network(_))
    }

    /// Check if a response arrived but its body was unusable
    pub fn is_decode(&self) -> bool {
        matches!(self, ConsoleError::Decode(_))
    }

    /// Check if this error came from a non-success response
    pub fn is_server(&self) -> bool {
        matches!(self, ConsoleError::Server { .. })
    }

    /// Check if this error is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ConsoleError::Validation(_) | ConsoleError::FieldValidation { .. }
        )
    }

    /// HTTP status of a server error
    pub fn status(&self) -> Option<u16> {
        match self {
            ConsoleError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Text suitable for a notification banner.
    ///
    /// Server messages are passed through untouched so the user sees exactly
    /// what the backend reported.
    pub fn user_message(&self) -> String {
        match self {
            ConsoleError::Network(msg) => format!("Could not reach the server: {msg}"),
            ConsoleError::Server { message, .. } => message.clone(),
            ConsoleError::Validation(msg) => msg.clone(),
            ConsoleError::FieldValidation { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

impl From<serde_json::Error> for ConsoleError {
    fn from(err: serde_json::Error) -> Self {
        ConsoleError::Decode(err.to_string())
    }
}

/// Result type alias using ConsoleError
pub type ConsoleResult<T> = Result<T, ConsoleError>;

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let err = ConsoleError::validation("Name is required");
        assert!(err.is_validation());
        assert!(!err.is_server());
        assert_eq!(err.to_string(), "Validation error: Name is required");
        assert_eq!(err.user_message(), "Name is required");
    }

    #[test]
    fn test_field_validation_error() {
        let err = ConsoleError::field_validation("vendor", "contact_email", "Email is required");
        assert!(err.is_validation());
        assert_eq!(
            err.to_string(),
            "Field validation failed for 'vendor.contact_email': Email is required"
        );
    }

    #[test]
    fn test_server_error_message_is_verbatim() {
        let err = ConsoleError::server(401, "Invalid email or password");
        assert!(err.is_server());
        assert!(!err.is_network());
        assert_eq!(err.status(), Some(401));
        assert_eq!(err.user_message(), "Invalid email or password");
    }

    #[test]
    fn test_network_error() {
        let err = ConsoleError::network("connection refused");
        assert!(err.is_network());
        assert_eq!(err.status(), None);
        assert_eq!(
            err.user_message(),
            "Could not reach the server: connection refused"
        );
    }

    #[test]
    fn test_decode_from_serde() {
        let parse: Result<serde_json::Value, _> = serde_json::from_str("{oops");
        let err: ConsoleError = parse.unwrap_err().into();
        assert!(err.is_decode());
        assert!(!err.is_network());
        assert_eq!(err.status(), None);
        assert!(err.to_string().starts_with("Failed to decode response"));
    }

    #[test]
    fn test_in_progress_error() {
        let err = ConsoleError::in_progress("Submit");
        assert_eq!(err.to_string(), "Submit already in progress");
    }
}
