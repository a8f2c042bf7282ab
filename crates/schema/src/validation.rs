//! Draft validation
//!
//! Checks run before a draft is sent: required fields must be non-empty.
//! Checkboxes are always valid. Value formats are left to the typed inputs.

use procurex_core::{ConsoleError, ConsoleResult, Record};
use serde_json::Value;

use crate::entity::EntitySchema;
use crate::field::FieldSpec;

// ============================================================================
// ValidationResult
// ============================================================================

/// Result of validating a draft
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ValidationResult {
    /// Entity the draft belongs to
    pub entity: String,

    /// List of errors (empty if valid)
    pub errors: Vec<ValidationError>,
}

impl ValidationResult {
    /// Create an empty result for an entity
    pub fn ok(entity: impl Into<String>) -> Self {
        Self {
            entity: entity.into(),
            errors: Vec::new(),
        }
    }

    /// Add an error to the result
    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Errors for one field
    pub fn errors_for(&self, field: &str) -> impl Iterator<Item = &ValidationError> {
        self.errors.iter().filter(move |e| e.field == field)
    }

    /// Convert to ConsoleResult (fails if any errors)
    pub fn to_result(self) -> ConsoleResult<()> {
        match self.errors.as_slice() {
            [] => Ok(()),
            [single] => Err(ConsoleError::field_validation(
                self.entity,
                single.field,
                single.message.clone(),
            )),
            many => {
                let msg = many
                    .iter()
                    .map(|e| e.message.clone())
                    .collect::<Vec<_>>()
                    .join("; ");
                Err(ConsoleError::validation(msg))
            }
        }
    }
}

// ============================================================================
// ValidationError
// ============================================================================

/// Error codes for validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationErrorCode {
    MissingRequired,
}

/// A validation error on one field
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub code: ValidationErrorCode,
    pub field: &'static str,
    /// Human-readable error message
    pub message: String,
}

impl ValidationError {
    pub fn new(code: ValidationErrorCode, field: &'static str, message: impl Into<String>) -> Self {
        Self {
            code,
            field,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.field, self.message)
    }
}

// ============================================================================
// Checks
// ============================================================================

impl EntitySchema {
    /// Validate a draft against the form fields
    pub fn validate_draft(&self, draft: &Record) -> ValidationResult {
        let mut result = ValidationResult::ok(self.name);
        for field in self.fields {
            if let Some(error) = check_field(field, draft.get(field.name)) {
                result.add_error(error);
            }
        }
        result
    }
}

fn check_field(field: &'static FieldSpec, value: Option<&Value>) -> Option<ValidationError> {
    if field.kind.is_boolean() || !field.blocks_when_blank() {
        return None;
    }

    let blank = match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.trim().is_empty(),
        Some(_) => false,
    };

    blank.then(|| {
        ValidationError::new(
            ValidationErrorCode::MissingRequired,
            field.name,
            format!("{} is required", field.label),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{PAYMENT, RECEIPT, VENDOR};
    use serde_json::json;

    fn record(value: Value) -> Record {
        Record::try_from(value).unwrap()
    }

    #[test]
    fn test_missing_required_fields() {
        let draft = VENDOR.blank_draft(None);
        let result = VENDOR.validate_draft(&draft);

        // every vendor field except the checkbox is required
        assert_eq!(result.errors.len(), VENDOR.fields.len() - 1);
        assert!(result.errors_for("finalized").next().is_none());
        assert_eq!(
            result.errors_for("name").next().map(|e| e.code),
            Some(ValidationErrorCode::MissingRequired)
        );
    }

    #[test]
    fn test_whitespace_counts_as_blank() {
        let draft = record(json!({"receipt_date": "  ", "quantity_received": "4"}));
        let result = RECEIPT.validate_draft(&draft);
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].field, "receipt_date");
    }

    #[test]
    fn test_presence_only_ignores_formats() {
        let draft = record(json!({
            "receipt_date": "31/12/2024",
            "quantity_received": "a dozen",
        }));
        assert!(RECEIPT.validate_draft(&draft).is_valid());
    }

    #[test]
    fn test_optional_fields_and_checkboxes() {
        let draft = record(json!({
            "payment_date": "2024-05-01",
            "transaction_number": "TX-1",
            "mail_sent": false,
        }));
        assert!(PAYMENT.validate_draft(&draft).is_valid());
    }

    #[test]
    fn test_to_result_single_and_many() {
        let draft = record(json!({"receipt_date": "2024-01-01"}));
        let err = RECEIPT.validate_draft(&draft).to_result().unwrap_err();
        assert_eq!(
            err,
            ConsoleError::field_validation("receipt", "quantity_received", "Quantity Received is required")
        );

        let err = RECEIPT
            .validate_draft(&Record::new())
            .to_result()
            .unwrap_err();
        assert_eq!(
            err.user_message(),
            "Receipt Date is required; Quantity Received is required"
        );
    }
}
