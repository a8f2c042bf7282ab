//! Core types used throughout ProcureX
//!
//! Records travel between the console and the backend as plain JSON objects,
//! so the console keeps them untyped ([`Record`]) and lets the entity schema
//! decide which keys matter.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

// ============================================================================
// Record Identifiers
// ============================================================================

/// Server-assigned identifier of a record
///
/// The backend uses integer keys, but ids that arrive as strings are kept
/// as text so that nothing is lost.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Int(i64),
    Text(String),
}

impl RecordId {
    /// Parse an id from a path segment or user input
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }
        Some(match raw.parse::<i64>() {
            Ok(n) => RecordId::Int(n),
            Err(_) => RecordId::Text(raw.to_string()),
        })
    }

    /// Read an id out of a JSON value. Numeric strings become integers.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => n.as_i64().map(RecordId::Int),
            Value::String(s) => Self::parse(s),
            _ => None,
        }
    }

    /// JSON form used in request bodies
    pub fn to_value(&self) -> Value {
        match self {
            RecordId::Int(n) => Value::from(*n),
            RecordId::Text(s) => Value::from(s.clone()),
        }
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Int(n) => write!(f, "{n}"),
            RecordId::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<i64> for RecordId {
    fn from(value: i64) -> Self {
        RecordId::Int(value)
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        RecordId::parse(value).unwrap_or_else(|| RecordId::Text(String::new()))
    }
}

// ============================================================================
// Records
// ============================================================================

/// One entity instance as a JSON object
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Map<String, Value>);

impl Record {
    /// Create an empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(name, value);
        self
    }

    /// Set a field, replacing any previous value
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(name.into(), value.into());
    }

    /// Get a raw field value
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// Remove a field
    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.0.remove(name)
    }

    /// Whether the field is present
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Read an identifier field
    pub fn id(&self, field: &str) -> Option<RecordId> {
        self.get(field).and_then(RecordId::from_value)
    }

    /// Read a boolean field. Missing, null and anything but `true` read as false.
    pub fn flag(&self, name: &str) -> bool {
        match self.get(name) {
            Some(Value::Bool(b)) => *b,
            Some(Value::String(s)) => s == "true",
            Some(Value::Number(n)) => n.as_i64() == Some(1),
            _ => false,
        }
    }

    /// Display text for a field
    pub fn text(&self, name: &str) -> String {
        match self.get(name) {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(s)) => s.clone(),
            Some(Value::Bool(true)) => "Yes".to_string(),
            Some(Value::Bool(false)) => "No".to_string(),
            Some(other) => other.to_string(),
        }
    }

    /// True when the field is missing, null, or only whitespace
    pub fn is_blank(&self, name: &str) -> bool {
        match self.get(name) {
            None | Some(Value::Null) => true,
            Some(Value::String(s)) => s.trim().is_empty(),
            _ => false,
        }
    }

    /// Iterate over fields
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when the record has no fields
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Convert into a JSON value
    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

impl From<Map<String, Value>> for Record {
    fn from(map: Map<String, Value>) -> Self {
        Record(map)
    }
}

impl TryFrom<Value> for Record {
    type Error = crate::error::ConsoleError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Ok(Record(map)),
            other => Err(crate::error::ConsoleError::Decode(format!(
                "expected a JSON object, found {other}"
            ))),
        }
    }
}

// ============================================================================
// Field Kinds
// ============================================================================

/// Input kinds a form field can take
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    #[default]
    Text,
    Email,
    Tel,
    Date,
    Number,
    TextArea,
    Checkbox,
    Select,
}

impl FieldKind {
    /// HTML input type for single-line inputs
    pub fn input_type(&self) -> &'static str {
        match self {
            FieldKind::Email => "email",
            FieldKind::Tel => "tel",
            FieldKind::Date => "date",
            FieldKind::Number => "number",
            FieldKind::Checkbox => "checkbox",
            FieldKind::Text | FieldKind::TextArea | FieldKind::Select => "text",
        }
    }

    /// Whether this kind holds a boolean
    pub fn is_boolean(&self) -> bool {
        matches!(self, FieldKind::Checkbox)
    }

    /// The blank value a new draft starts with
    pub fn blank_value(&self) -> Value {
        if self.is_boolean() {
            Value::Bool(false)
        } else {
            Value::String(String::new())
        }
    }

    /// Get display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            FieldKind::Text => "Text",
            FieldKind::Email => "Email",
            FieldKind::Tel => "Phone",
            FieldKind::Date => "Date",
            FieldKind::Number => "Number",
            FieldKind::TextArea => "Long Text",
            FieldKind::Checkbox => "Checkbox",
            FieldKind::Select => "Select",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_record_id_parse() {
        assert_eq!(RecordId::parse("7"), Some(RecordId::Int(7)));
        assert_eq!(RecordId::parse(" abc "), Some(RecordId::Text("abc".into())));
        assert_eq!(RecordId::parse(""), None);
    }

    #[test]
    fn test_record_id_from_value_normalizes_numeric_strings() {
        assert_eq!(RecordId::from_value(&json!(3)), Some(RecordId::Int(3)));
        assert_eq!(RecordId::from_value(&json!("3")), Some(RecordId::Int(3)));
        assert_eq!(RecordId::from_value(&json!(null)), None);
        assert_eq!(RecordId::Int(3).to_string(), "3");
    }

    #[test]
    fn test_record_id_serializes_untagged() {
        assert_eq!(serde_json::to_value(RecordId::Int(9)).unwrap(), json!(9));
        assert_eq!(RecordId::Text("x".into()).to_value(), json!("x"));
    }

    #[test]
    fn test_record_accessors() {
        let record: Record = serde_json::from_value(json!({
            "vendor_id": 12,
            "name": "Acme",
            "finalized": true,
            "notes": "   ",
            "rates": 4.5
        }))
        .unwrap();

        assert_eq!(record.id("vendor_id"), Some(RecordId::Int(12)));
        assert_eq!(record.text("name"), "Acme");
        assert_eq!(record.text("finalized"), "Yes");
        assert_eq!(record.text("rates"), "4.5");
        assert_eq!(record.text("missing"), "");
        assert!(record.flag("finalized"));
        assert!(record.is_blank("notes"));
        assert!(!record.is_blank("name"));
    }

    #[test]
    fn test_record_try_from_rejects_non_objects() {
        assert!(Record::try_from(json!([1, 2])).is_err());
        let record = Record::try_from(json!({"id": 1})).unwrap();
        assert_eq!(record.len(), 1);
    }

    #[test]
    fn test_field_kind_blank_values() {
        assert_eq!(FieldKind::Checkbox.blank_value(), json!(false));
        assert_eq!(FieldKind::Date.blank_value(), json!(""));
        assert_eq!(FieldKind::Email.input_type(), "email");
    }
}
