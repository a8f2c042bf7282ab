//! Drafts and request payloads
//!
//! A draft is the form state of one record. Its values stay close to what
//! the inputs produce (strings for text, dates, numbers and selects; booleans
//! for checkboxes) and are converted to JSON types only when a payload is
//! built. The parent key is carried in the draft but is never user-editable.

use chrono::NaiveDate;
use procurex_core::{ConsoleError, ConsoleResult, FieldKind, Record, RecordId};
use serde_json::{Number, Value};

use crate::entity::EntitySchema;

impl EntitySchema {
    /// A draft with every field blank and the parent key set
    pub fn blank_draft(&self, parent: Option<&RecordId>) -> Record {
        let mut draft = Record::new();
        for field in self.fields {
            draft.set(field.name, field.kind.blank_value());
        }
        self.stamp_parent(&mut draft, parent);
        draft
    }

    /// A draft holding a stored record's values, ready for editing
    ///
    /// Date values are cut down to `YYYY-MM-DD` and numbers become text so
    /// they can be bound to inputs. The parent key is forced to `parent`.
    pub fn draft_from(&self, record: &Record, parent: Option<&RecordId>) -> Record {
        let mut draft = Record::new();
        for field in self.fields {
            let value = match (field.kind, record.get(field.name)) {
                (FieldKind::Checkbox, _) => Value::Bool(record.flag(field.name)),
                (_, None | Some(Value::Null)) => field.kind.blank_value(),
                (FieldKind::Date, Some(Value::String(s))) => match parse_date(s) {
                    Some(date) => Value::String(date.format("%Y-%m-%d").to_string()),
                    None => Value::String(s.clone()),
                },
                (_, Some(Value::String(s))) => Value::String(s.clone()),
                (_, Some(other)) => Value::String(other.to_string()),
            };
            draft.set(field.name, value);
        }
        self.stamp_parent(&mut draft, parent);
        draft
    }

    /// Body for a create request: validated, id stripped, types coerced
    pub fn create_payload(&self, draft: &Record, parent: Option<&RecordId>) -> ConsoleResult<Record> {
        self.validate_draft(draft).to_result()?;

        let mut payload = Record::new();
        for field in self.fields {
            payload.set(field.name, coerce(self, field.name, field.kind, draft.get(field.name))?);
        }

        if let Some(key) = self.parent {
            let parent = parent.ok_or_else(|| ConsoleError::MissingParent {
                entity: self.name.to_string(),
            })?;
            payload.set(key.field, parent.to_value());
        }
        Ok(payload)
    }

    /// Body for an update request: the full record, id included
    pub fn update_payload(
        &self,
        draft: &Record,
        id: &RecordId,
        parent: Option<&RecordId>,
    ) -> ConsoleResult<Record> {
        let mut payload = self.create_payload(draft, parent)?;
        payload.set(self.id_field, id.to_value());
        Ok(payload)
    }

    fn stamp_parent(&self, draft: &mut Record, parent: Option<&RecordId>) {
        if let (Some(key), Some(parent)) = (self.parent, parent) {
            draft.set(key.field, parent.to_value());
        }
    }
}

fn coerce(
    schema: &EntitySchema,
    name: &str,
    kind: FieldKind,
    value: Option<&Value>,
) -> ConsoleResult<Value> {
    let text = match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::Bool(b)) if kind.is_boolean() => return Ok(Value::Bool(*b)),
        Some(Value::String(s)) => s.trim().to_string(),
        Some(other) => other.to_string(),
    };

    match kind {
        FieldKind::Checkbox => Ok(Value::Bool(text == "true")),
        FieldKind::Number if text.is_empty() => Ok(Value::Null),
        FieldKind::Number => {
            if let Ok(n) = text.parse::<i64>() {
                return Ok(Value::from(n));
            }
            text.parse::<f64>()
                .ok()
                .and_then(Number::from_f64)
                .map(Value::Number)
                .ok_or_else(|| {
                    ConsoleError::field_validation(schema.name, name, format!("'{text}' is not a number"))
                })
        }
        FieldKind::Date if text.is_empty() => Ok(Value::Null),
        _ => Ok(Value::String(text)),
    }
}

/// Parse a `YYYY-MM-DD` date, ignoring any time suffix
fn parse_date(text: &str) -> Option<NaiveDate> {
    let head = text.get(..10)?;
    NaiveDate::parse_from_str(head, "%Y-%m-%d").ok()
}
