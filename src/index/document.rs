//! Index document model
//!
//! A [`Document`] is the flat field mapping a matched index entry exposes to
//! the engine. Field access goes through [`Document::get_field`] so a missing
//! field is an explicit [`crate::Error::FieldNotFound`] instead of a fault.

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::{Error, Result};

/// A typed value stored in a document field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Date(DateTime<Utc>),
    Number(f64),
    Bool(bool),
}

impl FieldValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<DateTime<Utc>> {
        match self {
            FieldValue::Date(d) => Some(*d),
            _ => None,
        }
    }

    /// Raw JSON representation, used when a requested field is copied into a
    /// result record unchanged. Dates are handled separately by the projector.
    pub fn to_json(&self) -> Value {
        match self {
            FieldValue::Text(s) => Value::String(s.clone()),
            FieldValue::Date(d) => Value::String(d.to_rfc3339()),
            FieldValue::Number(n) => serde_json::Number::from_f64(*n)
                .map(Value::Number)
                .unwrap_or(Value::Null),
            FieldValue::Bool(b) => Value::Bool(*b),
        }
    }
}

/// A matched index entry: an ordered list of named, typed fields.
#[derive(Debug, Clone, Default)]
pub struct Document {
    fields: Vec<(String, FieldValue)>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(mut self, name: &str, value: impl Into<String>) -> Self {
        self.fields.push((name.to_string(), FieldValue::Text(value.into())));
        self
    }

    pub fn with_date(mut self, name: &str, value: DateTime<Utc>) -> Self {
        self.fields.push((name.to_string(), FieldValue::Date(value)));
        self
    }

    pub fn with_number(mut self, name: &str, value: f64) -> Self {
        self.fields.push((name.to_string(), FieldValue::Number(value)));
        self
    }

    /// Look up a field by name, case-insensitively. Index field names are
    /// lowercase by convention but callers pass display casing.
    pub fn field(&self, name: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value)
    }

    /// Like [`Document::field`] but a missing field is an error the caller
    /// must handle.
    pub fn get_field(&self, name: &str) -> Result<&FieldValue> {
        self.field(name).ok_or_else(|| Error::FieldNotFound {
            field: name.to_string(),
        })
    }

    /// The field's text content, for fields the engine requires to be textual
    /// (identifiers, emails, store keys).
    pub fn get_text(&self, name: &str) -> Result<&str> {
        self.get_field(name)?
            .as_text()
            .ok_or_else(|| Error::Index(format!("field '{name}' is not a text field")))
    }

    pub fn get_date(&self, name: &str) -> Result<DateTime<Utc>> {
        self.get_field(name)?
            .as_date()
            .ok_or_else(|| Error::Index(format!("field '{name}' is not a date field")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_lookup_is_case_insensitive() {
        let doc = Document::new().with_text("orderid", "o-1");
        assert_eq!(doc.field("OrderId").and_then(FieldValue::as_text), Some("o-1"));
    }

    #[test]
    fn missing_field_is_field_not_found() {
        let doc = Document::new();
        let err = doc.get_field("nope").unwrap_err();
        assert!(matches!(err, Error::FieldNotFound { .. }));
    }

    #[test]
    fn get_text_rejects_non_text_fields() {
        let doc = Document::new().with_number("total", 10.0);
        assert!(doc.get_text("total").is_err());
    }
}
