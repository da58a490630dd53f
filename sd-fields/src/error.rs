//! Validation errors produced by codecs, validators and adapters.

use crate::FieldKind;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// Machine-readable error code attached to every validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// Text does not parse per the kind's grammar, or has the wrong shape.
    Invalid,
    /// Value type has no representation in the field kind.
    TypeError,
    /// Text exceeds the column's maximum length.
    MaxLength,
    /// A required form field was left empty.
    Required,
    /// A non-nullable column received no value.
    Null,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Invalid => "invalid",
            Self::TypeError => "type_error",
            Self::MaxLength => "max_length",
            Self::Required => "required",
            Self::Null => "null",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A per-field validation failure.
///
/// Decoding returns this as a value instead of panicking, so a caller that
/// reads several columns can report every bad one. `value` carries the
/// offending input as text when there is one.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("{message}")]
pub struct ValidationError {
    code: ErrorCode,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    params: BTreeMap<&'static str, String>,
}

impl ValidationError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            value: None,
            params: BTreeMap::new(),
        }
    }

    /// Decode failure for `kind`, carrying the raw text.
    pub fn invalid(kind: FieldKind, raw: impl Into<String>) -> Self {
        Self::new(ErrorCode::Invalid, kind.invalid_message()).with_value(raw)
    }

    /// A value whose type the field kind cannot hold.
    pub fn type_error(unsupported: &str) -> Self {
        Self::new(
            ErrorCode::TypeError,
            "Valid choices are int, float, str, list, bool.",
        )
        .with_param("type", unsupported)
    }

    pub fn max_length(limit: usize, length: usize) -> Self {
        Self::new(
            ErrorCode::MaxLength,
            format!("Ensure this value has at most {limit} characters (it has {length})."),
        )
        .with_param("limit", limit.to_string())
        .with_param("length", length.to_string())
    }

    pub fn required() -> Self {
        Self::new(ErrorCode::Required, "This field is required.")
    }

    pub fn null() -> Self {
        Self::new(ErrorCode::Null, "This field cannot be null.")
    }

    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_param(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.params.insert(key, value.into());
        self
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// The offending input, if any.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }
}

/// Every field-level failure found while decoding or encoding one record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{entity_type}: {} invalid field(s): {}", .errors.len(), field_list(.errors))]
pub struct RecordErrors {
    entity_type: String,
    errors: BTreeMap<String, ValidationError>,
}

fn field_list(errors: &BTreeMap<String, ValidationError>) -> String {
    errors.keys().map(String::as_str).collect::<Vec<_>>().join(", ")
}

impl RecordErrors {
    pub(crate) fn new(entity_type: &str) -> Self {
        Self {
            entity_type: entity_type.to_string(),
            errors: BTreeMap::new(),
        }
    }

    pub(crate) fn insert(&mut self, field: &str, error: ValidationError) {
        self.errors.insert(field.to_string(), error);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn entity_type(&self) -> &str {
        &self.entity_type
    }

    /// The error for one field, if that field failed.
    pub fn get(&self, field: &str) -> Option<&ValidationError> {
        self.errors.get(field)
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Failed fields in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ValidationError)> {
        self.errors.iter().map(|(k, v)| (k.as_str(), v))
    }
}
