//! Format checks on decoded values.
//!
//! Each check takes the value after decoding and either passes or returns a
//! [`ValidationError`] carrying the offending value. `None` passes every
//! shape check; whether a value is required is the adapter's business.

use crate::{ErrorCode, FieldKind, ValidationError};
use sd_types::{GenericValue, MacAddress};
use serde_json::Value;

/// Fails unless the value is a JSON array or absent.
pub fn validate_list(value: Option<&Value>) -> Result<(), ValidationError> {
    match value {
        None | Some(Value::Array(_)) => Ok(()),
        Some(other) => Err(shape_error(FieldKind::List, other)),
    }
}

/// Fails unless the value is a JSON object or absent.
pub fn validate_dict(value: Option<&Value>) -> Result<(), ValidationError> {
    match value {
        None | Some(Value::Object(_)) => Ok(()),
        Some(other) => Err(shape_error(FieldKind::Dict, other)),
    }
}

/// Fails unless `text` is six hex pairs separated by `:` or `-`.
pub fn validate_mac(text: &str) -> Result<(), ValidationError> {
    if MacAddress::is_valid(text) {
        Ok(())
    } else {
        Err(ValidationError::invalid(FieldKind::Mac, text))
    }
}

/// List check, then the MAC check on every element.
pub fn validate_mac_set(value: Option<&Value>) -> Result<(), ValidationError> {
    let Some(value) = value else {
        return Ok(());
    };
    let Value::Array(items) = value else {
        return Err(shape_error(FieldKind::MacSet, value));
    };
    for item in items {
        match item.as_str() {
            Some(text) if MacAddress::is_valid(text) => {}
            Some(text) => return Err(ValidationError::invalid(FieldKind::MacSet, text)),
            None => return Err(ValidationError::invalid(FieldKind::MacSet, item.to_string())),
        }
    }
    Ok(())
}

/// Fails when a generic value holds a NaN or infinite float, at any depth.
/// Such floats have no text form that reads back as a float.
pub fn validate_generic(value: Option<&GenericValue>) -> Result<(), ValidationError> {
    match value {
        Some(GenericValue::Float(f)) if !f.is_finite() => Err(ValidationError::new(
            ErrorCode::Invalid,
            "float value must be finite",
        )
        .with_value(f.to_string())),
        Some(GenericValue::List(items)) => items
            .iter()
            .try_for_each(|item| validate_generic(Some(item))),
        _ => Ok(()),
    }
}

/// Fails when `text` has more than `limit` characters. Counts characters,
/// not bytes.
pub fn validate_max_length(text: &str, limit: usize) -> Result<(), ValidationError> {
    let length = text.chars().count();
    if length > limit {
        return Err(ValidationError::max_length(limit, length).with_value(text));
    }
    Ok(())
}

fn shape_error(kind: FieldKind, value: &Value) -> ValidationError {
    ValidationError::new(ErrorCode::Invalid, kind.invalid_message()).with_value(value.to_string())
}
