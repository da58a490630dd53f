//! Input form adapter.

use crate::codec::FieldCodec;
use crate::validators::validate_max_length;
use crate::{FieldKind, FieldValue, ValidationError};

/// Accepts raw text from outside the system.
///
/// Runs the same codec and validators as the matching [`ColumnField`], so a
/// value accepted here is one the column will accept too.
///
/// [`ColumnField`]: crate::ColumnField
#[derive(Debug, Clone)]
pub struct FormField<C> {
    codec: C,
    max_length: usize,
    required: bool,
}

impl<C: FieldCodec> FormField<C> {
    /// Required field with the kind's default length ceiling.
    pub fn new(codec: C) -> Self {
        let max_length = codec.kind().default_max_length();
        Self {
            codec,
            max_length,
            required: true,
        }
    }

    #[must_use]
    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }

    #[must_use]
    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn kind(&self) -> FieldKind {
        self.codec.kind()
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Length check on the submitted text, decode, required check, then the
    /// kind's validators. Blank input is treated as no input.
    pub fn clean(&self, raw: Option<&str>) -> Result<Option<C::Value>, ValidationError> {
        let input = match raw {
            None | Some("") => FieldValue::Null,
            Some(text) => {
                validate_max_length(text, self.max_length)?;
                FieldValue::Text(text.to_string())
            }
        };
        let value = self.codec.deserialize(input)?;
        if self.required && self.codec.is_empty(value.as_ref()) {
            return Err(ValidationError::required());
        }
        self.codec.validate(value.as_ref())?;
        Ok(value)
    }

    /// Text shown back to the user for an existing value.
    pub fn prepare_value(&self, value: &FieldValue<C::Value>) -> String {
        self.codec.serialize(value).unwrap_or_default()
    }
}
