//! Storage column adapter.

use crate::codec::FieldCodec;
use crate::form::FormField;
use crate::validators::validate_max_length;
use crate::{FieldKind, FieldValue, ValidationError};

/// A storage column backed by one codec.
///
/// The persistence layer calls [`get_prep_value`](Self::get_prep_value)
/// before a write and [`from_db_value`](Self::from_db_value) after a read.
/// [`clean`](Self::clean) is the accept-time check: length ceiling, decode,
/// null check and codec validation.
#[derive(Debug, Clone)]
pub struct ColumnField<C> {
    codec: C,
    max_length: usize,
    nullable: bool,
}

impl<C: FieldCodec> ColumnField<C> {
    /// Nullable column with the kind's default length ceiling.
    pub fn new(codec: C) -> Self {
        let max_length = codec.kind().default_max_length();
        Self {
            codec,
            max_length,
            nullable: true,
        }
    }

    /// Overrides the length ceiling.
    #[must_use]
    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }

    #[must_use]
    pub fn with_nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    pub fn kind(&self) -> FieldKind {
        self.codec.kind()
    }

    pub fn codec(&self) -> &C {
        &self.codec
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    pub fn is_nullable(&self) -> bool {
        self.nullable
    }

    /// Column type for schema generation.
    pub fn db_type(&self) -> String {
        self.kind().db_type(self.max_length)
    }

    pub fn get_prep_value(&self, value: &FieldValue<C::Value>) -> Option<String> {
        self.codec.serialize(value)
    }

    /// Decodes column text. A decode failure comes back as `Err` for the
    /// caller to report against this field.
    pub fn from_db_value(&self, text: Option<&str>) -> Result<Option<C::Value>, ValidationError> {
        self.to_python(FieldValue::from_db(text))
    }

    pub fn to_python(&self, value: FieldValue<C::Value>) -> Result<Option<C::Value>, ValidationError> {
        self.codec.deserialize(value)
    }

    pub fn validate(&self, value: Option<&C::Value>) -> Result<(), ValidationError> {
        if value.is_none() && !self.nullable {
            return Err(ValidationError::null());
        }
        self.codec.validate(value)
    }

    pub fn check_length(&self, text: &str) -> Result<(), ValidationError> {
        validate_max_length(text, self.max_length)
    }

    /// Full accept-time check of a new or edited value. Submitted text is
    /// held to the length ceiling as given, the same as a form would; a
    /// native value is measured by its canonical text.
    pub fn clean(&self, value: FieldValue<C::Value>) -> Result<Option<C::Value>, ValidationError> {
        let measure_canonical = match &value {
            FieldValue::Text(text) => {
                self.check_length(text)?;
                false
            }
            _ => true,
        };
        let value = self.to_python(value)?;
        self.validate(value.as_ref())?;
        if let Some(v) = value.as_ref().filter(|_| measure_canonical) {
            self.check_length(&self.codec.encode(v))?;
        }
        Ok(value)
    }
}

impl<C: FieldCodec + Clone> ColumnField<C> {
    /// Input form field sharing this column's codec and length ceiling.
    pub fn formfield(&self) -> FormField<C> {
        FormField::new(self.codec.clone())
            .with_max_length(self.max_length)
            .with_required(!self.nullable)
    }
}
