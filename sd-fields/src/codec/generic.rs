use super::FieldCodec;
use crate::{FieldKind, ValidationError, resolver, validators};
use sd_types::GenericValue;

/// Loosely typed scalar stored as plain text. The type is inferred from
/// the text on every read; see [`resolver`] for the rules.
#[derive(Debug, Clone, Copy, Default)]
pub struct GenericObjectCodec;

impl GenericObjectCodec {
    /// Converts a JSON value, rejecting shapes with no generic counterpart.
    pub fn from_json(value: serde_json::Value) -> Result<GenericValue, ValidationError> {
        let shown = value.to_string();
        GenericValue::try_from(value).map_err(|err| match err {
            sd_types::Error::UnsupportedType(kind) => {
                ValidationError::type_error(kind).with_value(shown)
            }
            other => ValidationError::invalid(FieldKind::GenericObject, other.to_string()),
        })
    }
}

impl FieldCodec for GenericObjectCodec {
    type Value = GenericValue;

    fn kind(&self) -> FieldKind {
        FieldKind::GenericObject
    }

    fn encode(&self, value: &GenericValue) -> String {
        resolver::encode(value)
    }

    fn encode_text(&self, text: &str) -> String {
        text.to_string()
    }

    fn decode(&self, text: &str) -> Result<Option<GenericValue>, ValidationError> {
        Ok(Some(resolver::infer_and_decode(text)))
    }

    fn validate(&self, value: Option<&GenericValue>) -> Result<(), ValidationError> {
        validators::validate_generic(value)
    }

    fn is_empty(&self, value: Option<&GenericValue>) -> bool {
        match value {
            None => true,
            Some(GenericValue::Str(s)) => s.is_empty(),
            Some(GenericValue::List(items)) => items.is_empty(),
            Some(_) => false,
        }
    }
}
