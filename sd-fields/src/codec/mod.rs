//! Codec core: conversions between in-memory values and column text.
//!
//! Every field kind implements [`FieldCodec`]. A codec only converts and
//! checks shape; length ceilings belong to the adapters in `column` and
//! `form`.
//!
//! Codecs are stateless unit structs. They hold nothing between calls and
//! are safe to share across threads without locking.

mod generic;
mod json;
mod mac;

pub use generic::GenericObjectCodec;
pub use json::{DictCodec, JsonCodec, ListCodec, MacSetCodec};
pub use mac::MacCodec;

use crate::{FieldKind, FieldValue, ValidationError};
use serde::Serialize;
use std::fmt;
use tracing::{debug, warn};

/// Bidirectional text codec for one field kind.
///
/// Implementors supply the kind-specific `encode*`/`decode*` hooks; the
/// provided `serialize`/`deserialize` methods apply the shared null and
/// pass-through policy.
pub trait FieldCodec: Send + Sync {
    type Value: Clone + fmt::Debug + PartialEq + Send + Sync;

    fn kind(&self) -> FieldKind;

    /// Canonical text for a native value.
    fn encode(&self, value: &Self::Value) -> String;

    /// Canonical text for input that is already textual.
    fn encode_text(&self, text: &str) -> String;

    /// Parses column text. Failures are returned, never raised.
    fn decode(&self, text: &str) -> Result<Option<Self::Value>, ValidationError>;

    /// Value produced for a storage `NULL`.
    fn decode_null(&self) -> Option<Self::Value> {
        None
    }

    /// Shape check on a decoded value.
    fn validate(&self, value: Option<&Self::Value>) -> Result<(), ValidationError> {
        let _ = value;
        Ok(())
    }

    /// Whether a decoded value counts as "not filled in".
    fn is_empty(&self, value: Option<&Self::Value>) -> bool {
        value.is_none()
    }

    /// Pre-write conversion. `None` means the column is written as `NULL`.
    fn serialize(&self, value: &FieldValue<Self::Value>) -> Option<String> {
        match value {
            FieldValue::Null => None,
            FieldValue::Text(text) => Some(self.encode_text(text)),
            FieldValue::Value(v) => Some(self.encode(v)),
        }
    }

    /// Post-read conversion.
    fn deserialize(
        &self,
        value: FieldValue<Self::Value>,
    ) -> Result<Option<Self::Value>, ValidationError> {
        match value {
            FieldValue::Value(v) => Ok(Some(v)),
            FieldValue::Null => Ok(self.decode_null()),
            FieldValue::Text(text) => self.decode(&text),
        }
    }
}

/// Returns true when `text` parses as a JSON document.
pub fn is_json_str(text: &str) -> bool {
    serde_json::from_str::<serde::de::IgnoredAny>(text).is_ok()
}

/// JSON-encodes `value`, falling back to `blank` when it cannot be encoded
/// (for example a map with non-string keys).
pub fn encode_or_blank<T: Serialize + ?Sized>(value: &T, blank: &'static str) -> String {
    match serde_json::to_string(value) {
        Ok(text) => text,
        Err(err) => {
            warn!(error = %err, blank, "value is not JSON-encodable, storing blank literal");
            blank.to_string()
        }
    }
}

pub(crate) fn decode_json(
    kind: FieldKind,
    text: &str,
) -> Result<serde_json::Value, ValidationError> {
    serde_json::from_str(text).map_err(|err| {
        debug!(%kind, error = %err, "deferring JSON decode failure");
        ValidationError::invalid(kind, text)
    })
}

pub(crate) fn json_is_empty(value: Option<&serde_json::Value>) -> bool {
    match value {
        None => true,
        Some(serde_json::Value::String(s)) => s.is_empty(),
        Some(serde_json::Value::Array(items)) => items.is_empty(),
        Some(serde_json::Value::Object(map)) => map.is_empty(),
        Some(_) => false,
    }
}
