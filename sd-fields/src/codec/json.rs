use super::{FieldCodec, decode_json, encode_or_blank, is_json_str, json_is_empty};
use crate::{FieldKind, ValidationError, validators};
use sd_types::MacAddress;
use serde_json::Value;
use tracing::warn;

/// Any JSON-compatible document. `NULL` and `None` map to each other.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

impl FieldCodec for JsonCodec {
    type Value = Value;

    fn kind(&self) -> FieldKind {
        FieldKind::Json
    }

    fn encode(&self, value: &Value) -> String {
        value.to_string()
    }

    /// Text is a string value here, so it is quoted.
    fn encode_text(&self, text: &str) -> String {
        Value::String(text.to_string()).to_string()
    }

    fn decode(&self, text: &str) -> Result<Option<Value>, ValidationError> {
        decode_json(FieldKind::Json, text).map(Some)
    }

    fn is_empty(&self, value: Option<&Value>) -> bool {
        json_is_empty(value)
    }
}

/// JSON array. Empty text and `NULL` both read back as `[]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListCodec;

impl FieldCodec for ListCodec {
    type Value = Value;

    fn kind(&self) -> FieldKind {
        FieldKind::List
    }

    fn encode(&self, value: &Value) -> String {
        value.to_string()
    }

    fn encode_text(&self, text: &str) -> String {
        encode_text_as_json(text, "[]")
    }

    fn decode(&self, text: &str) -> Result<Option<Value>, ValidationError> {
        if text.is_empty() {
            return Ok(self.decode_null());
        }
        decode_json(FieldKind::List, text).map(Some)
    }

    fn decode_null(&self) -> Option<Value> {
        Some(Value::Array(Vec::new()))
    }

    fn validate(&self, value: Option<&Value>) -> Result<(), ValidationError> {
        validators::validate_list(value)
    }

    fn is_empty(&self, value: Option<&Value>) -> bool {
        json_is_empty(value)
    }
}

/// JSON object. Empty text and `NULL` both read back as `{}`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DictCodec;

impl FieldCodec for DictCodec {
    type Value = Value;

    fn kind(&self) -> FieldKind {
        FieldKind::Dict
    }

    fn encode(&self, value: &Value) -> String {
        value.to_string()
    }

    fn encode_text(&self, text: &str) -> String {
        encode_text_as_json(text, "{}")
    }

    fn decode(&self, text: &str) -> Result<Option<Value>, ValidationError> {
        if text.is_empty() {
            return Ok(self.decode_null());
        }
        decode_json(FieldKind::Dict, text).map(Some)
    }

    fn decode_null(&self) -> Option<Value> {
        Some(Value::Object(serde_json::Map::new()))
    }

    fn validate(&self, value: Option<&Value>) -> Result<(), ValidationError> {
        validators::validate_dict(value)
    }

    fn is_empty(&self, value: Option<&Value>) -> bool {
        json_is_empty(value)
    }
}

/// JSON array of MAC address strings.
///
/// Encoding removes exact-string duplicates and sorts on the stored text.
/// Addresses differing only in letter case are kept apart. Uniqueness is
/// only guaranteed for what is written; a list mutated after a read is not
/// re-checked until the next write.
#[derive(Debug, Clone, Copy, Default)]
pub struct MacSetCodec;

impl MacSetCodec {
    /// Typed view of a decoded set. Fails on the first element that is not a
    /// valid MAC string.
    pub fn addresses(value: &Value) -> Result<Vec<MacAddress>, ValidationError> {
        validators::validate_mac_set(Some(value))?;
        value
            .as_array()
            .into_iter()
            .flatten()
            .map(|item| {
                let text = item.as_str().unwrap_or_default();
                MacAddress::parse(text).map_err(|_| ValidationError::invalid(FieldKind::MacSet, text))
            })
            .collect()
    }

    /// Builds a set value from typed addresses.
    pub fn from_addresses<'a>(addresses: impl IntoIterator<Item = &'a MacAddress>) -> Value {
        Value::Array(
            addresses
                .into_iter()
                .map(|mac| Value::String(mac.as_str().to_string()))
                .collect(),
        )
    }
}

impl FieldCodec for MacSetCodec {
    type Value = Value;

    fn kind(&self) -> FieldKind {
        FieldKind::MacSet
    }

    fn encode(&self, value: &Value) -> String {
        let Some(items) = value.as_array() else {
            warn!("mac set value is not a list, storing blank literal");
            return "[]".to_string();
        };
        let mut macs = Vec::with_capacity(items.len());
        for item in items {
            match item.as_str() {
                Some(mac) => macs.push(mac),
                None => {
                    warn!(element = %item, "mac set element is not a string, storing blank literal");
                    return "[]".to_string();
                }
            }
        }
        macs.sort_unstable();
        macs.dedup();
        encode_or_blank(&macs, "[]")
    }

    fn encode_text(&self, text: &str) -> String {
        encode_text_as_json(text, "[]")
    }

    fn decode(&self, text: &str) -> Result<Option<Value>, ValidationError> {
        if text.is_empty() {
            return Ok(self.decode_null());
        }
        decode_json(FieldKind::MacSet, text).map(Some)
    }

    fn decode_null(&self) -> Option<Value> {
        Some(Value::Array(Vec::new()))
    }

    fn validate(&self, value: Option<&Value>) -> Result<(), ValidationError> {
        validators::validate_mac_set(value)
    }

    fn is_empty(&self, value: Option<&Value>) -> bool {
        json_is_empty(value)
    }
}

/// Already-serialized JSON passes through, empty text becomes the blank
/// container, anything else is stored as a JSON string literal.
fn encode_text_as_json(text: &str, blank: &'static str) -> String {
    if text.is_empty() {
        return blank.to_string();
    }
    if is_json_str(text) {
        return text.to_string();
    }
    encode_or_blank(text, blank)
}
