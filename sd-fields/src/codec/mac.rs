use super::FieldCodec;
use crate::{FieldKind, ValidationError, validators};
use sd_types::MacAddress;
use tracing::debug;

/// Single MAC address in `XX:XX:XX:XX:XX:XX` form.
#[derive(Debug, Clone, Copy, Default)]
pub struct MacCodec;

impl FieldCodec for MacCodec {
    type Value = MacAddress;

    fn kind(&self) -> FieldKind {
        FieldKind::Mac
    }

    fn encode(&self, value: &MacAddress) -> String {
        value.as_str().to_string()
    }

    /// Only the separator is rewritten; pattern checks happen in `validate`.
    fn encode_text(&self, text: &str) -> String {
        text.replace('-', ":")
    }

    fn decode(&self, text: &str) -> Result<Option<MacAddress>, ValidationError> {
        if text.is_empty() {
            return Ok(None);
        }
        MacAddress::parse(text).map(Some).map_err(|err| {
            debug!(error = %err, "deferring MAC decode failure");
            ValidationError::invalid(FieldKind::Mac, text)
        })
    }

    fn validate(&self, value: Option<&MacAddress>) -> Result<(), ValidationError> {
        match value {
            Some(mac) => validators::validate_mac(mac.as_str()),
            None => Ok(()),
        }
    }
}
