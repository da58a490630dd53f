use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Default ceiling for JSON-shaped and generic-object columns.
pub const DEFAULT_TEXT_MAX_LENGTH: usize = 2048;

/// Width of a MAC column: six hex pairs and five separators.
pub const MAC_MAX_LENGTH: usize = 17;

/// The supported storage column kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Any JSON-compatible document.
    Json,
    /// JSON array.
    List,
    /// JSON object.
    Dict,
    /// int, float, bool, str or list, stored as plain text.
    GenericObject,
    /// Single MAC address.
    Mac,
    /// Sorted, de-duplicated JSON array of MAC addresses.
    MacSet,
}

impl FieldKind {
    pub const ALL: [FieldKind; 6] = [
        FieldKind::Json,
        FieldKind::List,
        FieldKind::Dict,
        FieldKind::GenericObject,
        FieldKind::Mac,
        FieldKind::MacSet,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::List => "list",
            Self::Dict => "dict",
            Self::GenericObject => "generic_object",
            Self::Mac => "mac",
            Self::MacSet => "mac_set",
        }
    }

    pub fn default_max_length(&self) -> usize {
        match self {
            Self::Mac => MAC_MAX_LENGTH,
            _ => DEFAULT_TEXT_MAX_LENGTH,
        }
    }

    /// JSON-shaped kinds live in unbounded text columns; the rest are
    /// bounded character columns.
    pub fn is_text_column(&self) -> bool {
        matches!(self, Self::Json | Self::List | Self::Dict | Self::MacSet)
    }

    /// Column type for schema generation.
    pub fn db_type(&self, max_length: usize) -> String {
        if self.is_text_column() {
            "text".to_string()
        } else {
            format!("varchar({max_length})")
        }
    }

    pub(crate) fn invalid_message(&self) -> &'static str {
        match self {
            Self::Json => "value must be a jsonable string or null",
            Self::List => "value must be a list-like jsonable string or null",
            Self::Dict => "value must be a dict-like jsonable string or null",
            Self::GenericObject => "Valid choices are int, float, str, list, bool.",
            Self::Mac => "value must be a valid MAC address",
            Self::MacSet => "value must be a list of valid MAC addresses",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when parsing an unknown field kind name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown field kind `{0}`; expected json|list|dict|generic_object|mac|mac_set")]
pub struct UnknownFieldKind(pub String);

impl FromStr for FieldKind {
    type Err = UnknownFieldKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "json" => Ok(Self::Json),
            "list" => Ok(Self::List),
            "dict" => Ok(Self::Dict),
            "generic" | "generic_object" => Ok(Self::GenericObject),
            "mac" => Ok(Self::Mac),
            "mac_set" | "macset" => Ok(Self::MacSet),
            _ => Err(UnknownFieldKind(s.to_string())),
        }
    }
}
