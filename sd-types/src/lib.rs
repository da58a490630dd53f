//! Value types for the `sd` custom field layer.
//!
//! This crate defines the in-memory values that the field codecs produce and
//! consume, independent of any storage engine:
//! - MAC addresses in canonical colon-separated text form
//! - Loosely typed scalars stored as plain text (int, float, bool, str, list)
//!
//! JSON-shaped values (documents, lists, dicts) use `serde_json::Value`
//! directly and need no wrapper here.

mod generic;
mod mac;

pub use generic::GenericValue;
pub use mac::MacAddress;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when constructing value types.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid MAC address: {0}")]
    InvalidMac(String),

    #[error("unsupported generic value type: {0}")]
    UnsupportedType(&'static str),
}
