//! Custom storage column types.
//!
//! Each column kind encodes a structured value into text for a storage
//! column and decodes it back, checking format invariants on the way:
//! - [`JsonCodec`], [`ListCodec`], [`DictCodec`]: JSON documents, arrays, objects
//! - [`GenericObjectCodec`]: int/float/bool/str/list inferred from plain text
//! - [`MacCodec`], [`MacSetCodec`]: MAC addresses and sorted sets of them
//!
//! [`ColumnField`] adapts a codec to the persistence layer's pre-write and
//! post-read hooks; [`FormField`] reuses the same codec for input accepted
//! from outside. [`AnyField`] and [`RecordSchema`] handle columns of mixed
//! kinds.
//!
//! Decode failures are returned as [`ValidationError`] values, never raised,
//! so one bad column does not stop the others from decoding.

pub mod codec;
mod column;
mod dynamic;
mod error;
mod form;
mod kind;
mod record;
pub mod resolver;
mod sqlite;
pub mod validators;
mod value;

pub use codec::{
    DictCodec, FieldCodec, GenericObjectCodec, JsonCodec, ListCodec, MacCodec, MacSetCodec,
    encode_or_blank, is_json_str,
};
pub use column::ColumnField;
pub use dynamic::{AnyField, FieldData};
pub use error::{ErrorCode, RecordErrors, ValidationError};
pub use form::FormField;
pub use kind::{DEFAULT_TEXT_MAX_LENGTH, FieldKind, MAC_MAX_LENGTH, UnknownFieldKind};
pub use record::{Record, RecordSchema, Row};
pub use value::FieldValue;

pub use sd_types::{GenericValue, MacAddress};
