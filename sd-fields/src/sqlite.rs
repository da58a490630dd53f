//! SQLite bindings for column fields.
//!
//! Values are written as TEXT or NULL. On read, INTEGER and REAL cells are
//! accepted as their text rendering, since SQLite may store a numeric-looking
//! value with numeric affinity. BLOB cells are rejected.

use crate::codec::FieldCodec;
use crate::{AnyField, ColumnField, FieldData, FieldKind, FieldValue, ValidationError};
use rusqlite::types::{Value as SqlValue, ValueRef};
use std::borrow::Cow;

impl<C: FieldCodec> ColumnField<C> {
    /// Parameter value for an INSERT or UPDATE.
    pub fn to_sql(&self, value: &FieldValue<C::Value>) -> SqlValue {
        match self.get_prep_value(value) {
            Some(text) => SqlValue::Text(text),
            None => SqlValue::Null,
        }
    }

    /// Decodes a cell read from SQLite.
    pub fn from_sql(&self, cell: ValueRef<'_>) -> Result<Option<C::Value>, ValidationError> {
        let text = cell_text(self.kind(), cell)?;
        self.from_db_value(text.as_deref())
    }
}

impl AnyField {
    pub fn to_sql(&self, value: Option<&FieldData>) -> Result<SqlValue, ValidationError> {
        Ok(match self.serialize(value)? {
            Some(text) => SqlValue::Text(text),
            None => SqlValue::Null,
        })
    }

    pub fn from_sql(&self, cell: ValueRef<'_>) -> Result<Option<FieldData>, ValidationError> {
        let text = cell_text(self.kind(), cell)?;
        self.deserialize(text.as_deref())
    }
}

fn cell_text(kind: FieldKind, cell: ValueRef<'_>) -> Result<Option<Cow<'_, str>>, ValidationError> {
    match cell {
        ValueRef::Null => Ok(None),
        ValueRef::Text(bytes) => std::str::from_utf8(bytes)
            .map(|s| Some(Cow::Borrowed(s)))
            .map_err(|_| ValidationError::invalid(kind, String::from_utf8_lossy(bytes))),
        ValueRef::Integer(i) => Ok(Some(Cow::Owned(i.to_string()))),
        ValueRef::Real(f) => Ok(Some(Cow::Owned(f.to_string()))),
        ValueRef::Blob(bytes) => {
            Err(ValidationError::invalid(kind, format!("<blob of {} bytes>", bytes.len())))
        }
    }
}
