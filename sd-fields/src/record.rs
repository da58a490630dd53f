//! Whole-record decode and encode over a set of named columns.
//!
//! Every field is attempted even after one fails, so a caller gets the full
//! list of bad fields in one pass.

use crate::{AnyField, FieldData, RecordErrors};
use std::collections::BTreeMap;
use tracing::debug;

/// Raw column text keyed by column name. `None` is a storage `NULL`.
pub type Row = BTreeMap<String, Option<String>>;

/// Named, ordered custom columns of one entity type.
#[derive(Debug, Clone)]
pub struct RecordSchema {
    entity_type: String,
    fields: Vec<(String, AnyField)>,
}

impl RecordSchema {
    pub fn new(entity_type: impl Into<String>) -> Self {
        Self {
            entity_type: entity_type.into(),
            fields: Vec::new(),
        }
    }

    /// Adds a column. A second column with the same name replaces the first.
    #[must_use]
    pub fn field(mut self, name: impl Into<String>, field: impl Into<AnyField>) -> Self {
        let name = name.into();
        let field = field.into();
        match self.fields.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = field,
            None => self.fields.push((name, field)),
        }
        self
    }

    pub fn entity_type(&self) -> &str {
        &self.entity_type
    }

    pub fn get(&self, name: &str) -> Option<&AnyField> {
        self.fields.iter().find(|(n, _)| n == name).map(|(_, f)| f)
    }

    /// Columns in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &AnyField)> {
        self.fields.iter().map(|(n, f)| (n.as_str(), f))
    }

    /// Decodes every column of a stored row. Missing columns read as `NULL`;
    /// columns the schema does not know are ignored.
    pub fn decode_row(&self, row: &Row) -> Result<Record, RecordErrors> {
        let mut record = Record::default();
        let mut errors = RecordErrors::new(&self.entity_type);
        for (name, field) in &self.fields {
            let text = row.get(name).and_then(|t| t.as_deref());
            match field.deserialize(text) {
                Ok(value) => record.set(name.as_str(), value),
                Err(err) => {
                    debug!(entity_type = %self.entity_type, field = %name, code = %err.code(), "field failed to decode");
                    errors.insert(name, err);
                }
            }
        }
        if errors.is_empty() {
            Ok(record)
        } else {
            Err(errors)
        }
    }

    /// Cleans every column and produces the row to write. Nothing is
    /// produced unless every column passes.
    pub fn encode_record(&self, record: &Record) -> Result<Row, RecordErrors> {
        let mut row = Row::new();
        let mut errors = RecordErrors::new(&self.entity_type);
        for (name, field) in &self.fields {
            let value = record.get(name).cloned();
            let encoded = field
                .clean(value)
                .and_then(|cleaned| field.serialize(cleaned.as_ref()));
            match encoded {
                Ok(text) => {
                    row.insert(name.clone(), text);
                }
                Err(err) => {
                    debug!(entity_type = %self.entity_type, field = %name, code = %err.code(), "field failed to clean");
                    errors.insert(name, err);
                }
            }
        }
        if errors.is_empty() {
            Ok(row)
        } else {
            Err(errors)
        }
    }
}

/// Decoded values keyed by column name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    values: BTreeMap<String, Option<FieldData>>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value of a column; `None` when the column is absent or null.
    pub fn get(&self, name: &str) -> Option<&FieldData> {
        self.values.get(name).and_then(Option::as_ref)
    }

    pub fn set(&mut self, name: impl Into<String>, value: Option<FieldData>) {
        self.values.insert(name.into(), value);
    }

    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: FieldData) -> Self {
        self.set(name, Some(value));
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&FieldData>)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_ref()))
    }
}
