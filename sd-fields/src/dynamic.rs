//! Kind-erased fields for code that handles columns of mixed kinds.

use crate::codec::{
    DictCodec, FieldCodec, GenericObjectCodec, JsonCodec, ListCodec, MacCodec, MacSetCodec,
};
use crate::{ColumnField, ErrorCode, FieldKind, FieldValue, ValidationError};
use sd_types::{GenericValue, MacAddress};
use serde_json::Value;

/// A decoded value of any field kind.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldData {
    /// JSON, list, dict and MAC set columns.
    Json(Value),
    Generic(GenericValue),
    Mac(MacAddress),
}

impl FieldData {
    pub fn variant_name(&self) -> &'static str {
        match self {
            Self::Json(_) => "json",
            Self::Generic(_) => "generic",
            Self::Mac(_) => "mac",
        }
    }

    /// JSON view of the value, whatever its kind.
    pub fn to_json(&self) -> Value {
        match self {
            Self::Json(v) => v.clone(),
            Self::Generic(g) => g.to_json(),
            Self::Mac(m) => Value::String(m.as_str().to_string()),
        }
    }
}

/// One column of any kind, with the fixed operation set
/// {serialize, deserialize, clean, max_length}.
#[derive(Debug, Clone)]
pub enum AnyField {
    Json(ColumnField<JsonCodec>),
    List(ColumnField<ListCodec>),
    Dict(ColumnField<DictCodec>),
    GenericObject(ColumnField<GenericObjectCodec>),
    Mac(ColumnField<MacCodec>),
    MacSet(ColumnField<MacSetCodec>),
}

impl AnyField {
    /// Nullable column of `kind` with the default length ceiling.
    pub fn for_kind(kind: FieldKind) -> Self {
        match kind {
            FieldKind::Json => Self::Json(ColumnField::new(JsonCodec)),
            FieldKind::List => Self::List(ColumnField::new(ListCodec)),
            FieldKind::Dict => Self::Dict(ColumnField::new(DictCodec)),
            FieldKind::GenericObject => Self::GenericObject(ColumnField::new(GenericObjectCodec)),
            FieldKind::Mac => Self::Mac(ColumnField::new(MacCodec)),
            FieldKind::MacSet => Self::MacSet(ColumnField::new(MacSetCodec)),
        }
    }

    #[must_use]
    pub fn with_max_length(self, max_length: usize) -> Self {
        match self {
            Self::Json(f) => Self::Json(f.with_max_length(max_length)),
            Self::List(f) => Self::List(f.with_max_length(max_length)),
            Self::Dict(f) => Self::Dict(f.with_max_length(max_length)),
            Self::GenericObject(f) => Self::GenericObject(f.with_max_length(max_length)),
            Self::Mac(f) => Self::Mac(f.with_max_length(max_length)),
            Self::MacSet(f) => Self::MacSet(f.with_max_length(max_length)),
        }
    }

    #[must_use]
    pub fn with_nullable(self, nullable: bool) -> Self {
        match self {
            Self::Json(f) => Self::Json(f.with_nullable(nullable)),
            Self::List(f) => Self::List(f.with_nullable(nullable)),
            Self::Dict(f) => Self::Dict(f.with_nullable(nullable)),
            Self::GenericObject(f) => Self::GenericObject(f.with_nullable(nullable)),
            Self::Mac(f) => Self::Mac(f.with_nullable(nullable)),
            Self::MacSet(f) => Self::MacSet(f.with_nullable(nullable)),
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            Self::Json(_) => FieldKind::Json,
            Self::List(_) => FieldKind::List,
            Self::Dict(_) => FieldKind::Dict,
            Self::GenericObject(_) => FieldKind::GenericObject,
            Self::Mac(_) => FieldKind::Mac,
            Self::MacSet(_) => FieldKind::MacSet,
        }
    }

    pub fn max_length(&self) -> usize {
        match self {
            Self::Json(f) => f.max_length(),
            Self::List(f) => f.max_length(),
            Self::Dict(f) => f.max_length(),
            Self::GenericObject(f) => f.max_length(),
            Self::Mac(f) => f.max_length(),
            Self::MacSet(f) => f.max_length(),
        }
    }

    pub fn db_type(&self) -> String {
        self.kind().db_type(self.max_length())
    }

    /// Pre-write conversion. A value of the wrong variant is a `type_error`.
    pub fn serialize(&self, value: Option<&FieldData>) -> Result<Option<String>, ValidationError> {
        let Some(value) = value else {
            return Ok(None);
        };
        let text = match self {
            Self::Json(f) => f.codec().encode(self.expect_json(value)?),
            Self::List(f) => f.codec().encode(self.expect_json(value)?),
            Self::Dict(f) => f.codec().encode(self.expect_json(value)?),
            Self::MacSet(f) => f.codec().encode(self.expect_json(value)?),
            Self::GenericObject(f) => f.codec().encode(&self.expect_generic(value.clone())?),
            Self::Mac(f) => f.codec().encode(&self.expect_mac(value.clone())?),
        };
        Ok(Some(text))
    }

    /// Post-read conversion of nullable column text.
    pub fn deserialize(&self, text: Option<&str>) -> Result<Option<FieldData>, ValidationError> {
        match self {
            Self::Json(f) => f.from_db_value(text).map(|v| v.map(FieldData::Json)),
            Self::List(f) => f.from_db_value(text).map(|v| v.map(FieldData::Json)),
            Self::Dict(f) => f.from_db_value(text).map(|v| v.map(FieldData::Json)),
            Self::MacSet(f) => f.from_db_value(text).map(|v| v.map(FieldData::Json)),
            Self::GenericObject(f) => f.from_db_value(text).map(|v| v.map(FieldData::Generic)),
            Self::Mac(f) => f.from_db_value(text).map(|v| v.map(FieldData::Mac)),
        }
    }

    /// Accept-time check of a typed value.
    pub fn clean(&self, value: Option<FieldData>) -> Result<Option<FieldData>, ValidationError> {
        match self {
            Self::Json(f) => clean_json(f, self, value),
            Self::List(f) => clean_json(f, self, value),
            Self::Dict(f) => clean_json(f, self, value),
            Self::MacSet(f) => clean_json(f, self, value),
            Self::GenericObject(f) => {
                let input = value.map(|v| self.expect_generic(v)).transpose()?;
                f.clean(FieldValue::from(input))
                    .map(|v| v.map(FieldData::Generic))
            }
            Self::Mac(f) => {
                let input = value.map(|v| self.expect_mac(v)).transpose()?;
                f.clean(FieldValue::from(input)).map(|v| v.map(FieldData::Mac))
            }
        }
    }

    fn expect_json<'a>(&self, value: &'a FieldData) -> Result<&'a Value, ValidationError> {
        match value {
            FieldData::Json(v) => Ok(v),
            other => Err(self.mismatch(other)),
        }
    }

    /// JSON input is converted when it has a generic counterpart.
    fn expect_generic(&self, value: FieldData) -> Result<GenericValue, ValidationError> {
        match value {
            FieldData::Generic(g) => Ok(g),
            FieldData::Json(v) => GenericObjectCodec::from_json(v),
            other => Err(self.mismatch(&other)),
        }
    }

    /// A JSON string is parsed as an address.
    fn expect_mac(&self, value: FieldData) -> Result<MacAddress, ValidationError> {
        match value {
            FieldData::Mac(m) => Ok(m),
            FieldData::Json(Value::String(s)) => {
                MacAddress::parse(&s).map_err(|_| ValidationError::invalid(FieldKind::Mac, s))
            }
            other => Err(self.mismatch(&other)),
        }
    }

    fn mismatch(&self, value: &FieldData) -> ValidationError {
        ValidationError::new(
            ErrorCode::TypeError,
            format!(
                "{} column cannot hold a {} value",
                self.kind(),
                value.variant_name()
            ),
        )
        .with_param("type", value.variant_name())
    }
}

fn clean_json<C>(
    field: &ColumnField<C>,
    any: &AnyField,
    value: Option<FieldData>,
) -> Result<Option<FieldData>, ValidationError>
where
    C: FieldCodec<Value = Value>,
{
    let input = match value {
        Some(FieldData::Json(v)) => FieldValue::Value(v),
        Some(other) => return Err(any.mismatch(&other)),
        None => FieldValue::Null,
    };
    field.clean(input).map(|v| v.map(FieldData::Json))
}

impl From<FieldKind> for AnyField {
    fn from(kind: FieldKind) -> Self {
        Self::for_kind(kind)
    }
}
