//! Loosely typed scalar values stored as plain text.
//!
//! A `GenericValue` is what a generic-object column holds after its text
//! has been classified. Only five shapes are supported; JSON `null` and
//! JSON objects have no counterpart and are rejected on conversion.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of int, float, bool, str, or a list of those.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GenericValue {
    Int(i64),
    Float(f64),
    Bool(bool),
    Str(String),
    List(Vec<GenericValue>),
}

impl GenericValue {
    /// Short name of the value's type class, as shown in error messages.
    #[must_use]
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Bool(_) => "bool",
            Self::Str(_) => "str",
            Self::List(_) => "list",
        }
    }

    /// Returns the list elements, if this is a list.
    #[must_use]
    pub fn as_list(&self) -> Option<&[GenericValue]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the string, if this is a string.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Converts to a JSON value. Non-finite floats become `null`.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Self::Int(i) => serde_json::Value::from(*i),
            Self::Float(f) => serde_json::Number::from_f64(*f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Self::Bool(b) => serde_json::Value::Bool(*b),
            Self::Str(s) => serde_json::Value::String(s.clone()),
            Self::List(items) => {
                serde_json::Value::Array(items.iter().map(Self::to_json).collect())
            }
        }
    }
}

impl TryFrom<serde_json::Value> for GenericValue {
    type Error = Error;

    fn try_from(value: serde_json::Value) -> Result<Self> {
        match value {
            serde_json::Value::Null => Err(Error::UnsupportedType("null")),
            serde_json::Value::Object(_) => Err(Error::UnsupportedType("object")),
            serde_json::Value::Bool(b) => Ok(Self::Bool(b)),
            serde_json::Value::String(s) => Ok(Self::Str(s)),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Ok(Self::Int(i)),
                None => n
                    .as_f64()
                    .map(Self::Float)
                    .ok_or(Error::UnsupportedType("number")),
            },
            serde_json::Value::Array(items) => items
                .into_iter()
                .map(Self::try_from)
                .collect::<Result<Vec<_>>>()
                .map(Self::List),
        }
    }
}

impl From<i64> for GenericValue {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<f64> for GenericValue {
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}

impl From<bool> for GenericValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<&str> for GenericValue {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for GenericValue {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<Vec<GenericValue>> for GenericValue {
    fn from(items: Vec<GenericValue>) -> Self {
        Self::List(items)
    }
}

impl fmt::Display for GenericValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Str(s) => f.write_str(s),
            Self::List(_) => write!(f, "{}", self.to_json()),
        }
    }
}
