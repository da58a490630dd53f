/// A field value as it crosses the codec boundary.
///
/// Both directions accept all three shapes: storage hands over `Null` or
/// `Text`, application code usually hands over `Value`, and form input or
/// fixtures may hand over text that is already in canonical form.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue<V> {
    /// No value; maps to a storage `NULL`.
    Null,
    /// Raw text, either from storage or from outside the system.
    Text(String),
    /// Native in-memory value.
    Value(V),
}

impl<V> FieldValue<V> {
    /// Wraps a nullable storage column.
    pub fn from_db(text: Option<&str>) -> Self {
        match text {
            Some(t) => Self::Text(t.to_string()),
            None => Self::Null,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(t) => Some(t),
            _ => None,
        }
    }
}

impl<V> From<Option<V>> for FieldValue<V> {
    fn from(value: Option<V>) -> Self {
        match value {
            Some(v) => Self::Value(v),
            None => Self::Null,
        }
    }
}
