//! Type inference for generic-object columns.
//!
//! Column text is classified by trying these rules in order:
//!
//! 1. integer literal (`i64`, no `.` or exponent) → `Int`
//! 2. finite float literal → `Float`
//! 3. `true`/`false` (also `True`/`False`) → `Bool`
//! 4. JSON array of numbers, booleans, strings or nested such arrays → `List`
//! 5. anything else → `Str`, verbatim
//!
//! Whitespace is significant: text with surrounding whitespace never
//! matches rules 1 to 4. Rule 5 always matches, so decoding cannot fail. JSON objects are not
//! given structural treatment and stay strings.
//!
//! Encoding writes each value in its natural text form, so
//! `infer_and_decode(&encode(v))` reproduces `v` with one exception: a float
//! with no fractional part prints without a decimal point and reads back as
//! an integer (`3.0` → `"3"` → `Int(3)`). NaN and infinite floats have no
//! text form at all; `GenericObjectCodec` refuses them at validation.

use sd_types::GenericValue;

/// Classifies raw column text.
pub fn infer_and_decode(raw: &str) -> GenericValue {
    if let Some(i) = parse_int(raw) {
        return GenericValue::Int(i);
    }
    if let Some(f) = parse_float(raw) {
        return GenericValue::Float(f);
    }
    if let Some(b) = parse_bool(raw) {
        return GenericValue::Bool(b);
    }
    if let Some(items) = parse_list(raw) {
        return GenericValue::List(items);
    }
    GenericValue::Str(raw.to_string())
}

/// Writes a value in the text form `infer_and_decode` reads.
pub fn encode(value: &GenericValue) -> String {
    match value {
        GenericValue::Str(s) => s.clone(),
        GenericValue::List(_) => value.to_json().to_string(),
        GenericValue::Int(i) => i.to_string(),
        GenericValue::Float(f) => f.to_string(),
        GenericValue::Bool(b) => b.to_string(),
    }
}

fn parse_int(raw: &str) -> Option<i64> {
    if raw.contains(['.', 'e', 'E']) {
        return None;
    }
    raw.parse().ok()
}

fn parse_float(raw: &str) -> Option<f64> {
    raw.parse::<f64>().ok().filter(|f| f.is_finite())
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw {
        "true" | "True" => Some(true),
        "false" | "False" => Some(false),
        _ => None,
    }
}

fn parse_list(raw: &str) -> Option<Vec<GenericValue>> {
    if !(raw.starts_with('[') && raw.ends_with(']')) {
        return None;
    }
    match serde_json::from_str(raw).ok()? {
        array @ serde_json::Value::Array(_) => match GenericValue::try_from(array).ok()? {
            GenericValue::List(items) => Some(items),
            _ => None,
        },
        _ => None,
    }
}
