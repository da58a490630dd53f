use pretty_assertions::assert_eq;
use sd_types::{Error, GenericValue};
use serde_json::json;

// ── Conversions from JSON ─────────────────────────────────────────

#[test]
fn json_integer_becomes_int() {
    assert_eq!(GenericValue::try_from(json!(42)).unwrap(), GenericValue::Int(42));
}

#[test]
fn json_float_becomes_float() {
    assert_eq!(
        GenericValue::try_from(json!(2.5)).unwrap(),
        GenericValue::Float(2.5)
    );
}

#[test]
fn json_array_converts_recursively() {
    let value = GenericValue::try_from(json!([1, "a", [true]])).unwrap();
    assert_eq!(
        value,
        GenericValue::List(vec![
            GenericValue::Int(1),
            GenericValue::Str("a".into()),
            GenericValue::List(vec![GenericValue::Bool(true)]),
        ])
    );
}

#[test]
fn json_null_is_unsupported() {
    let err = GenericValue::try_from(json!(null)).unwrap_err();
    assert!(matches!(err, Error::UnsupportedType("null")));
}

#[test]
fn json_object_is_unsupported() {
    let err = GenericValue::try_from(json!({"a": 1})).unwrap_err();
    assert!(matches!(err, Error::UnsupportedType("object")));
}

#[test]
fn nested_object_in_array_is_unsupported() {
    assert!(GenericValue::try_from(json!([1, {"a": 1}])).is_err());
}

// ── Conversions to JSON ───────────────────────────────────────────

#[test]
fn to_json_mirrors_shape() {
    let value = GenericValue::List(vec![1i64.into(), 1.5.into(), "x".into(), false.into()]);
    assert_eq!(value.to_json(), json!([1, 1.5, "x", false]));
}

#[test]
fn to_json_maps_nan_to_null() {
    assert_eq!(GenericValue::Float(f64::NAN).to_json(), json!(null));
}

// ── Accessors ─────────────────────────────────────────────────────

#[test]
fn kind_names() {
    assert_eq!(GenericValue::Int(1).kind_name(), "int");
    assert_eq!(GenericValue::Float(1.0).kind_name(), "float");
    assert_eq!(GenericValue::Bool(true).kind_name(), "bool");
    assert_eq!(GenericValue::Str(String::new()).kind_name(), "str");
    assert_eq!(GenericValue::List(vec![]).kind_name(), "list");
}

#[test]
fn as_list_and_as_str() {
    let list = GenericValue::List(vec![GenericValue::Int(1)]);
    assert_eq!(list.as_list().map(<[_]>::len), Some(1));
    assert!(list.as_str().is_none());
    assert_eq!(GenericValue::from("hi").as_str(), Some("hi"));
}

// ── Display ───────────────────────────────────────────────────────

#[test]
fn display_uses_natural_text() {
    assert_eq!(GenericValue::Int(-7).to_string(), "-7");
    assert_eq!(GenericValue::Float(2.25).to_string(), "2.25");
    assert_eq!(GenericValue::Float(3.0).to_string(), "3");
    assert_eq!(GenericValue::Bool(true).to_string(), "true");
    assert_eq!(GenericValue::from("hello").to_string(), "hello");
    assert_eq!(
        GenericValue::List(vec![1i64.into(), 2i64.into()]).to_string(),
        "[1,2]"
    );
}

// ── Serde ─────────────────────────────────────────────────────────

#[test]
fn serde_is_untagged() {
    let value = GenericValue::List(vec![GenericValue::Int(1), GenericValue::from("a")]);
    assert_eq!(serde_json::to_string(&value).unwrap(), "[1,\"a\"]");
    let back: GenericValue = serde_json::from_str("[1,\"a\"]").unwrap();
    assert_eq!(back, value);
}

#[test]
fn serde_prefers_int_over_float() {
    let int: GenericValue = serde_json::from_str("5").unwrap();
    let float: GenericValue = serde_json::from_str("5.0").unwrap();
    assert_eq!(int, GenericValue::Int(5));
    assert_eq!(float, GenericValue::Float(5.0));
}
