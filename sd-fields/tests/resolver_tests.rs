use pretty_assertions::assert_eq;
use sd_fields::resolver::{encode, infer_and_decode};
use sd_fields::{
    ColumnField, ErrorCode, FieldCodec, FieldValue, GenericObjectCodec, GenericValue,
};
use serde_json::json;

fn roundtrip(value: &GenericValue) -> GenericValue {
    infer_and_decode(&encode(value))
}

// ── Decoding rules ────────────────────────────────────────────────

#[test]
fn integer_text_decodes_as_int() {
    assert_eq!(infer_and_decode("42"), GenericValue::Int(42));
    assert_eq!(infer_and_decode("-7"), GenericValue::Int(-7));
}

#[test]
fn decimal_text_decodes_as_float() {
    assert_eq!(infer_and_decode("3.14"), GenericValue::Float(3.14));
}

#[test]
fn bool_literals_decode_as_bool() {
    assert_eq!(infer_and_decode("true"), GenericValue::Bool(true));
    assert_eq!(infer_and_decode("false"), GenericValue::Bool(false));
}

#[test]
fn json_array_decodes_as_list() {
    assert_eq!(
        infer_and_decode("[1,2,3]"),
        GenericValue::List(vec![
            GenericValue::Int(1),
            GenericValue::Int(2),
            GenericValue::Int(3)
        ])
    );
}

#[test]
fn list_elements_keep_their_json_types() {
    assert_eq!(
        infer_and_decode(r#"[1.5, "42", [false]]"#),
        GenericValue::List(vec![
            GenericValue::Float(1.5),
            GenericValue::from("42"),
            GenericValue::List(vec![GenericValue::Bool(false)]),
        ])
    );
}

#[test]
fn array_with_object_element_stays_a_string() {
    let raw = r#"[1, {"a": 2}]"#;
    assert_eq!(infer_and_decode(raw), GenericValue::from(raw));
}

#[test]
fn json_object_text_stays_a_string() {
    let raw = r#"{"a": 1}"#;
    assert_eq!(infer_and_decode(raw), GenericValue::from(raw));
}

#[test]
fn other_text_decodes_as_string() {
    assert_eq!(infer_and_decode("hello"), GenericValue::from("hello"));
    assert_eq!(infer_and_decode(""), GenericValue::from(""));
    assert_eq!(infer_and_decode("[unterminated"), GenericValue::from("[unterminated"));
}

// ── Round trips ───────────────────────────────────────────────────

#[test]
fn int_roundtrips() {
    assert_eq!(roundtrip(&GenericValue::Int(42)), GenericValue::Int(42));
}

#[test]
fn float_roundtrips() {
    assert_eq!(encode(&GenericValue::Float(3.14)), "3.14");
    assert_eq!(roundtrip(&GenericValue::Float(3.14)), GenericValue::Float(3.14));
}

#[test]
fn bool_roundtrips() {
    assert_eq!(encode(&GenericValue::Bool(true)), "true");
    assert_eq!(roundtrip(&GenericValue::Bool(true)), GenericValue::Bool(true));
}

#[test]
fn list_roundtrips() {
    let list = GenericValue::List(vec![1i64.into(), 2i64.into(), 3i64.into()]);
    assert_eq!(encode(&list), "[1,2,3]");
    assert_eq!(roundtrip(&list), list);
}

#[test]
fn string_roundtrips() {
    assert_eq!(encode(&GenericValue::from("hello")), "hello");
    assert_eq!(roundtrip(&GenericValue::from("hello")), GenericValue::from("hello"));
}

#[test]
fn integral_float_reads_back_as_int() {
    assert_eq!(encode(&GenericValue::Float(3.0)), "3");
    assert_eq!(roundtrip(&GenericValue::Float(3.0)), GenericValue::Int(3));
}

#[test]
fn integral_float_inside_list_keeps_its_type() {
    let list = GenericValue::List(vec![GenericValue::Float(3.0)]);
    assert_eq!(roundtrip(&list), list);
}

// ── Codec ─────────────────────────────────────────────────────────

#[test]
fn codec_decodes_through_resolver() {
    let value = GenericObjectCodec
        .deserialize(FieldValue::Text("[true]".into()))
        .unwrap();
    assert_eq!(value, Some(GenericValue::List(vec![GenericValue::Bool(true)])));
}

#[test]
fn codec_null_is_none() {
    assert_eq!(GenericObjectCodec.deserialize(FieldValue::Null).unwrap(), None);
    assert_eq!(GenericObjectCodec.serialize(&FieldValue::Null), None);
}

#[test]
fn codec_text_passes_through_unchanged() {
    assert_eq!(
        GenericObjectCodec
            .serialize(&FieldValue::Text("anything at all".into()))
            .as_deref(),
        Some("anything at all")
    );
}

#[test]
fn column_rejects_non_finite_float() {
    let field = ColumnField::new(GenericObjectCodec);
    let err = field
        .clean(FieldValue::Value(GenericValue::Float(f64::INFINITY)))
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::Invalid);
    assert_eq!(err.value(), Some("inf"));

    // Text spelling of a non-finite float is just a string.
    assert_eq!(
        field.clean(FieldValue::Text("inf".into())).unwrap(),
        Some(GenericValue::from("inf"))
    );
}

#[test]
fn column_rejects_nan_inside_list() {
    let list = GenericValue::List(vec![GenericValue::Int(1), GenericValue::Float(f64::NAN)]);
    let err = ColumnField::new(GenericObjectCodec)
        .clean(FieldValue::Value(list))
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::Invalid);
    assert_eq!(err.value(), Some("NaN"));
}

#[test]
fn whitespace_around_array_keeps_text() {
    assert_eq!(infer_and_decode(" [1]"), GenericValue::from(" [1]"));
    assert_eq!(infer_and_decode("[1] "), GenericValue::from("[1] "));
    assert_eq!(infer_and_decode("[ 1 ]"), GenericValue::List(vec![GenericValue::Int(1)]));
}

#[test]
fn from_json_rejects_objects_with_type_error() {
    let err = GenericObjectCodec::from_json(json!({"a": 1})).unwrap_err();
    assert_eq!(err.code(), ErrorCode::TypeError);
    assert_eq!(err.param("type"), Some("object"));
    assert!(err.message().contains("int, float, str, list, bool"));
}

#[test]
fn from_json_rejects_null() {
    let err = GenericObjectCodec::from_json(json!(null)).unwrap_err();
    assert_eq!(err.param("type"), Some("null"));
}

#[test]
fn from_json_accepts_supported_shapes() {
    assert_eq!(
        GenericObjectCodec::from_json(json!([1, "a"])).unwrap(),
        GenericValue::List(vec![GenericValue::Int(1), GenericValue::from("a")])
    );
}
