use pretty_assertions::assert_eq;
use sd_fields::{
    ColumnField, DictCodec, ErrorCode, FieldCodec, FieldValue, FormField, GenericObjectCodec,
    GenericValue, JsonCodec, ListCodec, MacCodec, MacSetCodec,
};
use serde_json::{Value, json};

// ── Column: max length ────────────────────────────────────────────

#[test]
fn column_defaults_follow_kind() {
    assert_eq!(ColumnField::new(JsonCodec).max_length(), 2048);
    assert_eq!(ColumnField::new(GenericObjectCodec).max_length(), 2048);
    assert_eq!(ColumnField::new(MacCodec).max_length(), 17);
}

#[test]
fn column_max_length_can_be_overridden() {
    let field = ColumnField::new(JsonCodec).with_max_length(64);
    assert_eq!(field.max_length(), 64);
    assert_eq!(field.formfield().max_length(), 64);
}

#[test]
fn column_db_types() {
    assert_eq!(ColumnField::new(DictCodec).db_type(), "text");
    assert_eq!(ColumnField::new(MacCodec).db_type(), "varchar(17)");
    assert_eq!(
        ColumnField::new(GenericObjectCodec).with_max_length(100).db_type(),
        "varchar(100)"
    );
}

#[test]
fn generic_text_over_limit_is_a_length_error() {
    let field = ColumnField::new(GenericObjectCodec);
    let long = "x".repeat(2049);

    // The codec itself accepts it.
    let decoded = field.from_db_value(Some(&long)).unwrap();
    assert_eq!(decoded, Some(GenericValue::Str(long.clone())));

    let err = field.clean(FieldValue::Text(long)).unwrap_err();
    assert_eq!(err.code(), ErrorCode::MaxLength);
    assert_eq!(err.param("limit"), Some("2048"));
    assert_eq!(err.param("length"), Some("2049"));
}

#[test]
fn generic_text_at_limit_is_accepted() {
    let field = ColumnField::new(GenericObjectCodec);
    assert!(field.clean(FieldValue::Text("x".repeat(2048))).is_ok());
}

#[test]
fn json_text_over_limit_is_a_length_error() {
    let field = ColumnField::new(JsonCodec);
    let long = Value::String("y".repeat(2047));
    let text = long.to_string();
    assert_eq!(text.chars().count(), 2049);

    assert_eq!(field.from_db_value(Some(&text)).unwrap(), Some(long.clone()));
    let err = field.clean(FieldValue::Value(long)).unwrap_err();
    assert_eq!(err.code(), ErrorCode::MaxLength);
}

#[test]
fn padded_json_text_is_measured_as_submitted() {
    // Canonical form is "[1]", but the submitted text is 2049 chars.
    let text = format!("[{}1]", " ".repeat(2046));
    assert_eq!(text.chars().count(), 2049);

    let column = ColumnField::new(JsonCodec);
    let form = column.formfield();
    let column_err = column.clean(FieldValue::Text(text.clone())).unwrap_err();
    let form_err = form.clean(Some(&text)).unwrap_err();
    assert_eq!(column_err.code(), ErrorCode::MaxLength);
    assert_eq!(form_err.code(), ErrorCode::MaxLength);
    assert_eq!(column_err.param("length"), Some("2049"));
}

#[test]
fn zero_padded_generic_text_is_measured_as_submitted() {
    let text = format!("{}42", "0".repeat(2047));
    assert_eq!(GenericObjectCodec.decode(&text).unwrap(), Some(GenericValue::Int(42)));

    let err = ColumnField::new(GenericObjectCodec)
        .clean(FieldValue::Text(text))
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::MaxLength);
}

#[test]
fn native_value_is_measured_by_canonical_text() {
    let field = ColumnField::new(ListCodec).with_max_length(5);
    assert!(field.clean(FieldValue::Value(json!([1, 2]))).is_ok());
    let err = field.clean(FieldValue::Value(json!([1, 2, 3]))).unwrap_err();
    assert_eq!(err.code(), ErrorCode::MaxLength);
}

// ── Column: hooks ─────────────────────────────────────────────────

#[test]
fn column_prep_and_read_share_codec() {
    let field = ColumnField::new(ListCodec);
    let stored = field.get_prep_value(&FieldValue::Value(json!(["a", 1])));
    assert_eq!(stored.as_deref(), Some("[\"a\",1]"));
    assert_eq!(
        field.from_db_value(stored.as_deref()).unwrap(),
        Some(json!(["a", 1]))
    );
}

#[test]
fn column_read_failure_is_returned_not_raised() {
    let field = ColumnField::new(DictCodec);
    let err = field.from_db_value(Some("{bad")).unwrap_err();
    assert_eq!(err.code(), ErrorCode::Invalid);
    assert_eq!(err.value(), Some("{bad"));
}

#[test]
fn column_clean_runs_shape_validation() {
    let field = ColumnField::new(ListCodec);
    let err = field.clean(FieldValue::Text("\"abc\"".into())).unwrap_err();
    assert_eq!(err.code(), ErrorCode::Invalid);
    assert!(field.clean(FieldValue::Text("[1]".into())).is_ok());
}

#[test]
fn column_clean_rejects_null_when_not_nullable() {
    let field = ColumnField::new(MacCodec).with_nullable(false);
    let err = field.clean(FieldValue::Null).unwrap_err();
    assert_eq!(err.code(), ErrorCode::Null);
}

#[test]
fn list_column_null_is_not_a_null_error() {
    let field = ColumnField::new(ListCodec).with_nullable(false);
    assert_eq!(field.clean(FieldValue::Null).unwrap(), Some(json!([])));
}

#[test]
fn mac_column_normalizes_on_clean() {
    let field = ColumnField::new(MacCodec);
    let mac = field
        .clean(FieldValue::Text("aa-bb-cc-dd-ee-ff".into()))
        .unwrap()
        .unwrap();
    assert_eq!(field.get_prep_value(&FieldValue::Value(mac)).as_deref(), Some("aa:bb:cc:dd:ee:ff"));
}

// ── Form ──────────────────────────────────────────────────────────

#[test]
fn form_inherits_column_settings() {
    let form = ColumnField::new(DictCodec).with_nullable(false).formfield();
    assert!(form.is_required());
    let optional = ColumnField::new(DictCodec).formfield();
    assert!(!optional.is_required());
}

#[test]
fn form_raw_text_over_limit_is_a_length_error() {
    let form = FormField::new(GenericObjectCodec);
    let err = form.clean(Some(&"1".repeat(2049))).unwrap_err();
    assert_eq!(err.code(), ErrorCode::MaxLength);
}

#[test]
fn form_json_over_limit_is_a_length_error() {
    let form = FormField::new(JsonCodec);
    let err = form.clean(Some(&format!("\"{}\"", "z".repeat(2047)))).unwrap_err();
    assert_eq!(err.code(), ErrorCode::MaxLength);
}

#[test]
fn form_required_rejects_blank() {
    let form = FormField::new(ListCodec);
    assert_eq!(form.clean(Some("")).unwrap_err().code(), ErrorCode::Required);
    assert_eq!(form.clean(None).unwrap_err().code(), ErrorCode::Required);
    assert_eq!(form.clean(Some("[]")).unwrap_err().code(), ErrorCode::Required);
}

#[test]
fn form_optional_blank_list_is_empty_list() {
    let form = FormField::new(ListCodec).with_required(false);
    assert_eq!(form.clean(Some("")).unwrap(), Some(json!([])));
}

#[test]
fn form_optional_blank_json_is_none() {
    let form = FormField::new(JsonCodec).with_required(false);
    assert_eq!(form.clean(Some("")).unwrap(), None);
}

#[test]
fn form_rejects_wrong_shape() {
    let form = FormField::new(DictCodec);
    let err = form.clean(Some("[1, 2]")).unwrap_err();
    assert_eq!(err.code(), ErrorCode::Invalid);
    assert_eq!(err.value(), Some("[1,2]"));
}

#[test]
fn form_rejects_malformed_json() {
    let form = FormField::new(DictCodec);
    let err = form.clean(Some("{bad")).unwrap_err();
    assert_eq!(err.value(), Some("{bad"));
}

#[test]
fn form_and_column_agree_on_mac_sets() {
    let column = ColumnField::new(MacSetCodec);
    let form = column.formfield();
    let raw = r#"["AA:BB:CC:DD:EE:01", "nope"]"#;
    let form_err = form.clean(Some(raw)).unwrap_err();
    let column_err = column.clean(FieldValue::Text(raw.into())).unwrap_err();
    assert_eq!(form_err, column_err);
}

#[test]
fn form_generic_value_is_inferred() {
    let form = FormField::new(GenericObjectCodec);
    assert_eq!(form.clean(Some("12")).unwrap(), Some(GenericValue::Int(12)));
}

#[test]
fn form_prepare_value_renders_canonical_text() {
    let form = FormField::new(GenericObjectCodec);
    assert_eq!(form.prepare_value(&FieldValue::Value(GenericValue::Bool(false))), "false");
    assert_eq!(form.prepare_value(&FieldValue::Null), "");
}
