use metric_neo_bridge::{Error, RawPayload, normalize};
use serde_json::{Value, json};

// ── Text ─────────────────────────────────────────────────────────

#[test]
fn text_is_parsed() {
    let value = normalize(r#"{"success":true,"data":[1,2]}"#).unwrap();
    assert_eq!(value, json!({"success": true, "data": [1, 2]}));
}

#[test]
fn owned_text_is_parsed() {
    let value = normalize(String::from("[1, 2, 3]")).unwrap();
    assert_eq!(value, json!([1, 2, 3]));
}

#[test]
fn scalar_text_is_parsed() {
    assert_eq!(normalize("true").unwrap(), json!(true));
    assert_eq!(normalize("null").unwrap(), Value::Null);
}

#[test]
fn malformed_text_is_parse_error() {
    let err = normalize(r#"{"success": tru"#).unwrap_err();
    assert!(matches!(err, Error::Parse(_)));
}

#[test]
fn trailing_garbage_is_parse_error() {
    assert!(matches!(normalize("{} {}").unwrap_err(), Error::Parse(_)));
}

#[test]
fn blank_text_is_empty_mapping() {
    assert_eq!(normalize("").unwrap(), json!({}));
    assert_eq!(normalize("  \n\t").unwrap(), json!({}));
}

// ── Structural ───────────────────────────────────────────────────

#[test]
fn structural_passes_through() {
    let input = json!({"recorded": false, "extra": [1, {"a": null}]});
    assert_eq!(normalize(input.clone()).unwrap(), input);
}

#[test]
fn structural_null_passes_through() {
    assert_eq!(normalize(Value::Null).unwrap(), Value::Null);
}

#[test]
fn structural_string_is_not_parsed() {
    let input = json!("{\"id\":\"p1\"}");
    assert_eq!(normalize(input.clone()).unwrap(), input);
}

// ── Absent ───────────────────────────────────────────────────────

#[test]
fn absent_is_empty_mapping() {
    assert_eq!(normalize(RawPayload::Absent).unwrap(), json!({}));
    assert_eq!(normalize(None::<Value>).unwrap(), json!({}));
    assert_eq!(normalize(None::<&str>).unwrap(), json!({}));
}

#[test]
fn some_wraps_inner_payload() {
    assert_eq!(RawPayload::from(Some("[]")), RawPayload::Text("[]".into()));
    assert_eq!(
        RawPayload::from(Some(json!(1))),
        RawPayload::Structural(json!(1))
    );
}
