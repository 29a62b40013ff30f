use super::*;
use crate::{test_fixtures::float, value::Float64};
use proptest::prelude::*;
use serde_json::json;

fn parse(text: &str) -> serde_json::Value {
    serde_json::from_str(text).expect("rendered text should be valid json")
}

#[test]
fn scalars_render_as_plain_json() {
    assert_eq!(Value::Null.to_json_text(), "null");
    assert_eq!(Value::Bool(true).to_json_text(), "true");
    assert_eq!(Value::Int(-42).to_json_text(), "-42");
    assert_eq!(Value::Float64(float(2.5)).to_json_text(), "2.5");
    assert_eq!(
        Value::Text("quote \" and \\ slash".to_string()).to_json_text(),
        r#""quote \" and \\ slash""#
    );
}

#[test]
fn blobs_render_as_byte_arrays() {
    assert_eq!(Value::Blob(vec![0, 255]).to_json_text(), "[0,255]");
}

#[test]
fn list_renders_as_array() {
    let text = list_to_json_text(&[Value::Int(1), Value::Text("x".to_string()), Value::Null]);

    assert_eq!(text, r#"[1,"x",null]"#);
    assert_eq!(parse(&text), json!([1, "x", null]));
}

#[test]
fn empty_list_and_map() {
    assert_eq!(list_to_json_text(&[]), "[]");
    assert_eq!(map_to_json_text::<&str>(&[]), "{}");
}

#[test]
fn map_preserves_key_order() {
    let text = map_to_json_text(&[
        ("b", Value::Text("x".to_string())),
        ("a", Value::Int(1)),
    ]);

    assert_eq!(text, r#"{"b":"x","a":1}"#);
    assert_eq!(parse(&text), json!({"a": 1, "b": "x"}));
}

#[test]
fn map_keeps_duplicate_keys() {
    let text = map_to_json_text(&[("k", Value::Int(1)), ("k", Value::Int(2))]);

    assert_eq!(text, r#"{"k":1,"k":2}"#);
}

#[test]
fn nested_values_render_recursively() {
    let value = Value::from_map(vec![
        ("tags", Value::from_list(vec!["a", "b"])),
        (
            "inner",
            Value::Map(vec![("ok".to_string(), Value::Bool(false))]),
        ),
    ]);

    assert_eq!(
        value.to_json_text(),
        r#"{"tags":["a","b"],"inner":{"ok":false}}"#
    );
}

#[test]
fn generic_entry_point_accepts_any_serialize() {
    #[derive(Serialize)]
    struct Row {
        id: u32,
        name: &'static str,
    }

    let text = to_json_text(&Row { id: 1, name: "ann" }).expect("row should encode");
    assert_eq!(text, r#"{"id":1,"name":"ann"}"#);
}

#[test]
fn generic_entry_point_reports_encode_failures() {
    let mut bad = std::collections::BTreeMap::new();
    bad.insert(vec![1u8], 1u8);

    let err = to_json_text(&bad).expect_err("non-string keys should fail");
    assert!(matches!(err, CodecError::Encode(_)));
}

#[test]
fn decode_keeps_order_and_kinds() {
    let value = Value::from_json_text(r#"{"z":1,"a":[true,null,1.5,"s"]}"#)
        .expect("json should decode");

    assert_eq!(
        value,
        Value::Map(vec![
            ("z".to_string(), Value::Int(1)),
            (
                "a".to_string(),
                Value::List(vec![
                    Value::Bool(true),
                    Value::Null,
                    Value::Float64(float(1.5)),
                    Value::Text("s".to_string()),
                ])
            ),
        ])
    );
}

#[test]
fn decode_rejects_malformed_text() {
    let err = Value::from_json_text("{").expect_err("truncated json should fail");

    assert!(matches!(err, CodecError::Decode(_)));
}

fn arb_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::Int),
        (-1.0e12f64..1.0e12)
            .prop_filter_map("finite", Float64::try_new)
            .prop_map(Value::Float64),
        ".{0,8}".prop_map(Value::Text),
    ];

    leaf.prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::List),
            prop::collection::vec(("[a-z]{0,4}", inner), 0..4).prop_map(Value::Map),
        ]
    })
}

proptest! {
    #[test]
    fn json_text_round_trips(value in arb_value()) {
        let text = value.to_json_text();
        let decoded = Value::from_json_text(&text).expect("rendered text should decode");

        prop_assert_eq!(decoded, value);
    }
}
