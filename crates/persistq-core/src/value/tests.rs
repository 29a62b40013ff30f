use super::*;
use crate::{test_fixtures::float, traits::FieldValue};

#[test]
fn float_rejects_non_finite_input() {
    assert!(Float64::try_new(f64::NAN).is_none());
    assert!(Float64::try_new(f64::INFINITY).is_none());
    assert!(Float64::try_from(f64::NEG_INFINITY).is_err());

    assert_eq!(Value::float(f64::NAN), None);
    assert_eq!(Value::float(f64::INFINITY), None);
    assert_eq!(Value::float(1.5), Some(Value::Float64(float(1.5))));
}

#[test]
fn float_canonicalizes_negative_zero() {
    let neg = Float64::try_new(-0.0).expect("finite");
    let pos = Float64::try_new(0.0).expect("finite");

    assert_eq!(neg, pos);
    assert_eq!(neg.cmp(&pos), std::cmp::Ordering::Equal);
    assert!(neg.get().is_sign_positive());
}

#[test]
fn float_orders_totally() {
    let mut values: Vec<Float64> = [2.5, -1.0, 0.0, 10.0]
        .into_iter()
        .filter_map(Float64::try_new)
        .collect();
    values.sort();

    let raw: Vec<f64> = values.into_iter().map(f64::from).collect();
    assert_eq!(raw, vec![-1.0, 0.0, 2.5, 10.0]);
}

#[test]
fn kind_tags_are_stable() {
    let cases = [
        (Value::Blob(vec![1]), ValueKind::Blob, 1, "blob"),
        (Value::Bool(true), ValueKind::Bool, 2, "bool"),
        (Value::Float64(float(1.5)), ValueKind::Float64, 3, "float64"),
        (Value::Int(1), ValueKind::Int, 4, "int"),
        (Value::List(Vec::new()), ValueKind::List, 5, "list"),
        (Value::Map(Vec::new()), ValueKind::Map, 6, "map"),
        (Value::Null, ValueKind::Null, 7, "null"),
        (Value::from("x"), ValueKind::Text, 8, "text"),
    ];

    for (value, kind, tag, name) in cases {
        assert_eq!(value.kind(), kind);
        assert_eq!(kind.tag(), tag);
        assert_eq!(kind.to_string(), name);
    }
}

#[test]
fn predicates_classify_values() {
    assert!(Value::Int(1).is_numeric());
    assert!(Value::Float64(float(1.0)).is_numeric());
    assert!(!Value::from("1").is_numeric());

    assert!(Value::Null.is_scalar());
    assert!(!Value::from_list(vec![1i64]).is_scalar());
    assert!(!Value::from_map(vec![("a", 1i64)]).is_scalar());
}

#[test]
fn accessors_widen_integers() {
    assert_eq!(Value::Int(3).as_f64(), Some(3.0));
    assert_eq!(Value::Int(3).as_int(), Some(3));
    assert_eq!(Value::Float64(float(3.0)).as_int(), None);
    assert_eq!(Value::from("a").as_text(), Some("a"));
    assert_eq!(Value::Bool(true).as_f64(), None);
}

#[test]
fn conversions_pick_the_expected_variant() {
    assert_eq!(Value::from(7u8), Value::Int(7));
    assert_eq!(Value::from(-7i32), Value::Int(-7));
    assert_eq!(Value::from(u32::MAX), Value::Int(i64::from(u32::MAX)));
    assert_eq!(Value::from(true), Value::Bool(true));
    assert_eq!(Value::from("s"), Value::Text("s".to_string()));
    assert_eq!(Value::from(None::<i64>), Value::Null);
    assert_eq!(Value::from(Some(2i64)), Value::Int(2));
    assert_eq!(
        Value::from(vec![1i64, 2]),
        Value::List(vec![Value::Int(1), Value::Int(2)])
    );
}

#[test]
fn from_map_keeps_order_and_duplicates() {
    let value = Value::from_map(vec![("b", 1i64), ("a", 2), ("b", 3)]);

    let Value::Map(entries) = value else {
        panic!("expected map");
    };
    let keys: Vec<_> = entries.iter().map(|(key, _)| key.as_str()).collect();
    assert_eq!(keys, vec!["b", "a", "b"]);
}

#[test]
fn field_values_round_trip_through_value() {
    assert_eq!(i32::from_value(&42i32.to_value()), Some(42));
    assert_eq!(u8::from_value(&Value::Int(300)), None);
    assert_eq!(bool::from_value(&true.to_value()), Some(true));
    assert_eq!(
        String::from_value(&"x".to_string().to_value()),
        Some("x".to_string())
    );
    assert_eq!(
        Float64::from_value(&float(2.5).to_value()),
        Some(float(2.5))
    );
    // integers are not silently reinterpreted as floats
    assert_eq!(Float64::from_value(&Value::Int(2)), None);

    assert_eq!(Option::<i64>::from_value(&Value::Null), Some(None));
    assert_eq!(Option::<i64>::from_value(&Value::Int(1)), Some(Some(1)));
    assert_eq!(Option::<i64>::from_value(&Value::from("x")), None);

    assert_eq!(
        Vec::<i64>::from_value(&vec![1i64, 2].to_value()),
        Some(vec![1, 2])
    );
    assert_eq!(Vec::<i64>::from_value(&Value::Int(1)), None);
}

#[test]
fn non_finite_floats_never_become_values() {
    for raw in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        assert_eq!(Value::float(raw), None);
        assert!(Float64::try_new(raw).is_none());
    }

    let decoded: Result<Float64, _> = serde_json::from_str("1e400");
    assert!(decoded.is_err());
}
