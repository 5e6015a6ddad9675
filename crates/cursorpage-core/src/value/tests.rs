use crate::value::{Value, canonical_cmp, strict_order_cmp};
use chrono::{TimeZone, Utc};
use proptest::prelude::*;
use std::cmp::Ordering;

fn arb_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::Int),
        any::<u64>().prop_map(Value::Uint),
        any::<f64>().prop_map(Value::Float),
        "[a-z]{0,6}".prop_map(Value::Text),
        (0i64..4_000_000_000).prop_map(|secs| Value::Timestamp(
            Utc.timestamp_opt(secs, 0).single().unwrap_or_default()
        )),
    ]
}

#[test]
fn null_sorts_before_every_other_variant() {
    for value in [
        Value::Bool(false),
        Value::Int(i64::MIN),
        Value::Float(f64::NEG_INFINITY),
        Value::Text(String::new()),
    ] {
        assert_eq!(canonical_cmp(&Value::Null, &value), Ordering::Less);
    }
}

#[test]
fn signed_and_unsigned_integers_compare_numerically() {
    assert_eq!(
        strict_order_cmp(&Value::Int(-1), &Value::Uint(0)),
        Some(Ordering::Less)
    );
    assert_eq!(
        strict_order_cmp(&Value::Uint(u64::MAX), &Value::Int(i64::MAX)),
        Some(Ordering::Greater)
    );
    assert_eq!(
        canonical_cmp(&Value::Int(7), &Value::Uint(7)),
        Ordering::Equal
    );
}

#[test]
fn strict_order_rejects_mixed_families() {
    assert_eq!(strict_order_cmp(&Value::Text("1".into()), &Value::Int(1)), None);
    assert_eq!(strict_order_cmp(&Value::Float(1.0), &Value::Int(1)), None);
}

#[test]
fn option_conversion_maps_none_to_null() {
    assert_eq!(Value::from(None::<i64>), Value::Null);
    assert_eq!(Value::from(Some("a")), Value::Text("a".into()));
}

proptest! {
    #[test]
    fn canonical_cmp_is_antisymmetric(left in arb_value(), right in arb_value()) {
        prop_assert_eq!(canonical_cmp(&left, &right), canonical_cmp(&right, &left).reverse());
    }

    #[test]
    fn canonical_cmp_is_transitive(a in arb_value(), b in arb_value(), c in arb_value()) {
        if canonical_cmp(&a, &b) != Ordering::Greater && canonical_cmp(&b, &c) != Ordering::Greater {
            prop_assert_ne!(canonical_cmp(&a, &c), Ordering::Greater);
        }
    }
}
