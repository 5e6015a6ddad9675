use crate::{
    db::{
        cursor::{Cursor, CursorCodec, CursorError, decode_cursor, encode_cursor},
        sort::{SortDirection, SortField, SortSpec},
    },
    value::Value,
};
use chrono::{TimeZone, Utc};
use proptest::prelude::*;
use std::collections::BTreeMap;

fn spec() -> SortSpec {
    SortSpec::new(
        [SortField::desc("starts_at"), SortField::asc("title")],
        "id",
    )
    .expect("fixture spec should be valid")
}

fn event_row(id: u64, title: &str, starts_at: i64) -> BTreeMap<String, Value> {
    BTreeMap::from([
        ("id".to_string(), Value::Uint(id)),
        ("title".to_string(), Value::from(title)),
        (
            "starts_at".to_string(),
            Value::Timestamp(Utc.timestamp_opt(starts_at, 0).single().unwrap_or_default()),
        ),
    ])
}

#[test]
fn encode_decode_round_trip_preserves_sort_values() {
    let spec = spec();
    let row = event_row(42, "Opening night", 1_700_000_000);

    let cursor = encode_cursor(&row, &spec).expect("row should encode");
    let boundary = decode_cursor(&cursor, &spec).expect("cursor should decode");

    assert_eq!(boundary.len(), 3);
    assert_eq!(boundary.get("id"), Some(&Value::Uint(42)));
    assert_eq!(boundary.get("title"), Some(&Value::from("Opening night")));
    assert_eq!(boundary.get("starts_at"), row.get("starts_at"));
    assert_eq!(
        boundary.iter().map(|(name, _)| name).collect::<Vec<_>>(),
        vec!["starts_at", "title", "id"]
    );
}

#[test]
fn encoding_is_deterministic_and_url_safe() {
    let spec = spec();
    let row = event_row(7, "a/b+c", 0);

    let first = encode_cursor(&row, &spec).expect("row should encode");
    let second = encode_cursor(&row, &spec).expect("row should encode");

    assert_eq!(first, second);
    assert!(
        first
            .as_str()
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    );
}

#[test]
fn missing_row_fields_encode_as_null() {
    let spec = SortSpec::single("rank", SortDirection::Asc, "id").expect("spec should be valid");
    let row = BTreeMap::from([("id".to_string(), Value::Uint(1))]);

    let cursor = encode_cursor(&row, &spec).expect("row should encode");
    let boundary = decode_cursor(&cursor, &spec).expect("cursor should decode");

    assert_eq!(boundary.get("rank"), Some(&Value::Null));
}

#[test]
fn decode_rejects_empty_and_whitespace_tokens() {
    let spec = spec();

    let err = decode_cursor(&Cursor::from(""), &spec).expect_err("empty token should be rejected");
    assert_eq!(err, CursorError::Empty);

    let err = decode_cursor(&Cursor::from("  \n\t"), &spec)
        .expect_err("whitespace token should be rejected");
    assert_eq!(err, CursorError::Empty);
}

#[test]
fn decode_enforces_max_token_length() {
    let spec = spec();
    let oversized = Cursor::new("A".repeat(8 * 1024 + 1));

    let err = decode_cursor(&oversized, &spec).expect_err("oversized token should be rejected");
    assert!(matches!(err, CursorError::TooLong { len, .. } if len == 8 * 1024 + 1));
}

#[test]
fn decode_rejects_non_base64_and_garbage_payloads() {
    let spec = spec();

    let err = decode_cursor(&Cursor::from("not a cursor!"), &spec)
        .expect_err("invalid alphabet should be rejected");
    assert_eq!(err, CursorError::InvalidEncoding);

    let err = decode_cursor(&Cursor::from("_w"), &spec)
        .expect_err("garbage payload should be rejected");
    assert!(matches!(err, CursorError::Decode(_)));
    assert!(err.is_client_error());
}

#[test]
fn decode_rejects_cursor_from_a_different_sort() {
    let original = spec();
    let other = original.reversed();
    let cursor = encode_cursor(&event_row(1, "x", 0), &original).expect("row should encode");

    let err = decode_cursor(&cursor, &other).expect_err("foreign sort cursor must be rejected");
    assert!(matches!(
        err,
        CursorError::SignatureMismatch { expected, actual }
            if expected == other.signature().to_string()
                && actual == original.signature().to_string()
    ));
}

#[test]
fn decode_rejects_unknown_versions_and_wrong_arity() {
    let spec = spec();
    let codec = CursorCodec::new(&spec);

    let future = codec.encode_with_version_for_test(9, vec![Value::Null; 3]);
    let err = codec.decode(&future).expect_err("unknown version must be rejected");
    assert_eq!(err, CursorError::UnsupportedVersion { version: 9 });

    let short = codec.encode_with_version_for_test(1, vec![Value::Null; 2]);
    let err = codec.decode(&short).expect_err("short cursor must be rejected");
    assert_eq!(
        err,
        CursorError::ArityMismatch {
            expected: 3,
            found: 2
        }
    );
}

#[test]
fn encode_boundary_reproduces_the_original_token() {
    let spec = spec();
    let codec = CursorCodec::new(&spec);
    let cursor = codec
        .encode(&event_row(5, "Matinee", 1_650_000_000))
        .expect("row should encode");

    let boundary = codec.decode(&cursor).expect("cursor should decode");
    let reencoded = codec
        .encode_boundary(&boundary)
        .expect("boundary should encode");

    assert_eq!(reencoded, cursor);
}

fn arb_scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::Int),
        any::<u64>().prop_map(Value::Uint),
        (-1.0e12f64..1.0e12).prop_map(Value::Float),
        ".{0,12}".prop_map(Value::Text),
    ]
}

proptest! {
    #[test]
    fn any_row_round_trips(
        id in any::<u64>(),
        first in arb_scalar(),
        second in arb_scalar(),
    ) {
        let spec = SortSpec::new(
            [SortField::asc("first"), SortField::desc("second")],
            "id",
        ).expect("spec should be valid");
        let row = BTreeMap::from([
            ("id".to_string(), Value::Uint(id)),
            ("first".to_string(), first.clone()),
            ("second".to_string(), second.clone()),
        ]);

        let cursor = encode_cursor(&row, &spec).expect("row should encode");
        let boundary = decode_cursor(&cursor, &spec).expect("cursor should decode");

        prop_assert_eq!(boundary.get("first"), Some(&first));
        prop_assert_eq!(boundary.get("second"), Some(&second));
        prop_assert_eq!(boundary.get("id"), Some(&Value::Uint(id)));
    }
}
