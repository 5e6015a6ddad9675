use crate::value::Value;

///
/// Canonical Value Rank
///
/// Stable rank used for cross-variant ordering.
///
/// IMPORTANT:
/// Rank order is part of deterministic keyset behavior. Signed and unsigned
/// integers share one rank so they compare numerically against each other.
///
#[must_use]
pub(super) const fn canonical_rank(value: &Value) -> u8 {
    match value {
        Value::Null => 0,
        Value::Bool(_) => 1,
        Value::Int(_) | Value::Uint(_) => 2,
        Value::Float(_) => 3,
        Value::Text(_) => 4,
        Value::Timestamp(_) => 5,
        Value::List(_) => 6,
    }
}
