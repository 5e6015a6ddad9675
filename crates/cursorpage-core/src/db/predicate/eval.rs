use crate::{
    db::predicate::{CompareOp, ComparePredicate, Predicate},
    value::{Value, canonical_cmp},
};
use std::{
    cmp::Ordering,
    collections::{BTreeMap, HashMap},
};

///
/// FieldPresence
///
/// Result of attempting to read a field from a row. This distinguishes
/// between a missing field and a present field whose value may be `Null`.
///

#[derive(Clone, Debug, PartialEq)]
pub enum FieldPresence {
    /// Field exists and has a value (including `Value::Null`).
    Present(Value),
    /// Field is not present on the row.
    Missing,
}

impl FieldPresence {
    /// Collapse presence into a value, reading a missing field as `Null`.
    #[must_use]
    pub fn into_value(self) -> Value {
        match self {
            Self::Present(value) => value,
            Self::Missing => Value::Null,
        }
    }
}

///
/// Row
///
/// Abstraction over a row-like value that can expose fields by name.
/// The engine reads sort fields through this trait to build cursors; it
/// never sees the concrete row type otherwise.
///
/// Field names may be dotted paths (`venue.name`); resolving them is the
/// implementor's concern.
///

pub trait Row {
    fn field(&self, name: &str) -> FieldPresence;
}

impl<R: Row + ?Sized> Row for &R {
    fn field(&self, name: &str) -> FieldPresence {
        (**self).field(name)
    }
}

impl Row for BTreeMap<String, Value> {
    fn field(&self, name: &str) -> FieldPresence {
        match self.get(name) {
            Some(value) => FieldPresence::Present(value.clone()),
            None => FieldPresence::Missing,
        }
    }
}

impl<S: std::hash::BuildHasher> Row for HashMap<String, Value, S> {
    fn field(&self, name: &str) -> FieldPresence {
        match self.get(name) {
            Some(value) => FieldPresence::Present(value.clone()),
            None => FieldPresence::Missing,
        }
    }
}

///
/// Evaluate a predicate against a single row.
///
/// This is the reference semantics of [`Predicate`]:
/// - a missing field compares as `Null`, the same reading the sort order uses
/// - ordering uses [`canonical_cmp`], so `Null` sorts lowest
/// - only `IsNull` tells a present `Null` apart from a missing field
/// - `In`/`NotIn` against a non-list value never match
///
#[must_use]
pub fn eval<R: Row + ?Sized>(row: &R, predicate: &Predicate) -> bool {
    match predicate {
        Predicate::True => true,
        Predicate::False => false,

        Predicate::And(children) => children.iter().all(|child| eval(row, child)),
        Predicate::Or(children) => children.iter().any(|child| eval(row, child)),
        Predicate::Not(inner) => !eval(row, inner),

        Predicate::Compare(cmp) => eval_compare(&row.field(&cmp.field).into_value(), cmp),

        Predicate::IsNull { field } => {
            matches!(row.field(field), FieldPresence::Present(Value::Null))
        }
    }
}

// Evaluate a single comparison against an already-read field value.
fn eval_compare(actual: &Value, cmp: &ComparePredicate) -> bool {
    let ComparePredicate { op, value, .. } = cmp;

    match op {
        CompareOp::Eq => canonical_cmp(actual, value) == Ordering::Equal,
        CompareOp::Ne => canonical_cmp(actual, value) != Ordering::Equal,

        CompareOp::Lt => canonical_cmp(actual, value).is_lt(),
        CompareOp::Lte => canonical_cmp(actual, value).is_le(),
        CompareOp::Gt => canonical_cmp(actual, value).is_gt(),
        CompareOp::Gte => canonical_cmp(actual, value).is_ge(),

        CompareOp::In => in_list(actual, value).unwrap_or(false),
        CompareOp::NotIn => in_list(actual, value).is_some_and(|matched| !matched),
    }
}

// Check whether a value equals any element in a list; `None` when `list` isn't one.
fn in_list(actual: &Value, list: &Value) -> Option<bool> {
    let Value::List(items) = list else {
        return None;
    };

    Some(
        items
            .iter()
            .any(|item| canonical_cmp(actual, item) == Ordering::Equal),
    )
}
