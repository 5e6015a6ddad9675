use crate::db::{
    cursor::CursorBoundary,
    predicate::{CompareOp, ComparePredicate, Predicate},
    sort::{SortDirection, SortSpec},
};

///
/// KeysetSide
///
/// Which side of a cursor boundary a keyset predicate admits, relative to
/// the order of the `SortSpec` it is built from.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum KeysetSide {
    /// Rows strictly after the boundary.
    After,
    /// Rows strictly before the boundary.
    Before,
}

impl KeysetSide {
    // Strict operator for one field, chosen by that field's own direction.
    const fn strict_op(self, direction: SortDirection) -> CompareOp {
        match (self, direction) {
            (Self::After, SortDirection::Asc) | (Self::Before, SortDirection::Desc) => {
                CompareOp::Gt
            }
            (Self::After, SortDirection::Desc) | (Self::Before, SortDirection::Asc) => {
                CompareOp::Lt
            }
        }
    }
}

/// Build the lexicographic keyset predicate for `boundary` under `spec`.
///
/// For fields `[f1, .., fn]` and `side = After` this is
/// `f1 > c1 OR (f1 = c1 AND (f2 > c2 OR (f2 = c2 AND ... fn > cn)))`,
/// with `>` replaced by `<` for every descending field. `Before` mirrors it.
#[must_use]
pub fn keyset_predicate(spec: &SortSpec, boundary: &CursorBoundary, side: KeysetSide) -> Predicate {
    debug_assert_eq!(
        spec.len(),
        boundary.len(),
        "cursor boundary arity is validated at decode",
    );

    let mut slots = spec.fields().iter().zip(boundary.values()).rev();

    let Some((last, last_value)) = slots.next() else {
        return Predicate::True;
    };

    let mut predicate = Predicate::Compare(ComparePredicate::new(
        last.field.clone(),
        side.strict_op(last.direction),
        last_value.clone(),
    ));

    for (sort_field, value) in slots {
        let strict = Predicate::Compare(ComparePredicate::new(
            sort_field.field.clone(),
            side.strict_op(sort_field.direction),
            value.clone(),
        ));
        let tied = Predicate::and(vec![
            Predicate::eq(sort_field.field.clone(), value.clone()),
            predicate,
        ]);

        predicate = Predicate::or(vec![strict, tied]);
    }

    predicate
}

/// Rows strictly after `boundary` in the order of `spec`.
#[must_use]
pub fn after_predicate(spec: &SortSpec, boundary: &CursorBoundary) -> Predicate {
    keyset_predicate(spec, boundary, KeysetSide::After)
}

/// Rows strictly before `boundary` in the order of `spec`.
#[must_use]
pub fn before_predicate(spec: &SortSpec, boundary: &CursorBoundary) -> Predicate {
    keyset_predicate(spec, boundary, KeysetSide::Before)
}
