use crate::{
    db::{cursor::CursorBoundary, predicate::Row, sort::SortSpec},
    value::{Value, canonical_cmp},
};
use std::cmp::Ordering;

// Apply sort direction to an ascending comparison.
const fn apply_direction(ordering: Ordering, ascending: bool) -> Ordering {
    if ascending { ordering } else { ordering.reverse() }
}

/// Compare two rows under `spec`, returning the first non-equal field ordering.
///
/// Missing fields read as `Null`. Because every spec ends in a unique
/// tie-break, `Equal` only occurs for the same logical row.
#[must_use]
pub fn compare_rows<L, R>(spec: &SortSpec, left: &L, right: &R) -> Ordering
where
    L: Row + ?Sized,
    R: Row + ?Sized,
{
    for sort_field in spec.fields() {
        let left_value = left.field(&sort_field.field).into_value();
        let right_value = right.field(&sort_field.field).into_value();
        let ordering = apply_direction(
            canonical_cmp(&left_value, &right_value),
            sort_field.direction.is_asc(),
        );

        if ordering != Ordering::Equal {
            return ordering;
        }
    }

    Ordering::Equal
}

/// Compare a row with a decoded cursor boundary using the same semantics as
/// [`compare_rows`].
#[must_use]
pub fn compare_row_with_boundary<R>(spec: &SortSpec, row: &R, boundary: &CursorBoundary) -> Ordering
where
    R: Row + ?Sized,
{
    for (sort_field, boundary_value) in spec.fields().iter().zip(boundary.values()) {
        let value: Value = row.field(&sort_field.field).into_value();
        let ordering = apply_direction(
            canonical_cmp(&value, boundary_value),
            sort_field.direction.is_asc(),
        );

        if ordering != Ordering::Equal {
            return ordering;
        }
    }

    Ordering::Equal
}
