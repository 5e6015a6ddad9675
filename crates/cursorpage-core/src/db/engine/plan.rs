use crate::{
    config::PaginationConfig,
    db::{
        cursor::{CursorBoundary, CursorCodec},
        predicate::Predicate,
        request::{Direction, PaginationRequest, TraversalMode},
        sort::{SortSpec, after_predicate, before_predicate},
        source::Query,
    },
    error::Error,
};

///
/// PagePlan
///
/// Everything decided before the data source is touched: traversal
/// direction, page-info mode, page size, decoded bounds and the query.
///

#[derive(Clone, Debug, PartialEq)]
pub struct PagePlan {
    pub direction: Direction,
    pub mode: TraversalMode,
    pub size: u32,
    pub after: Option<CursorBoundary>,
    pub before: Option<CursorBoundary>,
    pub query: Query,
}

impl PagePlan {
    /// Rows requested from the data source, including the probe row.
    #[must_use]
    pub const fn probe_limit(&self) -> u32 {
        self.query.limit
    }
}

// Validate, decode bounds, and compose the query for one page.
//
// Both bounds are expressed against the original order: `after` admits rows
// strictly after its cursor and `before` rows strictly before its cursor.
// Only the query's ordering is reversed for backward traversal.
pub(super) fn plan_page(
    config: &PaginationConfig,
    sort: &SortSpec,
    request: &PaginationRequest,
    base_filter: Predicate,
) -> Result<PagePlan, Error> {
    let shape = request.validate(config)?;
    let codec = CursorCodec::new(sort);

    let after = request
        .after
        .as_ref()
        .map(|cursor| codec.decode(cursor))
        .transpose()?;
    let before = request
        .before
        .as_ref()
        .map(|cursor| codec.decode(cursor))
        .transpose()?;

    let mut filter = base_filter;
    if let Some(boundary) = &after {
        filter = filter.and_also(after_predicate(sort, boundary));
    }
    if let Some(boundary) = &before {
        filter = filter.and_also(before_predicate(sort, boundary));
    }

    let effective = match shape.direction {
        Direction::Forward => sort.clone(),
        Direction::Backward => sort.reversed(),
    };

    Ok(PagePlan {
        direction: shape.direction,
        mode: shape.mode,
        size: shape.size,
        after,
        before,
        query: Query {
            filter,
            sort: effective,
            limit: shape.size.saturating_add(1),
        },
    })
}
