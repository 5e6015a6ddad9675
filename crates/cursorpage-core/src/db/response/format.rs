use crate::{
    db::{
        cursor::CursorCodec,
        predicate::Row,
        response::{Connection, Edge, FlatPage, Page},
        sort::SortSpec,
    },
    error::Error,
};

/// Reshape a page into `{ data, pageInfo }`.
#[must_use]
pub fn format_flat<T>(page: Page<T>) -> FlatPage<T> {
    page.into_flat()
}

/// Reshape a page into a Relay connection, deriving each edge cursor from
/// the item under `sort`.
///
/// `sort` must be the sort the page was produced with; otherwise the edge
/// cursors will be rejected on the next request.
pub fn format_edges<T: Row>(page: Page<T>, sort: &SortSpec) -> Result<Connection<T>, Error> {
    format_edges_with(page, sort, |item| item)
}

/// Like [`format_edges`], mapping each node after its cursor is derived.
pub fn format_edges_with<T, U, F>(
    page: Page<T>,
    sort: &SortSpec,
    mut map: F,
) -> Result<Connection<U>, Error>
where
    T: Row,
    F: FnMut(T) -> U,
{
    let codec = CursorCodec::new(sort);
    let (items, page_info) = page.into_parts();

    let edges = items
        .into_iter()
        .map(|item| -> Result<Edge<U>, Error> {
            let cursor = codec.encode(&item)?;

            Ok(Edge {
                node: map(item),
                cursor,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Connection { edges, page_info })
}
