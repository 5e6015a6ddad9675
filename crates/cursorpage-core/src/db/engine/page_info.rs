use crate::db::{cursor::Cursor, request::TraversalMode, response::PageInfo};

///
/// PageBounds
///
/// Inputs to page-info derivation that come from the request and the
/// over-read probe.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct PageBounds {
    pub(super) has_after: bool,
    pub(super) has_before: bool,
    pub(super) has_extra: bool,
}

// Derive page-existence flags for one traversal mode.
//
// Window pages report a previous page unconditionally, even when the window
// turned out empty; existing consumers rely on that.
pub(super) fn derive_page_info(
    mode: TraversalMode,
    bounds: PageBounds,
    start_cursor: Option<Cursor>,
    end_cursor: Option<Cursor>,
) -> PageInfo {
    let (has_next_page, has_previous_page) = match mode {
        TraversalMode::Window => (bounds.has_extra, true),
        TraversalMode::Forward => (bounds.has_extra, bounds.has_after),
        TraversalMode::Backward => (bounds.has_before, bounds.has_extra),
    };

    PageInfo {
        has_next_page,
        has_previous_page,
        start_cursor,
        end_cursor,
    }
}

///
/// TESTS
///
