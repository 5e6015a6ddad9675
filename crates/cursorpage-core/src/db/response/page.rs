use crate::db::cursor::Cursor;
use serde::{Deserialize, Serialize};

///
/// PageInfo
///
/// Page-existence flags plus the cursors of the first and last returned
/// item. Cursors are absent exactly when the page is empty.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub has_next_page: bool,
    pub has_previous_page: bool,
    pub start_cursor: Option<Cursor>,
    pub end_cursor: Option<Cursor>,
}

///
/// Page
///
/// Items in original sort order, regardless of traversal direction.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page_info: PageInfo,
}

impl<T> Page<T> {
    #[must_use]
    pub const fn new(items: Vec<T>, page_info: PageInfo) -> Self {
        Self { items, page_info }
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Transform every item, leaving `page_info` untouched.
    #[must_use]
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page_info: self.page_info,
        }
    }

    #[must_use]
    pub fn into_flat(self) -> FlatPage<T> {
        FlatPage {
            data: self.items,
            page_info: self.page_info,
        }
    }

    #[must_use]
    pub fn into_parts(self) -> (Vec<T>, PageInfo) {
        (self.items, self.page_info)
    }
}

///
/// FlatPage
/// `{ data, pageInfo }` shape for REST-style transports.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlatPage<T> {
    pub data: Vec<T>,
    pub page_info: PageInfo,
}

///
/// Edge
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Edge<T> {
    pub node: T,
    pub cursor: Cursor,
}

///
/// Connection
/// Relay `{ edges: [{ node, cursor }], pageInfo }` shape.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Connection<T> {
    pub edges: Vec<Edge<T>>,
    pub page_info: PageInfo,
}

impl<T> Connection<T> {
    /// Nodes in edge order.
    pub fn nodes(&self) -> impl Iterator<Item = &T> {
        self.edges.iter().map(|edge| &edge.node)
    }
}
