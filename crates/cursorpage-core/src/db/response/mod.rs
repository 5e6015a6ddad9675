//! Module: response
//! Responsibility: page payloads and their flat / Relay-edge reshaping.
//! Does not own: pagination planning or query execution.
//! Boundary: pure DTOs and formatters; nothing here touches a data source.

mod format;
mod page;

#[cfg(test)]
mod tests;

pub use format::{format_edges, format_edges_with, format_flat};
pub use page::{Connection, Edge, FlatPage, Page, PageInfo};
