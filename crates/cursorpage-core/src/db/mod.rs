//! Keyset pagination: sort specs, cursors, request validation, the engine
//! and the page shapes it returns.

pub mod cursor;
pub mod engine;
pub mod predicate;
pub mod request;
pub mod response;
pub mod sort;
pub mod source;

// re-exports
pub use cursor::{Cursor, CursorError};
pub use engine::{PagePlan, PaginationEngine};
pub use request::{PaginationRequest, RequestError};
pub use response::{Connection, Edge, FlatPage, Page, PageInfo};
pub use source::{DataSource, DataSourceError, Query};
