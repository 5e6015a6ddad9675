//! Core runtime for cursorpage: values, filter predicates, sort specs, the
//! cursor codec, the pagination engine, and the page shapes exported via the
//! `prelude`.
#![warn(unreachable_pub)]

// public exports are one module level down
pub mod config;
pub mod db;
pub mod error;
pub mod obs;
pub mod serialize;
pub mod value;

// test
#[cfg(test)]
pub(crate) mod test_support;

pub use error::Error;

///
/// Prelude
///
/// Prelude contains the vocabulary callers need to paginate and shape the
/// response. Codecs and telemetry sinks stay in their modules.
///

pub mod prelude {
    pub use crate::{
        config::PaginationConfig,
        db::{
            Connection, Cursor, DataSource, DataSourceError, FlatPage, Page, PageInfo,
            PaginationEngine, PaginationRequest, Query,
            predicate::{FieldPresence, Predicate, Row},
            response::{format_edges, format_flat},
            sort::{SortDirection, SortField, SortRequest, SortSpec},
        },
        error::{Error, ErrorClass},
        value::Value,
    };
}
