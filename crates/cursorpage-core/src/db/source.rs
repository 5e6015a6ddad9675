//! Module: source
//! Responsibility: the data-source port the engine queries through.
//! Does not own: query execution, retries, or timeouts.
//! Boundary: one filtered, sorted, limited query per page.

use crate::db::{predicate::Predicate, predicate::Row, sort::SortSpec};
use async_trait::async_trait;
use std::{error::Error as StdError, fmt};

///
/// Query
///
/// Constraints for one page fetch. `sort` is the effective (traversal) order
/// and `limit` already includes the one-row probe.
///

#[derive(Clone, Debug, PartialEq)]
pub struct Query {
    pub filter: Predicate,
    pub sort: SortSpec,
    pub limit: u32,
}

///
/// DataSource
///
/// Anything able to run a filtered, sorted, limited read and hand back rows
/// in the requested order.
///
/// Cancellation is the implementor's concern: dropping the returned future
/// must abandon the query.
///

#[async_trait]
pub trait DataSource: Send + Sync {
    type Row: Row + Send;

    async fn query(&self, query: Query) -> Result<Vec<Self::Row>, DataSourceError>;
}

///
/// DataSourceError
///
/// Opaque passthrough of whatever the data source failed with.
///

pub struct DataSourceError {
    inner: Box<dyn StdError + Send + Sync + 'static>,
}

impl DataSourceError {
    #[must_use]
    pub fn new(err: impl Into<Box<dyn StdError + Send + Sync + 'static>>) -> Self {
        Self { inner: err.into() }
    }

    /// Build an error from a plain message.
    #[must_use]
    pub fn message(message: impl Into<String>) -> Self {
        let message: String = message.into();

        Self::new(message)
    }

    /// Borrow the underlying error as a concrete type.
    #[must_use]
    pub fn downcast_ref<E: StdError + 'static>(&self) -> Option<&E> {
        self.inner.downcast_ref::<E>()
    }

    #[must_use]
    pub fn into_inner(self) -> Box<dyn StdError + Send + Sync + 'static> {
        self.inner
    }
}

impl fmt::Debug for DataSourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("DataSourceError").field(&self.inner).finish()
    }
}

impl fmt::Display for DataSourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner, f)
    }
}

impl StdError for DataSourceError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.inner.source()
    }
}
