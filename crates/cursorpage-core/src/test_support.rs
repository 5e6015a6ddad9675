use crate::{
    db::{
        predicate::eval,
        sort::compare_rows,
        source::{DataSource, DataSourceError, Query},
    },
    value::Value,
};
use async_trait::async_trait;
use std::{collections::BTreeMap, sync::Mutex};

/// Row shape used by core tests.
pub(crate) type TestRow = BTreeMap<String, Value>;

/// Build a test row from `(field, value)` pairs.
pub(crate) fn row(pairs: impl IntoIterator<Item = (&'static str, Value)>) -> TestRow {
    pairs
        .into_iter()
        .map(|(name, value)| (name.to_string(), value))
        .collect()
}

///
/// MemorySource
///
/// In-memory data source that filters with the reference predicate evaluator,
/// sorts by the query's sort spec, and applies the limit. Every query is
/// recorded for later inspection.
///

#[derive(Debug, Default)]
pub(crate) struct MemorySource {
    rows: Vec<TestRow>,
    queries: Mutex<Vec<Query>>,
    failure: Option<String>,
}

impl MemorySource {
    pub(crate) fn new(rows: impl IntoIterator<Item = TestRow>) -> Self {
        Self {
            rows: rows.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Source whose every query fails with `message`.
    pub(crate) fn failing(message: impl Into<String>) -> Self {
        Self {
            failure: Some(message.into()),
            ..Self::default()
        }
    }

    pub(crate) fn queries(&self) -> Vec<Query> {
        self.queries.lock().expect("query log poisoned").clone()
    }

    pub(crate) fn query_count(&self) -> usize {
        self.queries.lock().expect("query log poisoned").len()
    }
}

#[async_trait]
impl DataSource for MemorySource {
    type Row = TestRow;

    async fn query(&self, query: Query) -> Result<Vec<TestRow>, DataSourceError> {
        self.queries
            .lock()
            .expect("query log poisoned")
            .push(query.clone());

        if let Some(message) = &self.failure {
            return Err(DataSourceError::message(message.clone()));
        }

        let mut rows: Vec<TestRow> = self
            .rows
            .iter()
            .filter(|row| eval(*row, &query.filter))
            .cloned()
            .collect();
        rows.sort_by(|left, right| compare_rows(&query.sort, left, right));
        rows.truncate(query.limit as usize);

        Ok(rows)
    }
}
