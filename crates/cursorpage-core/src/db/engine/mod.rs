//! Module: engine
//! Responsibility: turn one pagination request into one data-source query and
//! one page.
//! Does not own: cursor encoding, sort semantics, or the data source.
//! Boundary: the single suspension point is the data-source call.

mod page_info;
mod plan;


pub use plan::PagePlan;

use crate::{
    config::{ConfigError, PaginationConfig},
    db::{
        cursor::CursorCodec,
        predicate::Predicate,
        request::PaginationRequest,
        response::Page,
        sort::{SortField, SortRequest, SortSpec},
        source::DataSource,
    },
    error::Error,
    obs::{MetricsEvent, MetricsSink, NoopSink},
};
use page_info::{PageBounds, derive_page_info};
use std::{fmt, sync::Arc};

///
/// PaginationEngine
///
/// Stateless keyset paginator. Build once, share by reference; concurrent
/// `paginate` calls never coordinate.
///

#[derive(Clone)]
pub struct PaginationEngine {
    config: PaginationConfig,
    sink: Arc<dyn MetricsSink>,
}

impl PaginationEngine {
    /// Build an engine over a validated `config`.
    pub fn new(config: PaginationConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        Ok(Self {
            config,
            sink: Arc::new(NoopSink),
        })
    }

    /// Route telemetry into `sink`.
    #[must_use]
    pub fn with_metrics(mut self, sink: Arc<dyn MetricsSink>) -> Self {
        self.sink = sink;
        self
    }

    #[must_use]
    pub const fn config(&self) -> &PaginationConfig {
        &self.config
    }

    /// Build a sort spec terminated by the configured tie-break field.
    pub fn sort_spec(&self, fields: impl IntoIterator<Item = SortField>) -> Result<SortSpec, Error> {
        Ok(SortSpec::new(fields, &self.config.tiebreak_field)?)
    }

    /// Derive a sort spec from user-facing `sortBy` / `sortOrder` parameters.
    pub fn sort_from_request(
        &self,
        request: &SortRequest,
        allowed_fields: &[&str],
        default_field: &str,
    ) -> Result<SortSpec, Error> {
        Ok(SortSpec::from_request(
            request,
            allowed_fields,
            default_field,
            &self.config.tiebreak_field,
        )?)
    }

    /// Plan a page without touching any data source.
    pub fn plan(
        &self,
        sort: &SortSpec,
        request: &PaginationRequest,
        base_filter: Predicate,
    ) -> Result<PagePlan, Error> {
        plan::plan_page(&self.config, sort, request, base_filter)
    }

    /// Fetch one page of raw rows.
    pub async fn paginate<S>(
        &self,
        sort: &SortSpec,
        request: &PaginationRequest,
        base_filter: Predicate,
        source: &S,
    ) -> Result<Page<S::Row>, Error>
    where
        S: DataSource + ?Sized,
    {
        self.paginate_with(sort, request, base_filter, source, |row| row)
            .await
    }

    /// Fetch one page, mapping each row after its cursor has been derived.
    ///
    /// `map` must be pure; it runs only once the page is known to succeed.
    pub async fn paginate_with<S, T, F>(
        &self,
        sort: &SortSpec,
        request: &PaginationRequest,
        base_filter: Predicate,
        source: &S,
        map: F,
    ) -> Result<Page<T>, Error>
    where
        S: DataSource + ?Sized,
        F: FnMut(S::Row) -> T,
    {
        let result = self
            .execute(sort, request, base_filter, source, map)
            .await;

        if let Err(err) = &result {
            self.sink.record(MetricsEvent::Rejected {
                class: err.class(),
                kind: err.kind(),
            });
        }

        result
    }

    async fn execute<S, T, F>(
        &self,
        sort: &SortSpec,
        request: &PaginationRequest,
        base_filter: Predicate,
        source: &S,
        map: F,
    ) -> Result<Page<T>, Error>
    where
        S: DataSource + ?Sized,
        F: FnMut(S::Row) -> T,
    {
        let PagePlan {
            direction,
            mode,
            size,
            query,
            ..
        } = self.plan(sort, request, base_filter)?;
        self.sink.record(MetricsEvent::PageStart { mode });

        let mut rows = source.query(query).await?;
        let rows_fetched = rows.len();

        // Over-read probe: one row beyond the page means more exist.
        let limit = usize::try_from(size).unwrap_or(usize::MAX);
        let has_extra = rows.len() > limit;
        rows.truncate(limit);

        if direction.is_backward() {
            rows.reverse();
        }

        let codec = CursorCodec::new(sort);
        let start_cursor = rows.first().map(|row| codec.encode(row)).transpose()?;
        let end_cursor = rows.last().map(|row| codec.encode(row)).transpose()?;

        let page_info = derive_page_info(
            mode,
            PageBounds {
                has_after: request.after.is_some(),
                has_before: request.before.is_some(),
                has_extra,
            },
            start_cursor,
            end_cursor,
        );

        let items: Vec<T> = rows.into_iter().map(map).collect();
        self.sink.record(MetricsEvent::PageFinish {
            mode,
            rows_fetched: u64::try_from(rows_fetched).unwrap_or(u64::MAX),
            rows_returned: u64::try_from(items.len()).unwrap_or(u64::MAX),
        });

        Ok(Page::new(items, page_info))
    }
}

impl Default for PaginationEngine {
    fn default() -> Self {
        Self {
            config: PaginationConfig::default(),
            sink: Arc::new(NoopSink),
        }
    }
}

impl fmt::Debug for PaginationEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaginationEngine")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
