//! Metrics sink boundary.
//!
//! Engine logic MUST NOT aggregate counters itself.
//! All instrumentation flows through MetricsEvent and MetricsSink.
use crate::{db::request::TraversalMode, error::ErrorClass};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

///
/// MetricsEvent
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MetricsEvent {
    PageStart {
        mode: TraversalMode,
    },
    PageFinish {
        mode: TraversalMode,
        rows_fetched: u64,
        rows_returned: u64,
    },
    Rejected {
        class: ErrorClass,
        kind: &'static str,
    },
}

///
/// MetricsSink
///

pub trait MetricsSink: Send + Sync {
    fn record(&self, event: MetricsEvent);
}

///
/// NoopSink
/// Default sink; drops every event.
///

#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl MetricsSink for NoopSink {
    fn record(&self, _: MetricsEvent) {}
}

///
/// ModeCounters
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct ModeCounters {
    pub pages_started: u64,
    pub pages_finished: u64,
    pub rows_fetched: u64,
    pub rows_returned: u64,
}

///
/// MetricsReport
/// Point-in-time snapshot of a `CounterSink`.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct MetricsReport {
    pub forward: ModeCounters,
    pub backward: ModeCounters,
    pub window: ModeCounters,

    // Rejections by error class
    pub rejected_client: u64,
    pub rejected_data_source: u64,
    pub rejected_internal: u64,
}

impl MetricsReport {
    #[must_use]
    pub const fn mode(&self, mode: TraversalMode) -> &ModeCounters {
        match mode {
            TraversalMode::Forward => &self.forward,
            TraversalMode::Backward => &self.backward,
            TraversalMode::Window => &self.window,
        }
    }

    /// Pages started across every mode.
    #[must_use]
    pub const fn pages_started(&self) -> u64 {
        self.forward
            .pages_started
            .saturating_add(self.backward.pages_started)
            .saturating_add(self.window.pages_started)
    }
}

#[derive(Debug, Default)]
struct AtomicModeCounters {
    pages_started: AtomicU64,
    pages_finished: AtomicU64,
    rows_fetched: AtomicU64,
    rows_returned: AtomicU64,
}

impl AtomicModeCounters {
    fn snapshot(&self) -> ModeCounters {
        ModeCounters {
            pages_started: self.pages_started.load(Ordering::Relaxed),
            pages_finished: self.pages_finished.load(Ordering::Relaxed),
            rows_fetched: self.rows_fetched.load(Ordering::Relaxed),
            rows_returned: self.rows_returned.load(Ordering::Relaxed),
        }
    }

    fn reset(&self) {
        self.pages_started.store(0, Ordering::Relaxed);
        self.pages_finished.store(0, Ordering::Relaxed);
        self.rows_fetched.store(0, Ordering::Relaxed);
        self.rows_returned.store(0, Ordering::Relaxed);
    }
}

///
/// CounterSink
/// Lock-free counting sink, one instance per owner (no global state).
///

#[derive(Debug, Default)]
pub struct CounterSink {
    forward: AtomicModeCounters,
    backward: AtomicModeCounters,
    window: AtomicModeCounters,
    rejected_client: AtomicU64,
    rejected_data_source: AtomicU64,
    rejected_internal: AtomicU64,
}

impl CounterSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn report(&self) -> MetricsReport {
        MetricsReport {
            forward: self.forward.snapshot(),
            backward: self.backward.snapshot(),
            window: self.window.snapshot(),
            rejected_client: self.rejected_client.load(Ordering::Relaxed),
            rejected_data_source: self.rejected_data_source.load(Ordering::Relaxed),
            rejected_internal: self.rejected_internal.load(Ordering::Relaxed),
        }
    }

    /// Reset all counters (useful in tests).
    pub fn reset(&self) {
        self.forward.reset();
        self.backward.reset();
        self.window.reset();
        self.rejected_client.store(0, Ordering::Relaxed);
        self.rejected_data_source.store(0, Ordering::Relaxed);
        self.rejected_internal.store(0, Ordering::Relaxed);
    }

    const fn counters(&self, mode: TraversalMode) -> &AtomicModeCounters {
        match mode {
            TraversalMode::Forward => &self.forward,
            TraversalMode::Backward => &self.backward,
            TraversalMode::Window => &self.window,
        }
    }
}

impl MetricsSink for CounterSink {
    fn record(&self, event: MetricsEvent) {
        match event {
            MetricsEvent::PageStart { mode } => {
                self.counters(mode)
                    .pages_started
                    .fetch_add(1, Ordering::Relaxed);
            }

            MetricsEvent::PageFinish {
                mode,
                rows_fetched,
                rows_returned,
            } => {
                let counters = self.counters(mode);
                counters.pages_finished.fetch_add(1, Ordering::Relaxed);
                counters
                    .rows_fetched
                    .fetch_add(rows_fetched, Ordering::Relaxed);
                counters
                    .rows_returned
                    .fetch_add(rows_returned, Ordering::Relaxed);
            }

            MetricsEvent::Rejected { class, .. } => {
                let counter = match class {
                    ErrorClass::Client => &self.rejected_client,
                    ErrorClass::DataSource => &self.rejected_data_source,
                    ErrorClass::Internal => &self.rejected_internal,
                };
                counter.fetch_add(1, Ordering::Relaxed);
            }
        }
    }
}

///
/// TESTS
///
