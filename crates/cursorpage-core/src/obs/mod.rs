//! Observability: pagination telemetry and sink abstractions.
//!
//! The engine never logs. Every instrumentation point emits a
//! `MetricsEvent` into the sink the engine was built with.

mod sink;

// re-exports
pub use sink::{CounterSink, MetricsEvent, MetricsReport, MetricsSink, ModeCounters, NoopSink};
