//! Lightweight in-process metrics.
//!
//! Team gauges are published through the [`MetricsSink`] trait so the
//! exporter never touches a process-wide registry. [`DashboardMetrics`] is the
//! sink the server installs; it renders Prometheus text for
//! `/api/v1/metrics`.

pub mod metrics;
pub mod sink;

pub use metrics::DashboardMetrics;
pub use sink::{MetricsSink, TeamGauge};
