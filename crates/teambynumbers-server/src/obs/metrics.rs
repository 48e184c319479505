//! Minimal metrics registry for the dashboard.
//!
//! Counter and gauge vectors with dynamic labels backed by `DashMap`. Labels
//! are flattened into sorted key vectors and series are rendered in sorted
//! order, so `/api/v1/metrics` output is deterministic. Gauges hold `f64`
//! values as raw bits in an `AtomicU64`.

use dashmap::DashMap;
use std::fmt::Write;
use std::sync::atomic::{AtomicU64, Ordering};

use super::sink::{MetricsSink, TeamGauge};

type LabelKey = Vec<(String, String)>;

/// Helper to escape label values.
fn escape_label(v: &str) -> String {
    v.replace('\\', "\\\\").replace('"', "\\\"").replace('\n', "\\n")
}

fn label_key(labels: &[(&str, &str)]) -> LabelKey {
    let mut key: LabelKey = labels
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    key.sort();
    key
}

fn series(name: &str, key: &LabelKey) -> String {
    if key.is_empty() {
        return name.to_string();
    }
    let label_str = key
        .iter()
        .map(|(k, v)| format!("{}=\"{}\"", k, escape_label(v)))
        .collect::<Vec<_>>()
        .join(",");
    format!("{name}{{{label_str}}}")
}

fn header(out: &mut String, name: &str, help: &str, kind: &str) {
    let _ = writeln!(out, "# HELP {name} {help}");
    let _ = writeln!(out, "# TYPE {name} {kind}");
}

#[derive(Default)]
pub struct CounterVec {
    map: DashMap<LabelKey, AtomicU64>,
}

impl CounterVec {
    /// Increment by 1.
    pub fn inc(&self, labels: &[(&str, &str)]) {
        self.add(labels, 1);
    }

    /// Increment by an arbitrary value.
    pub fn add(&self, labels: &[(&str, &str)], v: u64) {
        let counter = self
            .map
            .entry(label_key(labels))
            .or_insert_with(|| AtomicU64::new(0));
        counter.fetch_add(v, Ordering::Relaxed);
    }

    pub fn get(&self, labels: &[(&str, &str)]) -> u64 {
        self.map
            .get(&label_key(labels))
            .map(|c| c.load(Ordering::Relaxed))
            .unwrap_or(0)
    }

    /// Render in Prometheus text exposition format.
    fn render(&self, name: &str, help: &str, out: &mut String) {
        header(out, name, help, "counter");
        let mut lines: Vec<(String, u64)> = self
            .map
            .iter()
            .map(|r| (series(name, r.key()), r.value().load(Ordering::Relaxed)))
            .collect();
        lines.sort();
        for (s, v) in lines {
            let _ = writeln!(out, "{s} {v}");
        }
    }
}

#[derive(Default)]
pub struct GaugeVec {
    map: DashMap<LabelKey, AtomicU64>,
}

impl GaugeVec {
    /// Overwrite the current value.
    pub fn set(&self, labels: &[(&str, &str)], v: f64) {
        let gauge = self
            .map
            .entry(label_key(labels))
            .or_insert_with(|| AtomicU64::new(0));
        gauge.store(v.to_bits(), Ordering::Relaxed);
    }

    /// Current value, or `None` if the series was never set.
    pub fn get(&self, labels: &[(&str, &str)]) -> Option<f64> {
        self.map
            .get(&label_key(labels))
            .map(|g| f64::from_bits(g.load(Ordering::Relaxed)))
    }

    /// Render in Prometheus text exposition format.
    fn render(&self, name: &str, help: &str, out: &mut String) {
        header(out, name, help, "gauge");
        let mut lines: Vec<(String, f64)> = self
            .map
            .iter()
            .map(|r| {
                (
                    series(name, r.key()),
                    f64::from_bits(r.value().load(Ordering::Relaxed)),
                )
            })
            .collect();
        lines.sort_by(|a, b| a.0.cmp(&b.0));
        for (s, v) in lines {
            let _ = writeln!(out, "{s} {v}");
        }
    }
}

#[derive(Default)]
pub struct DashboardMetrics {
    member_count: GaugeVec,
    cycle_time: GaugeVec,
    lead_time: GaugeVec,
    bugs_reported: GaugeVec,
    bugs_squashed: GaugeVec,
    deploy_count: GaugeVec,
    /// Entries submitted over HTTP, by `result` (`accepted` / `rejected`).
    pub entries: CounterVec,
    pub exporter_passes: CounterVec,
}

impl DashboardMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn team_gauge(&self, gauge: TeamGauge) -> &GaugeVec {
        match gauge {
            TeamGauge::MemberCount => &self.member_count,
            TeamGauge::CycleTime => &self.cycle_time,
            TeamGauge::LeadTime => &self.lead_time,
            TeamGauge::BugsReported => &self.bugs_reported,
            TeamGauge::BugsSquashed => &self.bugs_squashed,
            TeamGauge::DeployCount => &self.deploy_count,
        }
    }

    /// Render all registered metrics.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for g in TeamGauge::ALL {
            self.team_gauge(g).render(g.name(), g.help(), &mut out);
        }
        self.entries.render(
            "teambynumbers_entries_total",
            "Entries submitted through the API or form",
            &mut out,
        );
        self.exporter_passes.render(
            "teambynumbers_exporter_passes_total",
            "Completed gauge refresh passes",
            &mut out,
        );
        out
    }
}

impl MetricsSink for DashboardMetrics {
    fn set_team_gauge(&self, gauge: TeamGauge, team: &str, value: f64) {
        self.team_gauge(gauge).set(&[("team", team)], value);
    }

    fn pass_completed(&self, _teams: usize) {
        self.exporter_passes.inc(&[]);
    }
}
