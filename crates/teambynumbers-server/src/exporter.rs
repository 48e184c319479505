//! Periodic gauge refresh.
//!
//! Every tick takes a snapshot of the record store and republishes the
//! newest record of each team. The store keeps records newest-first, so the
//! first record seen for a team in a pass is its latest one.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use teambynumbers_core::StatRecord;

use crate::obs::{MetricsSink, TeamGauge};
use crate::store::RecordStore;

/// Publish the first record of every team found in `records`. Returns the
/// number of teams published.
pub fn publish_latest(records: &[StatRecord], sink: &dyn MetricsSink) -> usize {
    let mut seen: HashSet<&str> = HashSet::new();
    for record in records {
        if !seen.insert(record.team.as_str()) {
            continue;
        }
        for gauge in TeamGauge::ALL {
            sink.set_team_gauge(gauge, &record.team, gauge.read(record));
        }
    }
    seen.len()
}

/// Start the refresh loop. The first pass runs immediately; the task lives
/// until the runtime shuts down.
pub fn spawn(
    store: Arc<RecordStore>,
    sink: Arc<dyn MetricsSink>,
    interval: Duration,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        tracing::info!(interval_ms = interval.as_millis() as u64, "metrics exporter started");

        loop {
            ticker.tick().await;
            let records = store.all();
            let teams = publish_latest(&records, sink.as_ref());
            sink.pass_completed(teams);
            tracing::debug!(teams, records = records.len(), "published team gauges");
        }
    })
}
