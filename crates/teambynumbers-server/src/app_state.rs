//! Shared application state for the dashboard server.

use std::sync::Arc;

use tokio::task::JoinHandle;

use teambynumbers_core::error::Result;

use crate::config::DashboardConfig;
use crate::exporter;
use crate::obs::{DashboardMetrics, MetricsSink};
use crate::store::{RecordStore, TeamDirectory};

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: DashboardConfig,
    records: Arc<RecordStore>,
    teams: Arc<TeamDirectory>,
    metrics: Arc<DashboardMetrics>,
}

impl AppState {
    /// Open both stores. Fails if a backing file cannot be read.
    pub fn new(cfg: DashboardConfig) -> Result<Self> {
        let storage = &cfg.storage;
        let records = RecordStore::open(&storage.reports_path, storage.create_missing)?;
        let teams = TeamDirectory::open(&storage.teams_path, storage.create_missing)?;

        tracing::info!(
            reports = %records.path().display(),
            records = records.len(),
            directory = %teams.path().display(),
            teams = teams.teams().len(),
            "stores loaded"
        );

        Ok(Self {
            inner: Arc::new(AppStateInner {
                cfg,
                records: Arc::new(records),
                teams: Arc::new(teams),
                metrics: Arc::new(DashboardMetrics::new()),
            }),
        })
    }

    pub fn cfg(&self) -> &DashboardConfig {
        &self.inner.cfg
    }

    pub fn records(&self) -> Arc<RecordStore> {
        Arc::clone(&self.inner.records)
    }

    pub fn teams(&self) -> Arc<TeamDirectory> {
        Arc::clone(&self.inner.teams)
    }

    pub fn metrics(&self) -> Arc<DashboardMetrics> {
        Arc::clone(&self.inner.metrics)
    }

    /// Spawn the gauge refresh loop on the current runtime.
    pub fn start_exporter(&self) -> JoinHandle<()> {
        let sink: Arc<dyn MetricsSink> = self.metrics();
        exporter::spawn(self.records(), sink, self.cfg().exporter.interval())
    }
}
