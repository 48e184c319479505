use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;
use teambynumbers_core::error::{Result, TbnError};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DashboardConfig {
    pub version: u32,

    #[serde(default)]
    pub server: ServerSection,

    #[serde(default)]
    pub storage: StorageSection,

    #[serde(default)]
    pub exporter: ExporterSection,
}

impl DashboardConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(TbnError::BadRequest(format!(
                "unsupported config version: {}",
                self.version
            )));
        }

        self.server.validate()?;
        self.storage.validate()?;
        self.exporter.validate()?;

        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default = "default_listen")]
    pub listen: String,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
        }
    }
}

impl ServerSection {
    pub fn validate(&self) -> Result<()> {
        self.listen_addr().map(|_| ())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.listen.parse().map_err(|e| {
            TbnError::BadRequest(format!("server.listen must be a valid socket address: {e}"))
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StorageSection {
    #[serde(default = "default_reports_path")]
    pub reports_path: PathBuf,

    #[serde(default = "default_teams_path")]
    pub teams_path: PathBuf,

    /// Start with an empty store when a backing file does not exist yet.
    #[serde(default = "default_create_missing")]
    pub create_missing: bool,
}

impl Default for StorageSection {
    fn default() -> Self {
        Self {
            reports_path: default_reports_path(),
            teams_path: default_teams_path(),
            create_missing: default_create_missing(),
        }
    }
}

impl StorageSection {
    pub fn validate(&self) -> Result<()> {
        if self.reports_path.as_os_str().is_empty() {
            return Err(TbnError::BadRequest("storage.reports_path must not be empty".into()));
        }
        if self.teams_path.as_os_str().is_empty() {
            return Err(TbnError::BadRequest("storage.teams_path must not be empty".into()));
        }
        if self.reports_path == self.teams_path {
            return Err(TbnError::BadRequest(
                "storage.reports_path and storage.teams_path must differ".into(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExporterSection {
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,
}

impl Default for ExporterSection {
    fn default() -> Self {
        Self {
            interval_ms: default_interval_ms(),
        }
    }
}

impl ExporterSection {
    pub fn validate(&self) -> Result<()> {
        if !(1000..=3_600_000).contains(&self.interval_ms) {
            return Err(TbnError::BadRequest(
                "exporter.interval_ms must be between 1000 and 3600000".into(),
            ));
        }
        Ok(())
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

fn default_listen() -> String {
    "0.0.0.0:8888".into()
}
fn default_reports_path() -> PathBuf {
    PathBuf::from("db/reports.csv")
}
fn default_teams_path() -> PathBuf {
    PathBuf::from("db/teams.csv")
}
fn default_create_missing() -> bool {
    true
}
fn default_interval_ms() -> u64 {
    15000
}
