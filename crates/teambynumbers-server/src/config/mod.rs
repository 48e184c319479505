//! Dashboard config loader (strict parsing).

pub mod schema;

use std::fs;
use std::path::Path;

use teambynumbers_core::error::{Result, TbnError};

pub use schema::{DashboardConfig, ExporterSection, ServerSection, StorageSection};

pub fn load_from_file(path: impl AsRef<Path>) -> Result<DashboardConfig> {
    let path = path.as_ref();
    let s = fs::read_to_string(path).map_err(|e| {
        TbnError::Internal(format!("read config {} failed: {e}", path.display()))
    })?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<DashboardConfig> {
    let cfg: DashboardConfig = serde_yaml::from_str(s)
        .map_err(|e| TbnError::BadRequest(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
