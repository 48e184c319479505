//! Team directory entry.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::record::has_separator;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct PersonRecord {
    pub version: i64,
    pub name: String,
    pub team: String,
}

impl PersonRecord {
    /// Placeholder entry registering a team nobody has been assigned to yet.
    pub fn team_only(team: impl Into<String>) -> Self {
        Self {
            version: 0,
            name: String::new(),
            team: team.into(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.team.is_empty() {
            return Err(ValidationError::TeamEmpty);
        }
        if has_separator(&self.name) || has_separator(&self.team) {
            return Err(ValidationError::FieldSeparator);
        }
        Ok(())
    }
}
