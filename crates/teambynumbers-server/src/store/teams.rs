//! Team directory: people and the teams they belong to.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use teambynumbers_core::error::Result;
use teambynumbers_core::PersonRecord;

use super::flatfile::FlatFile;

pub struct TeamDirectory {
    file: FlatFile<PersonRecord>,
}

impl TeamDirectory {
    pub fn open(path: impl Into<PathBuf>, create_missing: bool) -> Result<Self> {
        Ok(Self {
            file: FlatFile::open(path, create_missing)?,
        })
    }

    pub fn people(&self) -> Arc<Vec<PersonRecord>> {
        self.file.snapshot()
    }

    /// Distinct team names.
    pub fn teams(&self) -> BTreeSet<String> {
        self.people().iter().map(|p| p.team.clone()).collect()
    }

    pub fn has_team(&self, team: &str) -> bool {
        self.people().iter().any(|p| p.team == team)
    }

    pub fn add(&self, person: PersonRecord) -> Result<()> {
        person.validate()?;
        let team = person.team.clone();
        self.file.commit(|rows| {
            rows.push(person);
            Ok(true)
        })?;
        tracing::info!(%team, "added team directory entry");
        Ok(())
    }

    /// Register `team` with a nameless entry unless someone already belongs
    /// to it. Returns whether an entry was written.
    pub fn ensure_team(&self, team: &str) -> Result<bool> {
        let person = PersonRecord::team_only(team);
        person.validate()?;

        let added = self.file.commit(|rows| {
            if rows.iter().any(|p| p.team == team) {
                return Ok(false);
            }
            rows.push(person);
            Ok(true)
        })?;
        if added {
            tracing::info!(%team, "registered new team");
        }
        Ok(added)
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }
}
