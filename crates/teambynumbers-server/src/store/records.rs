//! Record store: validated, newest-first team reports backed by a flat file.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use teambynumbers_core::error::Result;
use teambynumbers_core::record::{newest_first_position, sort_newest_first};
use teambynumbers_core::StatRecord;

use super::flatfile::{self, FlatFile};

pub struct RecordStore {
    file: FlatFile<StatRecord>,
}

impl RecordStore {
    /// Load the backing file. Rows are reordered newest-first; the file
    /// itself is left alone until the next append.
    pub fn open(path: impl Into<PathBuf>, create_missing: bool) -> Result<Self> {
        let path = path.into();
        let mut rows = flatfile::read_rows::<StatRecord>(&path, create_missing)?;
        sort_newest_first(&mut rows);
        Ok(Self {
            file: FlatFile::new(path, rows),
        })
    }

    /// Validate and persist a new record. Returns the record as stored.
    pub fn append(&self, record: StatRecord) -> Result<StatRecord> {
        record.validate()?;
        let record = record.normalized();

        self.file.commit(|rows| {
            let at = newest_first_position(rows, &record);
            rows.insert(at, record.clone());
            Ok(true)
        })?;

        tracing::info!(
            team = %record.team,
            date = %record.date,
            quality_score = record.quality_score(),
            "stored report entry"
        );
        Ok(record)
    }

    /// All records, newest first.
    pub fn all(&self) -> Arc<Vec<StatRecord>> {
        self.file.snapshot()
    }

    pub fn len(&self) -> usize {
        self.all().len()
    }

    pub fn is_empty(&self) -> bool {
        self.all().is_empty()
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }
}
