//! Flat-file table shared by the record store and the team directory.
//!
//! Rows live in memory as an immutable snapshot (`Arc<Vec<T>>`). Readers
//! clone the `Arc` and iterate without holding the lock. Writers are
//! serialized by a separate mutex: the next vector is built and the whole
//! file rewritten while readers keep seeing the old snapshot, and the
//! snapshot lock is only taken for the swap. The swap happens only after the
//! file write succeeded, so a failed write leaves memory and disk in
//! agreement.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError, RwLock};

use tempfile::NamedTempFile;

use teambynumbers_core::codec::{self, LineRecord};
use teambynumbers_core::error::Result;

pub struct FlatFile<T> {
    path: PathBuf,
    rows: RwLock<Arc<Vec<T>>>,
    writer: Mutex<()>,
}

impl<T: LineRecord + Clone> FlatFile<T> {
    /// Load `path` and keep the rows in file order.
    pub fn open(path: impl Into<PathBuf>, create_missing: bool) -> Result<Self> {
        let path = path.into();
        let rows = read_rows(&path, create_missing)?;
        Ok(Self::new(path, rows))
    }

    pub fn new(path: PathBuf, rows: Vec<T>) -> Self {
        Self {
            path,
            rows: RwLock::new(Arc::new(rows)),
            writer: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn snapshot(&self) -> Arc<Vec<T>> {
        // The snapshot is only ever replaced whole, so a poisoned lock still
        // guards a consistent value.
        let guard = self.rows.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&*guard)
    }

    /// Apply `change` to a copy of the rows. When it reports a change the
    /// file is rewritten and the copy becomes the new snapshot.
    pub fn commit<F>(&self, change: F) -> Result<bool>
    where
        F: FnOnce(&mut Vec<T>) -> Result<bool>,
    {
        // Only writers take this lock, so the snapshot read below is the one
        // the swap replaces.
        let _writing = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        let mut next: Vec<T> = (*self.snapshot()).clone();
        if !change(&mut next)? {
            return Ok(false);
        }

        write_atomic(&self.path, codec::render(&next).as_bytes())?;
        tracing::debug!(path = %self.path.display(), kind = T::KIND, rows = next.len(), "rewrote backing file");

        *self.rows.write().unwrap_or_else(PoisonError::into_inner) = Arc::new(next);
        Ok(true)
    }
}

/// Read and decode a backing file, logging parse warnings and skipped lines.
pub fn read_rows<T: LineRecord>(path: &Path, create_missing: bool) -> Result<Vec<T>> {
    let input = match fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) if e.kind() == io::ErrorKind::NotFound && create_missing => {
            tracing::info!(path = %path.display(), kind = T::KIND, "backing file missing, starting empty");
            return Ok(Vec::new());
        }
        Err(e) => return Err(e.into()),
    };

    let parsed = codec::parse::<T>(&input);
    for w in &parsed.warnings {
        tracing::warn!(path = %path.display(), kind = T::KIND, "{w}");
    }
    for s in &parsed.skipped {
        tracing::debug!(
            path = %path.display(),
            kind = T::KIND,
            line = s.line,
            fields = s.fields,
            "skipping line with unexpected field count"
        );
    }
    tracing::info!(
        path = %path.display(),
        kind = T::KIND,
        records = parsed.records.len(),
        skipped = parsed.skipped.len(),
        "loaded backing file"
    );
    Ok(parsed.records)
}

/// Write through a temp file in the same directory, then rename over `path`.
fn write_atomic(path: &Path, data: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(data)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
