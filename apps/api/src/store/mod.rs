//! Record Store: the in-memory list of parsed resumes, persisted as one JSON
//! array. Every mutation is written through with write-then-rename, so the
//! file on disk is always either the old or the new complete array.

pub mod handlers;

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::{info, warn};

use crate::models::resume::ResumeRecord;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Persisted records at {path} are malformed: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Original file not found: {0}")]
    OriginalMissing(PathBuf),

    #[error("Failed to serialize records: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

fn io_err(path: &Path) -> impl FnOnce(io::Error) -> StoreError + '_ {
    move |source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    }
}

#[derive(Debug)]
pub struct RecordStore {
    path: PathBuf,
    records: Vec<ResumeRecord>,
}

impl RecordStore {
    /// Opens the store at `path`. A missing file is an empty store; a file that
    /// does not parse is reported, never overwritten.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        if !path.exists() {
            info!("No record file at {}; starting empty", path.display());
            return Ok(Self {
                path,
                records: Vec::new(),
            });
        }

        let raw = fs::read_to_string(&path).map_err(io_err(&path))?;
        let records: Vec<ResumeRecord> = if raw.trim().is_empty() {
            Vec::new()
        } else {
            serde_json::from_str(&raw).map_err(|source| StoreError::Malformed {
                path: path.clone(),
                source,
            })?
        };
        info!("Loaded {} resume records from {}", records.len(), path.display());
        Ok(Self { path, records })
    }

    pub fn records(&self) -> &[ResumeRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains(&self, file_path: &Path) -> bool {
        self.get(file_path).is_some()
    }

    pub fn get(&self, file_path: &Path) -> Option<&ResumeRecord> {
        self.records.iter().find(|r| r.file_path == file_path)
    }

    /// Appends `record` unless one with the same path is already held, and
    /// persists. Returns whether it was added. A failed save leaves the
    /// in-memory list as it was.
    pub fn add(&mut self, record: ResumeRecord) -> Result<bool, StoreError> {
        Ok(self.add_all(vec![record])?.len() == 1)
    }

    /// Appends every record whose path is not yet held, then persists once.
    /// Returns the records actually added. All or nothing: on a failed save
    /// none of them stay in memory.
    pub fn add_all(&mut self, records: Vec<ResumeRecord>) -> Result<Vec<ResumeRecord>, StoreError> {
        let before = self.records.len();
        for record in records {
            if !self.contains(&record.file_path) {
                self.records.push(record);
            }
        }
        if self.records.len() == before {
            return Ok(Vec::new());
        }
        if let Err(e) = self.save() {
            self.records.truncate(before);
            return Err(e);
        }
        Ok(self.records[before..].to_vec())
    }

    /// Drops every record and persists the empty collection. On a failed save
    /// the records are kept.
    pub fn clear_all(&mut self) -> Result<(), StoreError> {
        let previous = std::mem::take(&mut self.records);
        if let Err(e) = self.save() {
            self.records = previous;
            return Err(e);
        }
        info!("Cleared {} resume records", previous.len());
        Ok(())
    }

    /// Writes the whole collection to a temp file beside the target, then
    /// renames it into place.
    pub fn save(&self) -> Result<(), StoreError> {
        let json = serde_json::to_vec_pretty(&self.records)?;
        let dir = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&dir).map_err(io_err(&dir))?;

        let mut tmp = NamedTempFile::new_in(&dir).map_err(io_err(&dir))?;
        tmp.write_all(&json).map_err(io_err(tmp.path()))?;
        tmp.as_file().sync_all().map_err(io_err(&self.path))?;
        tmp.persist(&self.path)
            .map_err(|e| io_err(&self.path)(e.error))?;
        Ok(())
    }
}

/// Copies a stored resume's original file to `destination`. A destination that
/// is an existing directory keeps the original file name. A missing original
/// is reported as `OriginalMissing`, separate from other I/O failures.
pub fn copy_original(original: &Path, destination: &Path) -> Result<PathBuf, StoreError> {
    if !original.is_file() {
        warn!("Original resume missing at {}", original.display());
        return Err(StoreError::OriginalMissing(original.to_path_buf()));
    }
    let target = if destination.is_dir() {
        match original.file_name() {
            Some(name) => destination.join(name),
            None => return Err(StoreError::OriginalMissing(original.to_path_buf())),
        }
    } else {
        destination.to_path_buf()
    };
    fs::copy(original, &target).map_err(io_err(&target))?;
    info!("Copied {} to {}", original.display(), target.display());
    Ok(target)
}
