//! # Clinica Store
//!
//! Whole-file JSON table storage.
//!
//! Each entity type lives in a single JSON document holding one flat array of
//! records. A [`JsonTable`] reads the whole array into memory and rewrites the
//! whole file on save; there is no indexing, partial update, or locking. Two
//! racing writers can lose an update — acceptable for a single clinic's admin
//! staff, and callers must not assume anything stronger.
//!
//! A missing file reads as an empty table, so tables spring into existence on
//! first save. A file that exists but cannot be parsed is an error: silently
//! treating it as empty would drop the whole table on the next save.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to read table file: {0}")]
    Read(std::io::Error),
    #[error("failed to write table file: {0}")]
    Write(std::io::Error),
    #[error("failed to create table directory: {0}")]
    DirCreation(std::io::Error),
    #[error("failed to parse table file: {0}")]
    Parse(serde_json::Error),
    #[error("failed to serialise table: {0}")]
    Serialise(serde_json::Error),
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// A JSON document treated as a naive table of records.
///
/// The table is scoped to one file path; construction performs no I/O.
#[derive(Debug, Clone)]
pub struct JsonTable {
    path: PathBuf,
}

impl JsonTable {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads every record in the table.
    ///
    /// A missing or empty file yields an empty `Vec`; any other read or parse
    /// failure is propagated.
    pub fn load<T: DeserializeOwned>(&self) -> StoreResult<Vec<T>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!("table {} not found, treating as empty", self.path.display());
                return Ok(Vec::new());
            }
            Err(e) => return Err(StoreError::Read(e)),
        };

        if contents.trim().is_empty() {
            return Ok(Vec::new());
        }

        serde_json::from_str(&contents).map_err(StoreError::Parse)
    }

    /// Rewrites the whole table with the given records.
    ///
    /// Creates the parent directory on first save. The write is a plain file
    /// rewrite with no atomicity guarantee beyond what the filesystem gives.
    pub fn save<T: Serialize>(&self, records: &[T]) -> StoreResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(StoreError::DirCreation)?;
        }

        let contents = serde_json::to_string_pretty(records).map_err(StoreError::Serialise)?;
        fs::write(&self.path, contents).map_err(StoreError::Write)
    }
}
