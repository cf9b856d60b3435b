//! Backing-file storage for the contact store.
//!
//! # Responsibility
//! - Read and write the JSON array that holds every contact.
//! - Classify storage failures into read, corrupt, malformed and write errors.
//!
//! # Invariants
//! - A missing backing file is an empty store, never an error.
//! - Writes replace the backing file via temp-file + rename; a failed write
//!   leaves the previous file content in place.

use crate::model::contact::MalformedRecordError;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io;
use std::path::PathBuf;

mod json_file;

pub use json_file::{load_contacts, write_contacts};

/// Default backing file name, resolved against the working directory.
pub const DEFAULT_STORE_FILE_NAME: &str = "contacts.json";

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug)]
pub enum StoreError {
    /// The backing file exists but could not be read.
    StorageRead { path: PathBuf, source: io::Error },
    /// The backing file is not a JSON array of objects.
    CorruptStore {
        path: PathBuf,
        source: serde_json::Error,
    },
    /// One array element could not be turned into a contact.
    MalformedRecord {
        index: usize,
        source: MalformedRecordError,
    },
    /// Persisting the in-memory contacts failed; the file is stale.
    StorageWrite { path: PathBuf, source: io::Error },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::StorageRead { path, source } => {
                write!(f, "failed to read `{}`: {source}", path.display())
            }
            Self::CorruptStore { path, source } => write!(
                f,
                "contact file `{}` is corrupt and was left untouched: {source}",
                path.display()
            ),
            Self::MalformedRecord { index, source } => {
                write!(f, "malformed contact at position {index}: {source}")
            }
            Self::StorageWrite { path, source } => {
                write!(f, "failed to write `{}`: {source}", path.display())
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::StorageRead { source, .. } => Some(source),
            Self::CorruptStore { source, .. } => Some(source),
            Self::MalformedRecord { source, .. } => Some(source),
            Self::StorageWrite { source, .. } => Some(source),
        }
    }
}

impl StoreError {
    /// Stable short code used in log lines and shell output.
    pub fn code(&self) -> &'static str {
        match self {
            Self::StorageRead { .. } => "storage_read_failed",
            Self::CorruptStore { .. } => "corrupt_store",
            Self::MalformedRecord { .. } => "malformed_record",
            Self::StorageWrite { .. } => "storage_write_failed",
        }
    }
}
