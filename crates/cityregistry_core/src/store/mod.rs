//! Flat-file JSON storage for record collections.
//!
//! # Responsibility
//! - Load and save whole record collections, one JSON array per file.
//! - Bootstrap a missing file with an empty collection on first load.
//!
//! # Invariants
//! - Files are UTF-8, human-readable, indented JSON arrays.
//! - There is no partial write path; every save rewrites the full file.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

mod json_file;

pub use json_file::{load_or_init, save};

pub type StoreResult<T> = Result<T, StoreError>;

/// Storage-layer error for loading and saving record files.
#[derive(Debug)]
pub enum StoreError {
    /// File could not be read, created or written.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// File exists but does not hold a well-formed collection.
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    /// Collection could not be serialized for writing.
    Encode {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "storage I/O failed for `{}`: {source}", path.display())
            }
            Self::Parse { path, source } => {
                write!(f, "corrupt record file `{}`: {source}", path.display())
            }
            Self::Encode { path, source } => {
                write!(
                    f,
                    "failed to serialize records for `{}`: {source}",
                    path.display()
                )
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
            Self::Encode { source, .. } => Some(source),
        }
    }
}
