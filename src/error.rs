//! Error kinds raised by the inspector core.
//!
//! Most of them never reach the user: listing and describing absorb
//! `Unreadable`, restoring absorbs the record errors. `WriteFailed` is the
//! one the shells have to deal with.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InspectorError {
    /// A folder could not be enumerated or a path could not be inspected.
    #[error("cannot read {path}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No selection record exists yet.
    #[error("no selection record at {path}")]
    RecordMissing { path: PathBuf },

    /// The selection record exists but does not hold two lines.
    #[error("selection record at {path} is malformed")]
    RecordMalformed { path: PathBuf },

    /// Persisting the selection or exporting a report failed.
    #[error("failed to write {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl InspectorError {
    pub fn unreadable(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Unreadable { path: path.into(), source }
    }

    pub fn write_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::WriteFailed { path: path.into(), source }
    }
}

pub type InspectorResult<T> = Result<T, InspectorError>;
