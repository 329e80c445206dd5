//! Error types for catalog scanning and loading.
//!
//! Scanning is best-effort: a [`ScanError`] describes why a single directory (or the
//! whole source tree) contributed nothing, and the caller decides whether to log it
//! and continue. [`CatalogError`] is surfaced when a built catalog cannot be loaded.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScanError {
    /// The source directory does not exist or is not a directory
    #[error("source directory not found: {}", .0.display())]
    RootNotFound(PathBuf),

    #[error("failed to walk {}: {source}", path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("metadata file too large: {} ({size} bytes, max {max} bytes)", path.display())]
    TooLarge { path: PathBuf, size: u64, max: u64 },

    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("metadata in {} is not a JSON object", path.display())]
    NotAnObject { path: PathBuf },
}

impl ScanError {
    /// Path of the directory or file the error refers to
    pub fn path(&self) -> &Path {
        match self {
            ScanError::RootNotFound(path) => path,
            ScanError::Walk { path, .. }
            | ScanError::Read { path, .. }
            | ScanError::TooLarge { path, .. }
            | ScanError::Parse { path, .. }
            | ScanError::NotAnObject { path } => path,
        }
    }

    /// Whether the error concerns the whole source tree rather than one record
    pub fn is_collection_level(&self) -> bool {
        matches!(self, ScanError::RootNotFound(_))
    }
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read catalog {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse catalog {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
