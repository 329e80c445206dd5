//! Catalog builder: turns a tree of codelab directories into a sorted catalog.
//!
//! # Error Handling Strategy
//!
//! Indexing is best-effort across directories:
//!
//! - **Collection-level failures**: A missing source directory is logged as an error and
//!   yields an empty catalog. It never aborts the build, so an empty `codelabs.json` is
//!   still written for downstream consumers.
//! - **Record-level failures**: Unreadable or malformed metadata files are logged with
//!   their path and cause, and that one directory is skipped.
//! - **Count reconciliation**: The number of discovered directories is compared with the
//!   number of indexed entries, and any mismatch is logged.

use std::path::{Path, PathBuf};

use log::{debug, error, info, warn};
use rayon::prelude::*;

use super::discovery::{METADATA_FILENAME, discover_metadata_dirs};
use super::stats::CatalogStats;
use crate::error::ScanError;
use crate::models::CatalogEntry;
use crate::parsers::parse_metadata_file;
use crate::utils::{catalog_url, locale_cmp};

/// Scans a source tree for codelab metadata
#[derive(Debug, Clone)]
pub struct Scanner {
    root: PathBuf,
    metadata_filename: String,
}

/// Outcome of a full index build
#[derive(Debug, Default)]
pub struct IndexReport {
    /// Entries sorted by title
    pub entries: Vec<CatalogEntry>,
    /// Everything that was skipped, in discovery order
    pub failures: Vec<ScanError>,
    /// Number of directories that held a metadata file
    pub discovered: usize,
}

impl IndexReport {
    pub fn stats(&self) -> CatalogStats {
        CatalogStats::from_entries(&self.entries)
    }
}

impl Scanner {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into(), metadata_filename: METADATA_FILENAME.to_string() }
    }

    pub fn metadata_filename(mut self, name: impl Into<String>) -> Self {
        self.metadata_filename = name.into();
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Lazily scan the tree, one result per codelab directory
    ///
    /// A missing root yields a single [`ScanError::RootNotFound`]. Entries come out in
    /// traversal order; use [`sort_by_title`] or [`Scanner::build`] for catalog order.
    pub fn entries(&self) -> Box<dyn Iterator<Item = Result<CatalogEntry, ScanError>> + '_> {
        if !self.root.is_dir() {
            return Box::new(std::iter::once(Err(ScanError::RootNotFound(self.root.clone()))));
        }

        Box::new(
            discover_metadata_dirs(&self.root, &self.metadata_filename)
                .map(move |dir| dir.and_then(|dir| self.read_entry(&dir))),
        )
    }

    /// Read and normalize the metadata of one codelab directory
    pub fn read_entry(&self, dir: &Path) -> Result<CatalogEntry, ScanError> {
        let record = parse_metadata_file(&dir.join(&self.metadata_filename))?;

        let fallback_id =
            dir.file_name().map(|name| name.to_string_lossy().into_owned()).unwrap_or_default();
        let url = catalog_url(&self.root, dir);

        Ok(record.into_entry(&fallback_id, url))
    }

    /// Build the full catalog, reading metadata files in parallel
    ///
    /// Never fails: every problem is logged and recorded in [`IndexReport::failures`].
    pub fn build(&self) -> IndexReport {
        if !self.root.is_dir() {
            let failure = ScanError::RootNotFound(self.root.clone());
            error!("{}", failure);
            return IndexReport { failures: vec![failure], ..IndexReport::default() };
        }

        let mut dirs = Vec::new();
        let mut failures = Vec::new();
        for item in discover_metadata_dirs(&self.root, &self.metadata_filename) {
            match item {
                Ok(dir) => dirs.push(dir),
                Err(e) => {
                    warn!("Skipping {}: {}", e.path().display(), e);
                    failures.push(e);
                }
            }
        }
        let discovered = dirs.len();

        let results: Vec<Result<CatalogEntry, ScanError>> =
            dirs.par_iter().map(|dir| self.read_entry(dir)).collect();

        let mut entries = Vec::with_capacity(discovered);
        for result in results {
            match result {
                Ok(entry) => {
                    debug!("Indexed {} ({})", entry.title, entry.url);
                    entries.push(entry);
                }
                Err(e) => {
                    warn!("Skipping {}: {}", e.path().display(), e);
                    failures.push(e);
                }
            }
        }

        if entries.len() == discovered {
            info!("Indexed {} codelab(s) from {}", entries.len(), self.root.display());
        } else {
            warn!(
                "Indexed {} of {} discovered codelab(s) from {} ({} failed)",
                entries.len(),
                discovered,
                self.root.display(),
                discovered - entries.len()
            );
        }

        sort_by_title(&mut entries);

        IndexReport { entries, failures, discovered }
    }
}

/// Build the catalog for `root` with the default metadata filename
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use codelab_catalog::build_index;
///
/// let report = build_index(Path::new("./codelabs"));
/// println!("Indexed {} codelabs", report.entries.len());
/// ```
pub fn build_index(root: &Path) -> IndexReport {
    Scanner::new(root).build()
}

/// Stable sort by title, locale-aware ascending
pub fn sort_by_title(entries: &mut [CatalogEntry]) {
    entries.sort_by(|a, b| locale_cmp(&a.title, &b.title));
}
