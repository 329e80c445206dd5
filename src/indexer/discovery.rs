use std::path::{Path, PathBuf};

use log::debug;
use walkdir::WalkDir;

use crate::error::ScanError;

/// Name of the per-directory metadata file
pub const METADATA_FILENAME: &str = "codelab.json";

/// Maximum directory depth below the source root (resource limit against runaway trees)
pub const MAX_SCAN_DEPTH: usize = 64;

/// Find every directory below `root` that contains a metadata file
///
/// Walks depth-first without following symlinks. The root itself is not a candidate;
/// only its subdirectories are. Directories without a metadata file are skipped
/// silently (logged at debug level). Walk failures, such as unreadable directories, are
/// yielded as [`ScanError::Walk`] so the caller can report them and keep going.
///
/// The caller is expected to have checked that `root` exists.
pub fn discover_metadata_dirs(
    root: &Path,
    metadata_filename: &str,
) -> impl Iterator<Item = Result<PathBuf, ScanError>> + use<> {
    let root_path = root.to_path_buf();
    let metadata_filename = metadata_filename.to_string();

    WalkDir::new(root)
        .min_depth(1)
        .max_depth(MAX_SCAN_DEPTH)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_map(move |entry| match entry {
            Ok(entry) if entry.file_type().is_dir() => {
                if entry.path().join(&metadata_filename).is_file() {
                    Some(Ok(entry.into_path()))
                } else {
                    debug!("No {} in {}, skipping", metadata_filename, entry.path().display());
                    None
                }
            }
            Ok(_) => None,
            Err(source) => {
                let path =
                    source.path().map(Path::to_path_buf).unwrap_or_else(|| root_path.clone());
                Some(Err(ScanError::Walk { path, source }))
            }
        })
}
