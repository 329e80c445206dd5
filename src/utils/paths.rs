use std::fs::File;
use std::path::{Component, Path};

use crate::error::ScanError;

/// Maximum size of a single metadata file: 1MB
pub const MAX_METADATA_FILE_BYTES: u64 = 1024 * 1024;

/// Page every catalog entry links to, relative to its directory
pub const ENTRY_PAGE: &str = "index.html";

/// Builds the catalog URL for a codelab directory
///
/// The directory path is made relative to the scan root and joined with `/`
/// regardless of the host separator, then suffixed with `/index.html`.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use codelab_catalog::utils::catalog_url;
///
/// let url = catalog_url(Path::new("codelabs"), Path::new("codelabs/web/intro"));
/// assert_eq!(url, "web/intro/index.html");
/// ```
pub fn catalog_url(root: &Path, dir: &Path) -> String {
    let relative = dir.strip_prefix(root).unwrap_or(dir);

    let mut segments: Vec<String> = relative
        .components()
        .filter_map(|component| match component {
            Component::Normal(segment) => Some(segment.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();
    segments.push(ENTRY_PAGE.to_string());

    segments.join("/")
}

/// Validates that a metadata file's size is within [`MAX_METADATA_FILE_BYTES`]
///
/// Takes an open file handle so the size checked is the size of the file
/// that is subsequently read.
pub fn validate_file_size(file: &File, path: &Path) -> Result<(), ScanError> {
    let metadata =
        file.metadata().map_err(|source| ScanError::Read { path: path.to_path_buf(), source })?;

    let size = metadata.len();
    if size > MAX_METADATA_FILE_BYTES {
        return Err(ScanError::TooLarge {
            path: path.to_path_buf(),
            size,
            max: MAX_METADATA_FILE_BYTES,
        });
    }

    Ok(())
}

/// Formats a path with ~ substitution for the home directory
pub fn format_path_with_tilde(path: &Path) -> String {
    let home = dirs::home_dir();
    format_path_with_tilde_internal(path, home.as_deref())
}

/// Internal helper for path formatting with optional home override (for testing)
pub(crate) fn format_path_with_tilde_internal(path: &Path, home: Option<&Path>) -> String {
    if let Some(home) = home
        && let Ok(rest) = path.strip_prefix(home)
    {
        if rest.as_os_str().is_empty() {
            return "~".to_string();
        }
        return format!("~/{}", rest.display());
    }

    path.display().to_string()
}
