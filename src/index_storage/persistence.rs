//! Catalog persistence: atomic writes and lenient loading

use std::ffi::OsString;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};

use crate::error::CatalogError;
use crate::models::CatalogEntry;

/// Default catalog file name
pub const CATALOG_FILENAME: &str = "codelabs.json";

/// Temporary sibling used for the atomic write (`codelabs.json` → `.codelabs.json.tmp`)
fn temp_path(path: &Path) -> Result<PathBuf> {
    let file_name =
        path.file_name().ok_or_else(|| anyhow!("Invalid catalog path: {}", path.display()))?;

    let mut temp_name = OsString::from(".");
    temp_name.push(file_name);
    temp_name.push(".tmp");

    Ok(path.with_file_name(temp_name))
}

/// Write the catalog as a pretty-printed JSON array, atomically (temp file + rename)
///
/// An empty slice still produces a well-formed `[]` file.
pub fn write_catalog(path: &Path, entries: &[CatalogEntry]) -> Result<()> {
    let json = serde_json::to_string_pretty(entries).context("Failed to serialize catalog")?;

    let temp = temp_path(path)?;
    fs::write(&temp, json)
        .with_context(|| format!("Failed to write catalog temp file: {}", temp.display()))?;
    fs::rename(&temp, path)
        .with_context(|| format!("Failed to move catalog into place: {}", path.display()))?;

    Ok(())
}

/// Load a built catalog, normalizing every element
pub fn load_catalog(path: &Path) -> Result<Vec<CatalogEntry>, CatalogError> {
    let content = fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => CatalogError::NotFound(path.to_path_buf()),
        _ => CatalogError::Read { path: path.to_path_buf(), source },
    })?;

    serde_json::from_str(&content)
        .map_err(|source| CatalogError::Parse { path: path.to_path_buf(), source })
}
