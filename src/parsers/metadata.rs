use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde_json::Value;

use crate::error::ScanError;
use crate::models::RawRecord;
use crate::utils::validate_file_size;

/// Parse one `codelab.json` metadata file
///
/// The file must hold a JSON object; every field inside it is optional and leniently
/// typed (see [`RawRecord`]). Files over the metadata size limit are rejected before
/// they are read.
pub fn parse_metadata_file(path: &Path) -> Result<RawRecord, ScanError> {
    let mut file =
        File::open(path).map_err(|source| ScanError::Read { path: path.to_path_buf(), source })?;
    validate_file_size(&file, path)?;

    let mut content = String::new();
    file.read_to_string(&mut content)
        .map_err(|source| ScanError::Read { path: path.to_path_buf(), source })?;

    parse_metadata_str(&content, path)
}

/// Parse metadata text; `path` is only used for error reporting
pub fn parse_metadata_str(content: &str, path: &Path) -> Result<RawRecord, ScanError> {
    let value: Value = serde_json::from_str(content)
        .map_err(|source| ScanError::Parse { path: path.to_path_buf(), source })?;

    if !value.is_object() {
        return Err(ScanError::NotAnObject { path: path.to_path_buf() });
    }

    serde_json::from_value(value)
        .map_err(|source| ScanError::Parse { path: path.to_path_buf(), source })
}
