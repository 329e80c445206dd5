//! Parsers for codelab metadata files
//!
//! # Error Handling Strategy
//!
//! Parsing is strict about the envelope and lenient about the content:
//!
//! - **Envelope failures**: An unreadable file, a file over the size limit, invalid JSON
//!   or a top-level value that is not an object produce a [`ScanError`](crate::error::ScanError).
//!   The indexer logs it and skips that one directory.
//!
//! - **Field leniency**: Inside a valid object no field can fail the record. Wrong types
//!   and empty values fall back to the catalog defaults via the `deserializers` module.

pub mod deserializers;
pub mod metadata;

pub use metadata::{parse_metadata_file, parse_metadata_str};
