//! Index building for a tree of codelab directories
//!
//! - [`discover_metadata_dirs`] walks the tree and finds directories with a metadata file
//! - [`Scanner`] reads and normalizes each directory, either lazily
//!   ([`Scanner::entries`]) or as a parallel batch ([`Scanner::build`])
//! - [`CatalogStats`] summarizes a built catalog

pub mod builder;
pub mod discovery;
pub mod stats;

pub use builder::{IndexReport, Scanner, build_index, sort_by_title};
pub use discovery::{METADATA_FILENAME, discover_metadata_dirs};
pub use stats::CatalogStats;
