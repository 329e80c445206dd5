//! Codelab Catalog - Index and browse a directory tree of codelab tutorials
//!
//! This library scans a tree of exported codelabs, each described by a
//! `codelab.json` metadata file, and turns it into a flat, normalized catalog.
//! It supports:
//!
//! - Lenient parsing of per-codelab metadata with sensible defaults
//! - Building a title-sorted catalog and persisting it as `codelabs.json`
//! - Searching, facet filtering, sorting and paginating a loaded catalog
//! - Formatting helpers for durations, relative dates and page lists
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use codelab_catalog::{QueryEngine, build_index};
//! use codelab_catalog::models::FacetGroup;
//!
//! let report = build_index(Path::new("./codelabs"));
//! let mut engine = QueryEngine::new(report.entries);
//! engine.set_search("rust");
//! engine.select(FacetGroup::Categories, "Systems");
//! println!("{} matching codelabs", engine.view().total_results);
//! ```

pub mod cli;
pub mod error;
pub mod filters;
pub mod index_storage;
pub mod indexer;
pub mod models;
pub mod parsers;
pub mod present;
pub mod query;
pub mod utils;

// Re-export commonly used types
pub use error::{CatalogError, ScanError};
pub use index_storage::{load_catalog, write_catalog};
pub use indexer::{IndexReport, build_index};
pub use models::CatalogEntry;
pub use query::{QueryEngine, QueryState, ViewResult, recompute};
