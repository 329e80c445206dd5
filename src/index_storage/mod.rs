//! Catalog artifact storage
//!
//! The catalog is a single pretty-printed JSON array (`codelabs.json`) of
//! [`CatalogEntry`](crate::models::CatalogEntry) objects. Writes go through a temp file
//! and a rename so readers never observe a partial catalog.

pub mod persistence;

pub use persistence::{CATALOG_FILENAME, load_catalog, write_catalog};
