//! Data models for the codelab catalog.
//!
//! - [`CatalogEntry`] - One normalized codelab, as stored in `codelabs.json`
//! - [`RawRecord`] - A metadata record before defaults are applied
//! - [`FacetGroup`] - The filterable facets: categories, tags and authors
//!
//! Field leniency (scalar-or-list facets, numeric strings, empty values) lives in
//! `parsers::deserializers` and is shared by the indexer and the catalog loader.

pub mod entry;
pub mod facet;
pub mod record;

pub use entry::{CatalogEntry, DEFAULT_STATUS, DEFAULT_TITLE};
pub use facet::FacetGroup;
pub use record::RawRecord;
