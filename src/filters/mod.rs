pub mod apply;
pub mod parser;
pub mod selection;

pub use apply::{filter_entries, matches, matches_facets, matches_search};
pub use parser::parse_filter;
pub use selection::{FacetSelections, FilterChip};
