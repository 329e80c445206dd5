pub mod engine;
pub mod facets;
pub mod pagination;
pub mod sort;
pub mod state;

pub use engine::{QueryEngine, ViewResult, recompute};
pub use facets::FacetOptions;
pub use pagination::{ITEMS_PER_PAGE, PageToken, page_tokens};
pub use sort::{SortKey, sort_entries};
pub use state::QueryState;
