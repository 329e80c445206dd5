use super::sort::SortKey;
use crate::filters::FacetSelections;
use crate::models::FacetGroup;

/// Everything the user has chosen for the current view
///
/// A plain value: [`recompute`](super::engine::recompute) reads it and never mutates it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryState {
    /// Lowercased substring to search for; empty means no search
    pub search_query: String,
    pub selections: FacetSelections,
    pub sort: SortKey,
    /// 1-based
    pub current_page: usize,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            search_query: String::new(),
            selections: FacetSelections::new(),
            sort: SortKey::default(),
            current_page: 1,
        }
    }
}

impl QueryState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, text: &str) -> Self {
        self.search_query = text.to_lowercase();
        self
    }

    pub fn with_selection(mut self, group: FacetGroup, value: impl Into<String>) -> Self {
        self.selections.select(group, value);
        self
    }

    pub fn with_selections(mut self, selections: FacetSelections) -> Self {
        self.selections = selections;
        self
    }

    pub fn with_sort(mut self, sort: impl Into<SortKey>) -> Self {
        self.sort = sort.into();
        self
    }

    pub fn with_page(mut self, page: usize) -> Self {
        self.current_page = page;
        self
    }

    /// Whether any search text or facet value narrows the view
    pub fn has_criteria(&self) -> bool {
        !self.search_query.is_empty() || !self.selections.is_empty()
    }
}
