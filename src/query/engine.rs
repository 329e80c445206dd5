//! Query engine: filtered, sorted and paginated views over a loaded catalog.
//!
//! The core is [`recompute`], a pure function from catalog + [`QueryState`] to a
//! [`ViewResult`]. [`QueryEngine`] wraps it with the stateful surface a UI needs:
//! setters that reset the page when the filter criteria change, guarded page
//! navigation, and the facet option lists.
//!
//! # Empty results
//!
//! When the criteria match nothing in a non-empty catalog, the view falls back to the
//! whole catalog (in catalog order) and sets [`ViewResult::fallback`]. Callers that want
//! to tell "nothing matched" apart from "no filters" should check that flag or
//! [`ViewResult::filtered_count`].

use std::path::Path;

use log::error;
use serde::Serialize;

use super::facets::FacetOptions;
use super::pagination::{ITEMS_PER_PAGE, PageToken, display_total_pages, page_range, page_tokens};
use super::sort::{SortKey, sort_entries};
use super::state::QueryState;
use crate::filters::{FilterChip, filter_entries};
use crate::index_storage::load_catalog;
use crate::models::{CatalogEntry, FacetGroup};

/// One computed page of results
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewResult<'a> {
    /// Entries on the current page
    pub page_entries: Vec<&'a CatalogEntry>,
    /// Size of the displayed set (the whole catalog when `fallback` is set)
    pub total_results: usize,
    /// Entries that actually matched the criteria
    pub filtered_count: usize,
    /// At least 1, even for an empty catalog
    pub total_pages: usize,
    pub current_page: usize,
    pub page_tokens: Vec<PageToken>,
    pub chips: Vec<FilterChip>,
    /// Nothing matched, so the whole catalog is displayed instead
    pub fallback: bool,
}

/// Compute the view for `state` over `entries`
///
/// Filter (search AND facet groups), stable sort, then slice out the current page.
/// Idempotent: the same inputs always give the same view.
pub fn recompute<'a>(entries: &'a [CatalogEntry], state: &QueryState) -> ViewResult<'a> {
    let mut filtered = filter_entries(entries, &state.search_query, &state.selections);
    sort_entries(&mut filtered, &state.sort);
    let filtered_count = filtered.len();

    let fallback = filtered.is_empty() && !entries.is_empty();
    let displayed: Vec<&CatalogEntry> = if fallback { entries.iter().collect() } else { filtered };

    let total_results = displayed.len();
    let total_pages = display_total_pages(total_results, ITEMS_PER_PAGE);
    let range = page_range(state.current_page, ITEMS_PER_PAGE, total_results);
    let page_entries = displayed[range].to_vec();

    ViewResult {
        page_entries,
        total_results,
        filtered_count,
        total_pages,
        current_page: state.current_page,
        page_tokens: page_tokens(state.current_page, total_pages),
        chips: state.selections.chips(),
        fallback,
    }
}

/// A loaded catalog plus the user's current query
#[derive(Debug, Clone, Default)]
pub struct QueryEngine {
    entries: Vec<CatalogEntry>,
    options: FacetOptions,
    state: QueryState,
    load_error: Option<String>,
}

impl QueryEngine {
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        let options = FacetOptions::from_entries(&entries);
        Self { entries, options, state: QueryState::default(), load_error: None }
    }

    /// Load a catalog file; failures leave an empty catalog and a user-facing error
    pub fn load(path: &Path) -> Self {
        match load_catalog(path) {
            Ok(entries) => Self::new(entries),
            Err(e) => {
                error!("Error loading codelabs: {}", e);
                Self {
                    load_error: Some(format!(
                        "Failed to load codelabs. Make sure {} exists and is valid JSON.",
                        path.display()
                    )),
                    ..Self::default()
                }
            }
        }
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn options(&self) -> &FacetOptions {
        &self.options
    }

    pub fn state(&self) -> &QueryState {
        &self.state
    }

    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    pub fn view(&self) -> ViewResult<'_> {
        recompute(&self.entries, &self.state)
    }

    pub fn total_pages(&self) -> usize {
        self.view().total_pages
    }

    pub fn set_search(&mut self, text: &str) {
        self.state.search_query = text.to_lowercase();
        self.reset_page();
    }

    /// Change the ordering; keeps the current page
    pub fn set_sort(&mut self, key: impl Into<SortKey>) {
        self.state.sort = key.into();
    }

    pub fn select(&mut self, group: FacetGroup, value: &str) {
        self.state.selections.select(group, value);
        self.reset_page();
    }

    pub fn deselect(&mut self, group: FacetGroup, value: &str) {
        self.state.selections.deselect(group, value);
        self.reset_page();
    }

    pub fn toggle(&mut self, group: FacetGroup, value: &str) {
        self.state.selections.toggle(group, value);
        self.reset_page();
    }

    pub fn clear_group(&mut self, group: FacetGroup) {
        self.state.selections.clear(group);
        self.reset_page();
    }

    /// Clear every facet selection and the search text
    pub fn reset_all(&mut self) {
        self.state.selections.clear_all();
        self.state.search_query.clear();
        self.reset_page();
    }

    pub fn remove_chip(&mut self, chip: &FilterChip) {
        self.state.selections.remove_chip(chip);
        self.reset_page();
    }

    /// Jump to a page; out-of-range requests are ignored and return false
    pub fn go_to_page(&mut self, page: usize) -> bool {
        if page == 0 || page > self.total_pages() {
            return false;
        }
        self.state.current_page = page;
        true
    }

    pub fn next_page(&mut self) -> bool {
        self.go_to_page(self.state.current_page + 1)
    }

    pub fn prev_page(&mut self) -> bool {
        match self.state.current_page.checked_sub(1) {
            Some(page) => self.go_to_page(page),
            None => false,
        }
    }

    fn reset_page(&mut self) {
        self.state.current_page = 1;
    }
}
