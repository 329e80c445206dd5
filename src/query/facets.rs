use indexmap::IndexSet;
use serde::Serialize;

use crate::models::{CatalogEntry, FacetGroup};
use crate::utils::sort_locale;

/// Distinct values offered for each facet group
///
/// Always computed over the whole catalog, so the option lists stay the same while
/// filters narrow the results and facets can be combined freely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FacetOptions {
    pub categories: Vec<String>,
    pub tags: Vec<String>,
    pub authors: Vec<String>,
}

impl FacetOptions {
    pub fn from_entries(entries: &[CatalogEntry]) -> Self {
        Self {
            categories: distinct_values(entries, FacetGroup::Categories),
            tags: distinct_values(entries, FacetGroup::Tags),
            authors: distinct_values(entries, FacetGroup::Authors),
        }
    }

    pub fn options(&self, group: FacetGroup) -> &[String] {
        match group {
            FacetGroup::Categories => &self.categories,
            FacetGroup::Tags => &self.tags,
            FacetGroup::Authors => &self.authors,
        }
    }
}

fn distinct_values(entries: &[CatalogEntry], group: FacetGroup) -> Vec<String> {
    let distinct: IndexSet<&str> = entries
        .iter()
        .flat_map(|entry| entry.facet_values(group))
        .map(String::as_str)
        .filter(|value| !value.is_empty())
        .collect();

    let mut values: Vec<String> = distinct.into_iter().map(str::to_string).collect();
    sort_locale(&mut values);
    values
}
