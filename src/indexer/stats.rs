use std::collections::HashSet;

use serde::Serialize;

use crate::models::{CatalogEntry, FacetGroup};

/// Summary counts for a catalog
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CatalogStats {
    pub entries: usize,
    pub categories: usize,
    pub tags: usize,
    pub authors: usize,
}

impl CatalogStats {
    pub fn from_entries(entries: &[CatalogEntry]) -> Self {
        let distinct = |group: FacetGroup| {
            entries
                .iter()
                .flat_map(|entry| entry.facet_values(group))
                .filter(|value| !value.is_empty())
                .collect::<HashSet<_>>()
                .len()
        };

        Self {
            entries: entries.len(),
            categories: distinct(FacetGroup::Categories),
            tags: distinct(FacetGroup::Tags),
            authors: distinct(FacetGroup::Authors),
        }
    }
}
