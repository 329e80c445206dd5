use serde::{Deserialize, Serialize};

use super::facet::FacetGroup;
use super::record::RawRecord;

pub const DEFAULT_TITLE: &str = "Untitled";
pub const DEFAULT_STATUS: &str = "draft";

/// One codelab in the catalog
///
/// Serialized field order matches the published `codelabs.json` layout. Deserializing
/// goes through [`RawRecord`], so scalar facets, empty strings and odd durations are
/// normalized on the way in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawRecord")]
pub struct CatalogEntry {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub categories: Vec<String>,
    pub tags: Vec<String>,
    /// Minutes; 0 means unknown
    pub duration: u64,
    /// ISO-8601 date or empty
    pub updated: String,
    pub authors: Vec<String>,
    pub status: String,
    pub url: String,
    pub source: String,
}

impl CatalogEntry {
    /// Values this entry carries for a facet group
    pub fn facet_values(&self, group: FacetGroup) -> &[String] {
        match group {
            FacetGroup::Categories => &self.categories,
            FacetGroup::Tags => &self.tags,
            FacetGroup::Authors => &self.authors,
        }
    }

    /// Lowercased title, summary and facet values joined by spaces
    pub fn search_text(&self) -> String {
        let parts = [self.title.as_str(), self.summary.as_str()]
            .into_iter()
            .chain(self.categories.iter().map(String::as_str))
            .chain(self.tags.iter().map(String::as_str))
            .chain(self.authors.iter().map(String::as_str));

        parts.collect::<Vec<_>>().join(" ").to_lowercase()
    }
}
