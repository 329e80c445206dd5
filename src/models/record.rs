use serde::Deserialize;

use super::entry::{CatalogEntry, DEFAULT_STATUS, DEFAULT_TITLE};
use crate::parsers::deserializers::{deserialize_minutes, deserialize_string_list, deserialize_text};

/// A codelab record exactly as it was written, before defaults are applied
///
/// Used both for `codelab.json` metadata files and for elements of a built catalog,
/// so a hand-edited catalog is normalized the same way the indexer normalizes input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawRecord {
    #[serde(default, deserialize_with = "deserialize_text")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub summary: Option<String>,
    #[serde(default, deserialize_with = "deserialize_string_list")]
    pub categories: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_string_list")]
    pub tags: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_minutes")]
    pub duration: u64,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub updated: Option<String>,
    #[serde(default, deserialize_with = "deserialize_string_list")]
    pub authors: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub source: Option<String>,
}

impl RawRecord {
    /// Apply catalog defaults, using `fallback_id` when the record has no id
    pub fn into_entry(self, fallback_id: &str, url: String) -> CatalogEntry {
        CatalogEntry {
            id: self.id.unwrap_or_else(|| fallback_id.to_string()),
            title: self.title.unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            summary: self.summary.unwrap_or_default(),
            categories: self.categories,
            tags: self.tags,
            duration: self.duration,
            updated: self.updated.unwrap_or_default(),
            authors: self.authors,
            status: self.status.unwrap_or_else(|| DEFAULT_STATUS.to_string()),
            url,
            source: self.source.unwrap_or_default(),
        }
    }
}

impl From<RawRecord> for CatalogEntry {
    fn from(mut record: RawRecord) -> Self {
        let url = record.url.take().unwrap_or_default();
        record.into_entry("", url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_get_defaults() {
        let record: RawRecord = serde_json::from_str(r#"{"title":"Intro to Go"}"#).unwrap();
        let entry = record.into_entry("intro-go", "go/intro/index.html".to_string());

        assert_eq!(entry.id, "intro-go");
        assert_eq!(entry.title, "Intro to Go");
        assert_eq!(entry.summary, "");
        assert_eq!(entry.duration, 0);
        assert_eq!(entry.updated, "");
        assert!(entry.authors.is_empty());
        assert!(entry.categories.is_empty());
        assert!(entry.tags.is_empty());
        assert_eq!(entry.status, "draft");
        assert_eq!(entry.url, "go/intro/index.html");
        assert_eq!(entry.source, "");
    }

    #[test]
    fn test_empty_title_falls_back() {
        let record: RawRecord = serde_json::from_str(r#"{"title":"","status":""}"#).unwrap();
        let entry = record.into_entry("lab", String::new());
        assert_eq!(entry.title, "Untitled");
        assert_eq!(entry.status, "draft");
    }

    #[test]
    fn test_explicit_id_wins_over_directory() {
        let record: RawRecord = serde_json::from_str(r#"{"id":"custom"}"#).unwrap();
        assert_eq!(record.into_entry("dir-name", String::new()).id, "custom");
    }

    #[test]
    fn test_scalar_facets_become_lists() {
        let record: RawRecord =
            serde_json::from_str(r#"{"categories":"Web","tags":"html","authors":"Ada"}"#).unwrap();
        let entry = record.into_entry("lab", String::new());
        assert_eq!(entry.categories, vec!["Web"]);
        assert_eq!(entry.tags, vec!["html"]);
        assert_eq!(entry.authors, vec!["Ada"]);
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let record: RawRecord =
            serde_json::from_str(r#"{"title":"Lab","feedback_link":"https://x"}"#).unwrap();
        assert_eq!(record.title.as_deref(), Some("Lab"));
    }

    #[test]
    fn test_from_record_keeps_url() {
        let record: RawRecord =
            serde_json::from_str(r#"{"id":"a","url":"a/index.html"}"#).unwrap();
        let entry = CatalogEntry::from(record);
        assert_eq!(entry.url, "a/index.html");
        assert_eq!(entry.id, "a");
    }
}
