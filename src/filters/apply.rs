use super::selection::FacetSelections;
use crate::models::{CatalogEntry, FacetGroup};

/// Keep the entries matching both the search query and the facet selections
///
/// `query` is expected to be lowercased already; an empty query matches everything.
/// The result keeps catalog order.
pub fn filter_entries<'a>(
    entries: &'a [CatalogEntry],
    query: &str,
    selections: &FacetSelections,
) -> Vec<&'a CatalogEntry> {
    entries.iter().filter(|entry| matches(entry, query, selections)).collect()
}

/// Search AND every facet group
pub fn matches(entry: &CatalogEntry, query: &str, selections: &FacetSelections) -> bool {
    matches_search(entry, query) && matches_facets(entry, selections)
}

/// Case-insensitive substring match over title, summary and facet values
pub fn matches_search(entry: &CatalogEntry, query: &str) -> bool {
    query.is_empty() || entry.search_text().contains(query)
}

/// Every group with a selection must share at least one value with the entry
///
/// - Same-group OR: tag:go tag:rust → (go OR rust)
/// - Cross-group AND: category:Web tag:go → (Web AND go)
pub fn matches_facets(entry: &CatalogEntry, selections: &FacetSelections) -> bool {
    FacetGroup::ALL.iter().all(|group| matches_group(entry, selections, *group))
}

fn matches_group(entry: &CatalogEntry, selections: &FacetSelections, group: FacetGroup) -> bool {
    let selected = selections.selected(group);
    selected.is_empty() || entry.facet_values(group).iter().any(|value| selected.contains(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_entry(
        title: &str,
        categories: &[&str],
        tags: &[&str],
        authors: &[&str],
    ) -> CatalogEntry {
        serde_json::from_value(serde_json::json!({
            "id": title.to_lowercase(),
            "title": title,
            "summary": format!("Learn {}", title),
            "categories": categories,
            "tags": tags,
            "authors": authors,
        }))
        .unwrap()
    }

    #[test]
    fn test_empty_state_matches_everything() {
        let entries = vec![
            create_test_entry("Go", &[], &[], &[]),
            create_test_entry("Rust", &["Systems"], &[], &[]),
        ];
        assert_eq!(filter_entries(&entries, "", &FacetSelections::new()).len(), 2);
    }

    #[test]
    fn test_search_is_substring_over_all_fields() {
        let entry = create_test_entry("Kubernetes", &["Cloud"], &["k8s"], &["Grace Hopper"]);
        assert!(matches_search(&entry, "kube"));
        assert!(matches_search(&entry, "learn kubernetes"));
        assert!(matches_search(&entry, "cloud"));
        assert!(matches_search(&entry, "k8s"));
        assert!(matches_search(&entry, "grace hopper"));
        assert!(!matches_search(&entry, "docker"));
    }

    #[test]
    fn test_search_spans_field_boundaries() {
        let entry = create_test_entry("Docker", &["Cloud"], &[], &[]);
        // Fields are joined with spaces before matching
        assert!(matches_search(&entry, "docker cloud"));
    }

    #[test]
    fn test_or_within_group() {
        let entry = create_test_entry("Lab", &[], &["go"], &[]);
        let mut selections = FacetSelections::new();
        selections.select(FacetGroup::Tags, "rust");
        assert!(!matches_facets(&entry, &selections));

        selections.select(FacetGroup::Tags, "go");
        assert!(matches_facets(&entry, &selections));
    }

    #[test]
    fn test_and_across_groups() {
        let entry = create_test_entry("Lab", &["Web"], &["go"], &["Ada"]);
        let mut selections = FacetSelections::new();
        selections.select(FacetGroup::Categories, "Web");
        selections.select(FacetGroup::Tags, "go");
        assert!(matches_facets(&entry, &selections));

        selections.select(FacetGroup::Authors, "Grace");
        assert!(!matches_facets(&entry, &selections));
    }

    #[test]
    fn test_empty_field_never_matches_active_group() {
        let entry = create_test_entry("Lab", &[], &["go"], &[]);
        let mut selections = FacetSelections::new();
        selections.select(FacetGroup::Categories, "Web");
        assert!(!matches_facets(&entry, &selections));
    }

    #[test]
    fn test_facet_values_are_case_sensitive() {
        let entry = create_test_entry("Lab", &["Web"], &[], &[]);
        let mut selections = FacetSelections::new();
        selections.select(FacetGroup::Categories, "web");
        assert!(!matches_facets(&entry, &selections));
    }

    #[test]
    fn test_search_and_facets_combine() {
        let entries = vec![
            create_test_entry("Go Basics", &["Backend"], &["go"], &[]),
            create_test_entry("Go Web", &["Web"], &["go"], &[]),
            create_test_entry("Rust Web", &["Web"], &["rust"], &[]),
        ];
        let mut selections = FacetSelections::new();
        selections.select(FacetGroup::Categories, "Web");

        let filtered = filter_entries(&entries, "go", &selections);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].title, "Go Web");
    }
}
