use crate::models::CatalogEntry;

/// "45 min", "1h", "1h 30m"; empty for an unknown (0) duration
pub fn format_duration(minutes: u64) -> String {
    if minutes == 0 {
        return String::new();
    }
    if minutes < 60 {
        return format!("{} min", minutes);
    }

    let hours = minutes / 60;
    let mins = minutes % 60;
    if mins > 0 { format!("{}h {}m", hours, mins) } else { format!("{}h", hours) }
}

/// Result count label: "No codelabs", "1 codelab", "12 codelabs"
pub fn results_label(count: usize) -> String {
    match count {
        0 => "No codelabs".to_string(),
        1 => "1 codelab".to_string(),
        n => format!("{} codelabs", n),
    }
}

/// URL-safe identifier for a facet value: "Machine Learning!" → "machine-learning"
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_dash = false;

    for ch in text.to_lowercase().chars() {
        if ch.is_whitespace() || ch == '-' {
            pending_dash = true;
        } else if ch.is_ascii_alphanumeric() || ch == '_' {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(ch);
        }
    }

    slug
}

/// Material icon name for a codelab card, guessed from its categories and tags
pub fn pick_icon(entry: &CatalogEntry) -> &'static str {
    const RULES: [(&[&str], &str); 7] = [
        (&["web", "html", "css"], "web"),
        (&["cloud", "kubernetes"], "cloud"),
        (&["data", "analytics"], "analytics"),
        (&["security"], "security"),
        (&["mobile", "android", "ios"], "phone_iphone"),
        (&["ai", "ml", "machine"], "psychology"),
        (&["docker", "container"], "deployed_code"),
    ];

    let haystack = entry
        .categories
        .iter()
        .chain(&entry.tags)
        .map(|value| value.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ");

    RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|keyword| haystack.contains(keyword)))
        .map(|(_, icon)| *icon)
        .unwrap_or("code")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(categories: &[&str], tags: &[&str]) -> CatalogEntry {
        serde_json::from_value(serde_json::json!({ "categories": categories, "tags": tags }))
            .unwrap()
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(0), "");
        assert_eq!(format_duration(45), "45 min");
        assert_eq!(format_duration(60), "1h");
        assert_eq!(format_duration(90), "1h 30m");
        assert_eq!(format_duration(125), "2h 5m");
    }

    #[test]
    fn test_results_label() {
        assert_eq!(results_label(0), "No codelabs");
        assert_eq!(results_label(1), "1 codelab");
        assert_eq!(results_label(12), "12 codelabs");
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Machine Learning"), "machine-learning");
        assert_eq!(slugify("  C++ & Rust  "), "c-rust");
        assert_eq!(slugify("already-a--slug"), "already-a-slug");
        assert_eq!(slugify("snake_case"), "snake_case");
        assert_eq!(slugify("---"), "");
    }

    #[test]
    fn test_pick_icon() {
        assert_eq!(pick_icon(&entry(&["Web"], &[])), "web");
        assert_eq!(pick_icon(&entry(&[], &["Kubernetes"])), "cloud");
        assert_eq!(pick_icon(&entry(&["Android"], &[])), "phone_iphone");
        assert_eq!(pick_icon(&entry(&["Docker"], &[])), "deployed_code");
        assert_eq!(pick_icon(&entry(&["Rust"], &["systems"])), "code");
    }

    #[test]
    fn test_pick_icon_first_rule_wins() {
        // "cloud" rule is checked before "docker"
        assert_eq!(pick_icon(&entry(&["Cloud"], &["docker"])), "cloud");
    }
}
