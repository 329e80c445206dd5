use chrono::{DateTime, Utc};

use crate::utils::parse_updated;

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Format an `updated` date for a codelab card, relative to `now`:
/// - "Today", "Yesterday", "3 days ago" within a week
/// - "1 week ago", "2 weeks ago" within a month
/// - "Mar 5, 2024" beyond that
///
/// Missing or unparsable dates give an empty string.
pub fn format_updated(updated: &str, now: DateTime<Utc>) -> String {
    match parse_updated(updated) {
        Some(date) => format_relative_days(&date, &now),
        None => String::new(),
    }
}

fn format_relative_days(date: &DateTime<Utc>, now: &DateTime<Utc>) -> String {
    let millis = now.signed_duration_since(*date).num_milliseconds().abs();
    // Partial days round up
    let days = (millis + MILLIS_PER_DAY - 1) / MILLIS_PER_DAY;

    match days {
        0 => "Today".to_string(),
        1 => "Yesterday".to_string(),
        2..=6 => format!("{} days ago", days),
        7..=13 => "1 week ago".to_string(),
        14..=29 => format!("{} weeks ago", days / 7),
        _ => date.format("%b %-d, %Y").to_string(),
    }
}
