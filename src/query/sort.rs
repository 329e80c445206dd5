use std::cmp::Reverse;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::models::CatalogEntry;
use crate::utils::{locale_cmp, updated_millis};

/// Result ordering
///
/// Parsed from the catalog UI's sort keys (`title-asc`, `updated-desc`, ...). Any other
/// key is kept as [`SortKey::Unknown`] and leaves the order untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum SortKey {
    #[default]
    TitleAsc,
    TitleDesc,
    UpdatedDesc,
    UpdatedAsc,
    DurationAsc,
    DurationDesc,
    Unknown(String),
}

impl SortKey {
    /// Every key the catalog UI offers
    pub const KNOWN: [SortKey; 6] = [
        SortKey::TitleAsc,
        SortKey::TitleDesc,
        SortKey::UpdatedDesc,
        SortKey::UpdatedAsc,
        SortKey::DurationAsc,
        SortKey::DurationDesc,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            SortKey::TitleAsc => "title-asc",
            SortKey::TitleDesc => "title-desc",
            SortKey::UpdatedDesc => "updated-desc",
            SortKey::UpdatedAsc => "updated-asc",
            SortKey::DurationAsc => "duration-asc",
            SortKey::DurationDesc => "duration-desc",
            SortKey::Unknown(key) => key,
        }
    }
}

impl From<&str> for SortKey {
    fn from(key: &str) -> Self {
        match key {
            "title-asc" => SortKey::TitleAsc,
            "title-desc" => SortKey::TitleDesc,
            "updated-desc" => SortKey::UpdatedDesc,
            "updated-asc" => SortKey::UpdatedAsc,
            "duration-asc" => SortKey::DurationAsc,
            "duration-desc" => SortKey::DurationDesc,
            other => SortKey::Unknown(other.to_string()),
        }
    }
}

impl FromStr for SortKey {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(SortKey::from(s))
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for SortKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for SortKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let key = String::deserialize(deserializer)?;
        Ok(SortKey::from(key.as_str()))
    }
}

/// Stable sort of entries by `key`
///
/// Unparsable `updated` dates sort as the epoch; unknown keys keep the current order.
pub fn sort_entries(entries: &mut [&CatalogEntry], key: &SortKey) {
    match key {
        SortKey::TitleAsc => entries.sort_by(|a, b| locale_cmp(&a.title, &b.title)),
        SortKey::TitleDesc => entries.sort_by(|a, b| locale_cmp(&b.title, &a.title)),
        SortKey::UpdatedDesc => {
            entries.sort_by_cached_key(|entry| Reverse(updated_millis(&entry.updated)))
        }
        SortKey::UpdatedAsc => entries.sort_by_cached_key(|entry| updated_millis(&entry.updated)),
        SortKey::DurationAsc => entries.sort_by_key(|entry| entry.duration),
        SortKey::DurationDesc => entries.sort_by_key(|entry| Reverse(entry.duration)),
        SortKey::Unknown(_) => {}
    }
}
