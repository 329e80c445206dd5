use std::fmt;
use std::str::FromStr;

use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};

/// A filterable facet of a catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FacetGroup {
    Categories,
    Tags,
    Authors,
}

impl FacetGroup {
    /// All groups, in the order active filter chips are listed
    pub const ALL: [FacetGroup; 3] =
        [FacetGroup::Categories, FacetGroup::Tags, FacetGroup::Authors];

    pub fn as_str(self) -> &'static str {
        match self {
            FacetGroup::Categories => "categories",
            FacetGroup::Tags => "tags",
            FacetGroup::Authors => "authors",
        }
    }

    pub fn singular(self) -> &'static str {
        match self {
            FacetGroup::Categories => "category",
            FacetGroup::Tags => "tag",
            FacetGroup::Authors => "author",
        }
    }
}

impl fmt::Display for FacetGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FacetGroup {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "categories" | "category" => Ok(FacetGroup::Categories),
            "tags" | "tag" => Ok(FacetGroup::Tags),
            "authors" | "author" => Ok(FacetGroup::Authors),
            _ => Err(anyhow!("Unknown facet group: '{}' (valid: category, tag, author)", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plural_and_singular() {
        assert_eq!("categories".parse::<FacetGroup>().unwrap(), FacetGroup::Categories);
        assert_eq!("Tag".parse::<FacetGroup>().unwrap(), FacetGroup::Tags);
        assert_eq!("AUTHOR".parse::<FacetGroup>().unwrap(), FacetGroup::Authors);
    }

    #[test]
    fn test_parse_unknown() {
        let err = "status".parse::<FacetGroup>().unwrap_err();
        assert!(err.to_string().contains("Unknown facet group"));
    }

    #[test]
    fn test_chip_order() {
        let names: Vec<&str> = FacetGroup::ALL.iter().map(|g| g.as_str()).collect();
        assert_eq!(names, vec!["categories", "tags", "authors"]);
    }
}
