use indexmap::IndexSet;
use serde::Serialize;

use crate::models::FacetGroup;

/// One active filter chip: a selected value within a facet group
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterChip {
    pub group: FacetGroup,
    pub value: String,
}

impl FilterChip {
    pub fn new(group: FacetGroup, value: impl Into<String>) -> Self {
        Self { group, value: value.into() }
    }
}

/// Selected values per facet group
///
/// Values within a group are OR'd, groups are AND'd (see
/// [`matches_facets`](super::apply::matches_facets)). Each group remembers insertion
/// order so chips are listed in the order the user picked them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FacetSelections {
    categories: IndexSet<String>,
    tags: IndexSet<String>,
    authors: IndexSet<String>,
}

impl FacetSelections {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self, group: FacetGroup) -> &IndexSet<String> {
        match group {
            FacetGroup::Categories => &self.categories,
            FacetGroup::Tags => &self.tags,
            FacetGroup::Authors => &self.authors,
        }
    }

    fn selected_mut(&mut self, group: FacetGroup) -> &mut IndexSet<String> {
        match group {
            FacetGroup::Categories => &mut self.categories,
            FacetGroup::Tags => &mut self.tags,
            FacetGroup::Authors => &mut self.authors,
        }
    }

    /// Select a value; returns false if it was already selected
    pub fn select(&mut self, group: FacetGroup, value: impl Into<String>) -> bool {
        self.selected_mut(group).insert(value.into())
    }

    /// Deselect a value, keeping the order of the rest; returns false if it was not selected
    pub fn deselect(&mut self, group: FacetGroup, value: &str) -> bool {
        self.selected_mut(group).shift_remove(value)
    }

    /// Flip a value's selection; returns whether it is selected afterwards
    pub fn toggle(&mut self, group: FacetGroup, value: &str) -> bool {
        if self.deselect(group, value) {
            false
        } else {
            self.select(group, value)
        }
    }

    pub fn clear(&mut self, group: FacetGroup) {
        self.selected_mut(group).clear();
    }

    pub fn clear_all(&mut self) {
        for group in FacetGroup::ALL {
            self.clear(group);
        }
    }

    pub fn is_selected(&self, group: FacetGroup, value: &str) -> bool {
        self.selected(group).contains(value)
    }

    pub fn is_empty(&self) -> bool {
        FacetGroup::ALL.iter().all(|group| self.selected(*group).is_empty())
    }

    pub fn len(&self) -> usize {
        FacetGroup::ALL.iter().map(|group| self.selected(*group).len()).sum()
    }

    /// Active filter chips: categories, then tags, then authors, each in selection order
    pub fn chips(&self) -> Vec<FilterChip> {
        FacetGroup::ALL
            .iter()
            .flat_map(|group| {
                self.selected(*group).iter().map(move |value| FilterChip::new(*group, value))
            })
            .collect()
    }

    /// Remove exactly the chip's (group, value) pair
    pub fn remove_chip(&mut self, chip: &FilterChip) -> bool {
        self.deselect(chip.group, &chip.value)
    }
}
