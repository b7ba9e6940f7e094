//! Free-text filtering over category collections.

use crate::{Resource, ResourceCategory};

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

impl Resource {
    /// Whether the title or description contains `needle`.
    ///
    /// `needle` must already be lowercase.
    #[must_use]
    pub fn matches(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self
                .description
                .as_deref()
                .is_some_and(|d| d.to_lowercase().contains(needle))
    }
}

/// Keep resources whose title or description contains `term`, ignoring case.
///
/// Categories left without resources are dropped. Declaration order is kept
/// for both categories and resources, and an empty term returns the input
/// unchanged.
#[must_use]
pub fn filter_categories(categories: &[ResourceCategory], term: &str) -> Vec<ResourceCategory> {
    let needle = term.to_lowercase();
    categories
        .iter()
        .filter_map(|category| {
            let resources: Vec<Resource> = category
                .resources
                .iter()
                .filter(|r| r.matches(&needle))
                .cloned()
                .collect();
            if resources.is_empty() {
                return None;
            }
            Some(ResourceCategory {
                title: category.title.clone(),
                icon: category.icon,
                color: category.color,
                resources,
            })
        })
        .collect()
}
