//! Board filter: title search and category selection.

use domain_events::Event;
use domain_packages::Category;

/// Shows an event when its title contains `search` (ignoring case) and,
/// if a category is selected, the event is in that category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardFilter {
    pub search: String,
    pub category: Option<Category>,
}

impl BoardFilter {
    pub fn new(search: impl Into<String>, category: Option<Category>) -> Self {
        Self {
            search: search.into(),
            category,
        }
    }

    pub fn matches(&self, event: &Event) -> bool {
        let title_matches = event
            .title
            .to_lowercase()
            .contains(&self.search.to_lowercase());
        let category_matches = self.category.is_none() || event.category == self.category;

        title_matches && category_matches
    }

    /// Matching events, in their original order
    pub fn apply<'a>(&self, events: &'a [Event]) -> Vec<&'a Event> {
        events.iter().filter(|event| self.matches(event)).collect()
    }
}
