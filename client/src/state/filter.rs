//! Search + category filtering over a record list.
//!
//! Filtering is a pure function of the records and the query; views
//! recompute it on every render instead of caching a filtered copy.

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

use serde::{Deserialize, Serialize};

use super::record::Record;

/// Category value that disables category filtering, alongside `""`.
pub const ALL_CATEGORIES: &str = "All";

/// Current search box and category select values for one view.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterQuery {
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub category: String,
}

impl FilterQuery {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.search.is_empty() && category_is_any(&self.category)
    }
}

fn category_is_any(category: &str) -> bool {
    category.is_empty() || category == ALL_CATEGORIES
}

/// Whether `record` satisfies both the search text and the category.
pub fn matches<E: Record>(record: &E, search: &str, category: &str) -> bool {
    let needle = search.to_lowercase();
    let text_ok = needle.is_empty()
        || record
            .search_text()
            .iter()
            .any(|text| text.to_lowercase().contains(&needle));
    text_ok && (category_is_any(category) || record.category() == category)
}

/// Matching records in store order.
pub fn filter<E: Record>(records: &[E], search: &str, category: &str) -> Vec<E> {
    records
        .iter()
        .filter(|record| matches(*record, search, category))
        .cloned()
        .collect()
}
