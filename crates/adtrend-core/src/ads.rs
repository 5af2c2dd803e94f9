//! Ad records and the per-category result containers produced by a run.

use std::collections::BTreeMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Placeholder for any field whose locator found nothing.
pub const SENTINEL: &str = "N/A";

/// Stored summary when no description text could be located on a card.
pub const SUMMARY_PLACEHOLDER: &str = "Ad Description";

/// Upper bound on records kept per category, in source relevance order.
pub const MAX_RESULTS_PER_CATEGORY: usize = 15;

/// Number of characters of description text kept in [`AdRecord::summary`].
pub const SUMMARY_MAX_CHARS: usize = 50;

/// Audience segment driving a separate search phrase and result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Men,
    Women,
}

impl Category {
    /// Every configured category, in processing order.
    pub const ALL: [Category; 2] = [Category::Men, Category::Women];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Men => "men",
            Category::Women => "women",
        }
    }

    /// Keyword phrase searched for this category unless overridden.
    #[must_use]
    pub fn default_search_phrase(self) -> &'static str {
        match self {
            Category::Men => "men fashion clothing",
            Category::Women => "women fashion clothing",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("unknown category \"{0}\"; expected one of: men, women")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "men" => Ok(Category::Men),
            "women" => Ok(Category::Women),
            _ => Err(UnknownCategory(s.to_owned())),
        }
    }
}

/// One advertisement extracted from a rendered listing page.
///
/// `brand`, `summary` and `detail_url` hold [`SENTINEL`] (or
/// [`SUMMARY_PLACEHOLDER`] for the summary) when the markup did not expose
/// them. `price` is always the sentinel: the listing markup has no reliable
/// price element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdRecord {
    pub brand: String,
    pub category: Category,
    pub summary: String,
    pub detail_url: String,
    pub price: String,
    /// Empty when the card carried no image.
    pub image_url: String,
}

impl AdRecord {
    /// `true` when at least one of brand or summary was actually located.
    #[must_use]
    pub fn has_content(&self) -> bool {
        self.brand != SENTINEL || self.summary != SUMMARY_PLACEHOLDER
    }
}

/// Ordered records for one category, never longer than
/// [`MAX_RESULTS_PER_CATEGORY`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CategoryResult {
    records: Vec<AdRecord>,
}

impl CategoryResult {
    /// Keeps the first [`MAX_RESULTS_PER_CATEGORY`] records, preserving order.
    #[must_use]
    pub fn new(mut records: Vec<AdRecord>) -> Self {
        records.truncate(MAX_RESULTS_PER_CATEGORY);
        Self { records }
    }

    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AdRecord> {
        self.records.iter()
    }

    #[must_use]
    pub fn records(&self) -> &[AdRecord] {
        &self.records
    }
}

impl<'a> IntoIterator for &'a CategoryResult {
    type Item = &'a AdRecord;
    type IntoIter = std::slice::Iter<'a, AdRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Final result set of a run, keyed by category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TrendReport {
    categories: BTreeMap<Category, CategoryResult>,
}

impl TrendReport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the result for `category`, replacing any earlier entry.
    pub fn insert(&mut self, category: Category, result: CategoryResult) {
        self.categories.insert(category, result);
    }

    #[must_use]
    pub fn get(&self, category: Category) -> Option<&CategoryResult> {
        self.categories.get(&category)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, &CategoryResult)> {
        self.categories
            .iter()
            .map(|(category, result)| (*category, result))
    }

    #[must_use]
    pub fn total_records(&self) -> usize {
        self.categories.values().map(CategoryResult::len).sum()
    }
}

#[cfg(test)]
#[path = "ads_test.rs"]
mod tests;
