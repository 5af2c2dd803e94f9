//! Per-category fetch → extract sequencing and the run-wide aggregation.
//!
//! Every failure below this boundary is absorbed: a category that cannot be
//! fetched or parsed contributes an empty result and the run moves on.

use std::future::Future;
use std::panic::{catch_unwind, AssertUnwindSafe};

use adtrend_core::{AdRecord, Category, CategoryResult, TrendReport};

use crate::document::RenderedDocument;
use crate::extract::extract_document;

/// Anything that can produce rendered listing markup for a category.
pub trait DocumentSource {
    /// Fetches the listing for `phrase`. Implementations report failure
    /// through [`RenderedDocument::failed`] rather than an error.
    fn fetch(
        &self,
        category: Category,
        phrase: &str,
    ) -> impl Future<Output = RenderedDocument> + Send;
}

/// One category and the search phrase used to query it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryQuery {
    pub category: Category,
    pub phrase: String,
}

impl CategoryQuery {
    #[must_use]
    pub fn new(category: Category, phrase: impl Into<String>) -> Self {
        Self {
            category,
            phrase: phrase.into(),
        }
    }

    /// The query for `category` using its default search phrase.
    #[must_use]
    pub fn for_category(category: Category) -> Self {
        Self::new(category, category.default_search_phrase())
    }

    /// Both configured categories, in processing order.
    #[must_use]
    pub fn defaults() -> Vec<Self> {
        Category::ALL.into_iter().map(Self::for_category).collect()
    }
}

/// Fetches and extracts one category. Never fails: a failed fetch or a
/// panic inside extraction yields an empty result.
pub async fn run_category<S: DocumentSource>(source: &S, query: &CategoryQuery) -> CategoryResult {
    run_category_with(source, query, extract_document).await
}

async fn run_category_with<S, F>(
    source: &S,
    query: &CategoryQuery,
    extract: F,
) -> CategoryResult
where
    S: DocumentSource,
    F: Fn(&RenderedDocument, Category) -> Vec<AdRecord>,
{
    let category = query.category;
    let document = source.fetch(category, &query.phrase).await;
    if !document.is_ok() {
        tracing::warn!(%category, stage = "fetch", "no document; category result is empty");
        return CategoryResult::empty();
    }

    match catch_unwind(AssertUnwindSafe(|| extract(&document, category))) {
        Ok(records) => CategoryResult::new(records),
        Err(panic) => {
            let reason = panic
                .downcast_ref::<&str>()
                .map(|s| (*s).to_string())
                .or_else(|| panic.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown panic".to_string());
            tracing::error!(
                %category,
                stage = "extract",
                reason = %reason,
                "unexpected error parsing document"
            );
            CategoryResult::empty()
        }
    }
}

/// Runs every query one after another and collects the results.
///
/// The report holds an entry for every query, empty when that category
/// failed.
pub async fn collect_trends<S: DocumentSource>(
    source: &S,
    queries: &[CategoryQuery],
) -> TrendReport {
    let mut report = TrendReport::new();
    for query in queries {
        let result = run_category(source, query).await;
        tracing::info!(
            category = %query.category,
            records = result.len(),
            "category complete"
        );
        report.insert(query.category, result);
    }
    report
}

#[cfg(test)]
#[path = "pipeline_test.rs"]
mod tests;
