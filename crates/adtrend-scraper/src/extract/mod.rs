//! Ad card extraction from rendered Ad Library markup.
//!
//! The listing's class names are generated at build time and change without
//! notice, so every lookup here is best-effort: a missing container yields no
//! records, a missing field yields a sentinel, and neither is an error.

mod classes;
mod locator;

use adtrend_core::{
    AdRecord, Category, MAX_RESULTS_PER_CATEGORY, SENTINEL, SUMMARY_MAX_CHARS,
    SUMMARY_PLACEHOLDER,
};
use reqwest::Url;
use scraper::{ElementRef, Html};

use crate::document::RenderedDocument;
use classes::has_class_fragment;
use locator::{attr, first_value, stripped_text, Locator};

/// Origin prepended to relative detail links.
pub const AD_LIBRARY_ORIGIN: &str = "https://www.facebook.com";

/// Either fragment marks the element wrapping all ad cards.
const CONTAINER_CLASS_FRAGMENTS: &[&str] = &["_9cb_", "x1t2pt76"];

const BRAND_LOCATORS: &[Locator] = &[
    Locator::ClassFragment {
        tag: "span",
        fragment: "dgpf1xc5",
    },
    Locator::ClassFragment {
        tag: "div",
        fragment: "x1heor9g",
    },
];

const SUMMARY_LOCATORS: &[Locator] = &[
    Locator::ClassFragment {
        tag: "div",
        fragment: "lrazzd5p",
    },
    Locator::ClassFragment {
        tag: "span",
        fragment: "x193iq5w",
    },
];

const IMAGE_LOCATORS: &[Locator] = &[Locator::Tag("img")];

const DETAIL_LINK_LOCATORS: &[Locator] = &[
    Locator::AnchorText("See ad details"),
    Locator::ClassFragment {
        tag: "a",
        fragment: "x1i10hfl",
    },
];

/// Extracts records from a fetched document; failed fetches yield none.
#[must_use]
pub fn extract_document(document: &RenderedDocument, category: Category) -> Vec<AdRecord> {
    if !document.is_ok() {
        return Vec::new();
    }
    extract_ads(document.body(), category)
}

/// Parses rendered listing markup into at most
/// [`MAX_RESULTS_PER_CATEGORY`] records, in document order.
///
/// Cards where neither brand nor summary could be located are dropped.
#[must_use]
pub fn extract_ads(html: &str, category: Category) -> Vec<AdRecord> {
    if html.trim().is_empty() {
        tracing::warn!(%category, "rendered document is empty");
        return Vec::new();
    }

    let document = Html::parse_document(html);
    let Some(container) = find_ad_container(&document) else {
        tracing::info!(
            %category,
            "no ad container found; check the raw snapshot and update selectors"
        );
        return Vec::new();
    };

    let cards: Vec<ElementRef<'_>> = container
        .children()
        .filter_map(ElementRef::wrap)
        .filter(|child| child.value().name() == "div")
        .collect();
    tracing::info!(%category, cards = cards.len(), "found candidate ad cards");

    let records: Vec<AdRecord> = cards
        .into_iter()
        .filter_map(|card| extract_card(card, category))
        .take(MAX_RESULTS_PER_CATEGORY)
        .collect();
    tracing::info!(%category, records = records.len(), "extracted ad records");
    records
}

fn find_ad_container(document: &Html) -> Option<ElementRef<'_>> {
    document
        .root_element()
        .descendants()
        .filter_map(ElementRef::wrap)
        .find(|element| {
            element.value().name() == "div"
                && has_class_fragment(*element, CONTAINER_CLASS_FRAGMENTS)
        })
}

fn extract_card(card: ElementRef<'_>, category: Category) -> Option<AdRecord> {
    let brand = first_value(card, BRAND_LOCATORS, |el| Some(stripped_text(el)));
    let description = first_value(card, SUMMARY_LOCATORS, |el| Some(stripped_text(el)));
    let image_url = first_value(card, IMAGE_LOCATORS, |el| attr(el, "src")).unwrap_or_default();
    let detail_url = first_value(card, DETAIL_LINK_LOCATORS, |el| attr(el, "href"))
        .map_or_else(|| SENTINEL.to_string(), |href| resolve_detail_url(&href));

    let record = AdRecord {
        brand: brand.unwrap_or_else(|| SENTINEL.to_string()),
        category,
        summary: description.map_or_else(
            || SUMMARY_PLACEHOLDER.to_string(),
            |text| summarize(&text),
        ),
        detail_url,
        price: SENTINEL.to_string(),
        image_url,
    };
    record.has_content().then_some(record)
}

/// First [`SUMMARY_MAX_CHARS`] characters followed by `...`.
fn summarize(text: &str) -> String {
    let head: String = text.chars().take(SUMMARY_MAX_CHARS).collect();
    format!("{head}...")
}

/// Links that already carry a scheme are kept verbatim; anything else is
/// prefixed with [`AD_LIBRARY_ORIGIN`] as-is, without path normalisation.
#[must_use]
pub fn resolve_detail_url(href: &str) -> String {
    if Url::parse(href).is_ok() {
        href.to_owned()
    } else {
        format!("{AD_LIBRARY_ORIGIN}{href}")
    }
}

#[cfg(test)]
#[path = "../extract_test.rs"]
mod tests;
