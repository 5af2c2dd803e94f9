//! Matching against obfuscated, build-generated class names.
//!
//! Matching is done token by token over the element's parsed class list, so a
//! fragment can never match across two neighbouring class names.

use scraper::ElementRef;

/// `true` when any class token contains any of `fragments`.
pub(crate) fn tokens_match<'t, I>(tokens: I, fragments: &[&str]) -> bool
where
    I: IntoIterator<Item = &'t str>,
{
    tokens
        .into_iter()
        .any(|token| fragments.iter().any(|fragment| token.contains(fragment)))
}

pub(crate) fn has_class_fragment(element: ElementRef<'_>, fragments: &[&str]) -> bool {
    tokens_match(element.value().classes(), fragments)
}
