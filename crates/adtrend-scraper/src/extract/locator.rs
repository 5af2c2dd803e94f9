//! Ordered fallback locators for card fields.

use scraper::ElementRef;

use super::classes::has_class_fragment;

/// One way of finding a field's element inside an ad card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Locator {
    /// First element with this tag name.
    Tag(&'static str),
    /// First element with this tag name whose class tokens contain `fragment`.
    ClassFragment {
        tag: &'static str,
        fragment: &'static str,
    },
    /// First anchor whose text contains the phrase.
    AnchorText(&'static str),
}

impl Locator {
    fn matches(self, element: ElementRef<'_>) -> bool {
        let value = element.value();
        match self {
            Locator::Tag(tag) => value.name() == tag,
            Locator::ClassFragment { tag, fragment } => {
                value.name() == tag && has_class_fragment(element, &[fragment])
            }
            Locator::AnchorText(phrase) => {
                value.name() == "a" && element.text().collect::<String>().contains(phrase)
            }
        }
    }

    /// First matching descendant of `scope`, in document order. `scope`
    /// itself is never a candidate.
    pub(crate) fn find<'a>(self, scope: ElementRef<'a>) -> Option<ElementRef<'a>> {
        scope
            .descendants()
            .skip(1)
            .filter_map(ElementRef::wrap)
            .find(|element| self.matches(*element))
    }
}

/// Tries each locator in order and returns the first non-empty value `read`
/// produces from the located element.
pub(crate) fn first_value<'a, F>(
    scope: ElementRef<'a>,
    locators: &[Locator],
    read: F,
) -> Option<String>
where
    F: Fn(ElementRef<'a>) -> Option<String>,
{
    locators.iter().find_map(|locator| {
        locator
            .find(scope)
            .and_then(&read)
            .filter(|value| !value.is_empty())
    })
}

/// Text of every descendant text node, each trimmed, concatenated.
pub(crate) fn stripped_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect()
}

pub(crate) fn attr(element: ElementRef<'_>, name: &str) -> Option<String> {
    element
        .value()
        .attr(name)
        .map(|value| value.trim().to_owned())
}
