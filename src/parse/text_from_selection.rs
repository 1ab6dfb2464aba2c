use scraper::{ElementRef, Selector};

use super::remove_excess_whitespace;

/// All text inside `element`, whitespace collapsed.
pub fn element_text(element: ElementRef<'_>) -> String {
    remove_excess_whitespace(&element.text().collect::<String>()).into_owned()
}

/// Collapsed text of the first element under `element` matching `selector`
/// that has any text at all.
pub fn text_from_selection(selector: &Selector, element: ElementRef<'_>) -> Option<String> {
    element
        .select(selector)
        .map(element_text)
        .find(|text| !text.is_empty())
}

/// Like [`element_text`], but skips the text of the `excluded` subtrees.
pub fn text_excluding(element: ElementRef<'_>, excluded: &[ElementRef<'_>]) -> String {
    let text: String = element
        .descendants()
        .filter(|node| {
            !excluded
                .iter()
                .any(|ex| node.id() == ex.id() || node.ancestors().any(|a| a.id() == ex.id()))
        })
        .filter_map(|node| node.value().as_text().map(|t| &**t))
        .collect();
    remove_excess_whitespace(&text).into_owned()
}
