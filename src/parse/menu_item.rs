use std::{collections::BTreeSet, sync::OnceLock};

use regex::Regex;
use scraper::ElementRef;

use crate::menu::MenuItem;
use crate::parse::remove_excess_whitespace;
use crate::parse::text_from_selection::{element_text, text_excluding};
use crate::static_selector;

/// Splits parenthetical or bracketed markers out of an item name:
/// `"Veggie Bowl (vegan, gluten-free)"` gives `"Veggie Bowl"` and
/// `{"vegan", "gluten-free"}`.
pub fn split_tags(text: &str) -> (String, BTreeSet<String>) {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"\(([^()]*)\)|\[([^\[\]]*)\]").expect("regex should be valid"));

    let tags = re
        .captures_iter(text)
        .filter_map(|caps| caps.get(1).or_else(|| caps.get(2)))
        .flat_map(|group| group.as_str().split([',', '/', ';']))
        .map(normalize_tag)
        .filter(|tag| !tag.is_empty())
        .collect();

    let name = re.replace_all(text, " ");
    let name = remove_excess_whitespace(&name)
        .trim_matches(|c: char| c.is_whitespace() || matches!(c, '-' | '–' | '—' | ':' | ',' | '*'))
        .to_string();
    (name, tags)
}

pub fn normalize_tag(tag: &str) -> String {
    remove_excess_whitespace(tag).to_lowercase()
}

/// Builds an item from text already pulled out of the page. `None` when the
/// name is blank once tags are removed.
pub fn item_from_parts(
    raw_name: &str,
    description: Option<String>,
    tags: impl IntoIterator<Item = String>,
    station: Option<String>,
) -> Option<MenuItem> {
    let (name, inline_tags) = split_tags(raw_name);
    let item = MenuItem::new(name)?
        .with_description(description.map(|d| remove_excess_whitespace(&d).into_owned()))
        .with_tags(inline_tags)
        .with_tags(tags.into_iter().map(|tag| normalize_tag(&tag)))
        .with_station(station.map(|s| remove_excess_whitespace(&s).into_owned()));
    Some(item)
}

/// Tag markers given as their own elements: badges or icon images.
pub fn tag_elements(element: ElementRef<'_>) -> Vec<ElementRef<'_>> {
    static_selector!(TAG_SELECTOR <- ".tag, .diet, .dietary, img[alt]");
    element.select(&TAG_SELECTOR).collect()
}

pub fn tag_text(element: ElementRef<'_>) -> String {
    element
        .value()
        .attr("alt")
        .map_or_else(|| element_text(element), str::to_string)
}

fn related(a: ElementRef<'_>, b: ElementRef<'_>) -> bool {
    a.id() == b.id()
        || a.ancestors().any(|n| n.id() == b.id())
        || b.ancestors().any(|n| n.id() == a.id())
}

/// Reads a generic list entry or item block.
pub fn from_item_element(element: ElementRef<'_>) -> Option<MenuItem> {
    static_selector!(NAME_SELECTOR <- ".name, .item-name, .title, strong, b");
    static_selector!(DESCRIPTION_SELECTOR <- ".description, .item-description, .desc, p, small, em");

    let tags = tag_elements(element);
    let outside_tags = |candidate: &ElementRef<'_>| !tags.iter().any(|tag| related(*candidate, *tag));

    let name_element = element.select(&NAME_SELECTOR).find(outside_tags);
    let description_element = element
        .select(&DESCRIPTION_SELECTOR)
        .filter(outside_tags)
        .find(|desc| name_element.map_or(true, |name| !related(*desc, name)));

    let raw_name = match name_element {
        Some(name) => element_text(name),
        None => {
            let mut excluded = tags.clone();
            excluded.extend(description_element);
            text_excluding(element, &excluded)
        }
    };
    let description = description_element.map(element_text);
    item_from_parts(
        &raw_name,
        description,
        tags.into_iter().map(tag_text),
        None,
    )
}
