use std::{fmt::Display, str::FromStr};

use chrono::Weekday;
use scraper::{ElementRef, Html};

use super::menu_item::{from_item_element, item_from_parts, tag_elements, tag_text};
use super::noise::is_menu_item;
use super::text_from_selection::{element_text, text_from_selection};
use super::weekday::{leading_weekday, only_weekday};
use super::Error;
use crate::menu::DayMenu;
use crate::static_selector;

static_selector!(HEADING_SELECTOR <- "h1, h2, h3, h4, h5, h6");

/// How day sections are found on a menu page. Each variant knows one page
/// structure; supporting a new café page means adding a variant here.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Layout {
    /// Runs [`Layout::Headings`] and [`Layout::Containers`] and keeps the one
    /// that puts items under more days; ties go to headings.
    #[default]
    Auto,
    /// A heading naming a weekday, followed by that day's items up to the
    /// next heading of the same or higher rank.
    Headings,
    /// An element whose `id`, class or `data-day` names a weekday and holds
    /// that day's items.
    Containers,
    /// A Bon Appétit café page for a single date; the day's items are the
    /// entries of the lunch daypart.
    Daypart,
}

impl Layout {
    /// Finds the day sections of `document`. `page_day` is the day a
    /// single-date page covers; weekly layouts ignore it.
    pub fn locate(self, document: &Html, page_day: Option<Weekday>) -> Vec<DayMenu> {
        let days = match self {
            Self::Auto => {
                let headings = Self::Headings.locate(document, page_day);
                let containers = Self::Containers.locate(document, page_day);
                if headings.is_empty()
                    || days_with_items(&containers) > days_with_items(&headings)
                {
                    containers
                } else {
                    headings
                }
            }
            Self::Headings => by_headings(document),
            Self::Containers => by_containers(document),
            Self::Daypart => page_day
                .and_then(|day| by_daypart(document, day))
                .into_iter()
                .collect(),
        };
        log::debug!("{self} layout located {} day sections", days.len());
        days
    }
}

impl FromStr for Layout {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "auto" => Ok(Self::Auto),
            "headings" => Ok(Self::Headings),
            "containers" => Ok(Self::Containers),
            "daypart" => Ok(Self::Daypart),
            _ => Err(Error::unknown_layout(s)),
        }
    }
}

impl Display for Layout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Auto => "auto",
            Self::Headings => "headings",
            Self::Containers => "containers",
            Self::Daypart => "daypart",
        };
        f.write_str(name)
    }
}

fn days_with_items(days: &[DayMenu]) -> usize {
    days.iter().filter(|day| !day.is_empty()).count()
}

/// Page chrome that never holds a day's dishes.
fn is_landmark(element: ElementRef<'_>) -> bool {
    matches!(element.value().name(), "nav" | "header" | "footer" | "aside")
}

/// List entries and `.menu-item`/`.item` blocks count as items, unless they
/// wrap a heading (then they are a section, not a dish).
fn is_item(element: ElementRef<'_>) -> bool {
    let value = element.value();
    (value.name() == "li" || value.classes().any(|c| c == "menu-item" || c == "item"))
        && element.select(&HEADING_SELECTOR).next().is_none()
}

fn inside_any(element: ElementRef<'_>, others: &[ElementRef<'_>]) -> bool {
    element
        .ancestors()
        .any(|a| others.iter().any(|other| other.id() == a.id()))
}

/// Outermost items under `scope` in document order, starting after `start`
/// (when given) and stopping at `end` or, after `start`, at the first
/// landmark outside it.
fn collect_items<'a>(
    scope: ElementRef<'a>,
    start: Option<ElementRef<'a>>,
    end: Option<ElementRef<'a>>,
) -> Vec<ElementRef<'a>> {
    let mut started = start.is_none();
    let mut items: Vec<ElementRef<'a>> = vec![];
    for node in scope.descendants().skip(1) {
        if let Some(start) = start {
            if node.id() == start.id() {
                started = true;
                continue;
            }
            if !started || node.ancestors().any(|a| a.id() == start.id()) {
                continue;
            }
            if ElementRef::wrap(node).is_some_and(is_landmark) {
                break;
            }
        }
        if end.is_some_and(|end| end.id() == node.id()) {
            break;
        }
        let Some(element) = ElementRef::wrap(node) else {
            continue;
        };
        if is_item(element) && !inside_any(element, &items) {
            items.push(element);
        }
    }
    items
}

fn day_menu(day: Weekday, items: Vec<ElementRef<'_>>) -> DayMenu {
    DayMenu::new(day, items.into_iter().filter_map(from_item_element))
}

fn heading_rank(heading: ElementRef<'_>) -> u8 {
    heading.value().name()[1..].parse().unwrap_or(6)
}

/// The smallest ancestor of `heading` that holds any items at all. A heading
/// inside a landmark stays inside it.
fn heading_scope(heading: ElementRef<'_>) -> ElementRef<'_> {
    let mut scope = heading;
    while let Some(parent) = scope.parent().and_then(ElementRef::wrap) {
        scope = parent;
        if matches!(parent.value().name(), "body" | "html")
            || is_landmark(parent)
            || parent.descendants().filter_map(ElementRef::wrap).any(is_item)
        {
            break;
        }
    }
    scope
}

fn by_headings(document: &Html) -> Vec<DayMenu> {
    let headings: Vec<ElementRef> = document.select(&HEADING_SELECTOR).collect();
    headings
        .iter()
        .enumerate()
        .filter_map(|(i, heading)| {
            let day = leading_weekday(&element_text(*heading))?;
            let rank = heading_rank(*heading);
            let end = headings[i + 1..]
                .iter()
                .find(|next| heading_rank(**next) <= rank)
                .copied();
            let items = collect_items(heading_scope(*heading), Some(*heading), end);
            Some(day_menu(day, items))
        })
        .collect()
}

fn container_day(element: ElementRef<'_>) -> Option<Weekday> {
    let value = element.value();
    if let Some(day) = value.attr("data-day").and_then(leading_weekday) {
        return Some(day);
    }
    let names: Vec<&str> = value.id().into_iter().chain(value.classes()).collect();
    only_weekday(&names.join(" "))
}

/// Pages often repeat the weekday on tab buttons before the real panels, so
/// each day keeps the candidate holding the most items.
fn by_containers(document: &Html) -> Vec<DayMenu> {
    static_selector!(CANDIDATE_SELECTOR <- "body [id], body [class], body [data-day]");
    let mut best: Vec<(Weekday, Vec<ElementRef>)> = vec![];
    for element in document.select(&CANDIDATE_SELECTOR) {
        let Some(day) = container_day(element) else {
            continue;
        };
        let items = collect_items(element, None, None);
        match best.iter_mut().find(|(seen, _)| *seen == day) {
            Some(entry) if entry.1.len() < items.len() => entry.1 = items,
            Some(_) => {}
            None => best.push((day, items)),
        }
    }
    best.into_iter()
        .map(|(day, items)| day_menu(day, items))
        .collect()
}

fn lunch_container(document: &Html) -> Option<ElementRef<'_>> {
    static_selector!(ID_SELECTOR <- "[id]");
    static_selector!(MEAL_HEADING_SELECTOR <- "h2, h3");
    document
        .select(&ID_SELECTOR)
        .find(|element| {
            element
                .value()
                .id()
                .is_some_and(|id| id.to_lowercase().contains("lunch"))
        })
        .or_else(|| {
            document
                .select(&MEAL_HEADING_SELECTOR)
                .find(|heading| element_text(*heading).to_lowercase().contains("lunch"))
                .and_then(|heading| {
                    heading
                        .ancestors()
                        .filter_map(ElementRef::wrap)
                        .find(|a| matches!(a.value().name(), "section" | "div"))
                })
        })
}

fn by_daypart(document: &Html, day: Weekday) -> Option<DayMenu> {
    static_selector!(ITEM_SELECTOR <- ".site-panel__daypart-item");
    static_selector!(TITLE_SELECTOR <- ".site-panel__daypart-item-title");
    static_selector!(DESCRIPTION_SELECTOR <- ".site-panel__daypart-item-description");
    static_selector!(STATION_SELECTOR <- ".site-panel__daypart-item-station");

    let container = lunch_container(document)?;
    let items = container.select(&ITEM_SELECTOR).filter_map(|element| {
        let title = text_from_selection(&TITLE_SELECTOR, element)?;
        let description = text_from_selection(&DESCRIPTION_SELECTOR, element);
        let station = text_from_selection(&STATION_SELECTOR, element)
            .map(|station| station.trim_start_matches('@').to_string());
        let tags = tag_elements(element).into_iter().map(tag_text);
        let item = item_from_parts(&title, description, tags, station)?;
        is_menu_item(item.name()).then_some(item)
    });
    Some(DayMenu::new(day, items))
}
