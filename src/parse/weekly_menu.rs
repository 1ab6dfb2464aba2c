use chrono::{DateTime, Utc, Weekday};
use scraper::Html;
use url::Url;

use super::error::Result;
use super::{Error, Layout};
use crate::menu::{DayMenu, WeeklyMenu};

/// Extracts a week of menus from a single page.
///
/// Weekdays missing from the page come back as empty days. Finding no weekday
/// at all means the page is not what `layout` expects, which is an error.
pub fn weekly_menu(
    html: &str,
    layout: Layout,
    source_label: &str,
    generated_at: DateTime<Utc>,
    source_url: Option<Url>,
) -> Result<WeeklyMenu> {
    let document = Html::parse_document(html);
    let sections = layout.locate(&document, None);
    if sections.is_empty() {
        return Err(Error::NoDaySections(layout));
    }
    Ok(WeeklyMenu::assemble(
        source_label,
        generated_at,
        source_url,
        sections,
    ))
}

/// One fetched page covering a single weekday.
#[derive(Debug, Clone)]
pub struct DayPage {
    pub day: Weekday,
    pub url: Url,
    pub html: String,
}

/// Extracts a week of menus from one daypart page per day.
pub fn daily_pages(
    pages: &[DayPage],
    source_label: &str,
    generated_at: DateTime<Utc>,
) -> Result<WeeklyMenu> {
    let mut located = 0;
    let mut sections = Vec::with_capacity(pages.len());
    for page in pages {
        let document = Html::parse_document(&page.html);
        let day = match Layout::Daypart.locate(&document, Some(page.day)).pop() {
            Some(day) => {
                located += 1;
                day
            }
            None => {
                log::warn!("no lunch section found for {} at {}", page.day, page.url);
                DayMenu::empty(page.day)
            }
        };
        sections.push(day.with_url(page.url.clone()));
    }
    if located == 0 {
        return Err(Error::NoDaySections(Layout::Daypart));
    }
    Ok(WeeklyMenu::assemble(
        source_label,
        generated_at,
        None,
        sections,
    ))
}
