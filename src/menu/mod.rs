mod category;
mod menu_item;

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc, Weekday};
use serde::Serialize;
use url::Url;

pub use category::Category;
pub use menu_item::MenuItem;

/// The days a workplace café posts a menu for, in display order.
pub const WORKWEEK: [Weekday; 5] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
];

/// Monday of the week a run on `date` reports on. Weekend runs look ahead to
/// the coming week.
#[must_use]
pub fn week_of(date: NaiveDate) -> NaiveDate {
    match date.weekday() {
        Weekday::Sat => date + Duration::days(2),
        Weekday::Sun => date + Duration::days(1),
        day => date - Duration::days(i64::from(day.num_days_from_monday())),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayMenu {
    day: Weekday,
    items: Vec<MenuItem>,
    url: Option<Url>,
}

impl DayMenu {
    /// Builds a day, dropping repeated item names (the first one wins).
    pub fn new(day: Weekday, items: impl IntoIterator<Item = MenuItem>) -> Self {
        let mut deduped: Vec<MenuItem> = vec![];
        for item in items {
            if deduped.iter().all(|seen| seen.name() != item.name()) {
                deduped.push(item);
            }
        }
        Self {
            day,
            items: deduped,
            url: None,
        }
    }

    #[must_use]
    pub fn empty(day: Weekday) -> Self {
        Self::new(day, [])
    }

    #[must_use]
    pub fn with_url(mut self, url: Url) -> Self {
        self.url = Some(url);
        self
    }

    pub const fn day(&self) -> Weekday {
        self.day
    }

    /// Full English name of the day, e.g. "Monday".
    pub const fn name(&self) -> &'static str {
        match self.day {
            Weekday::Mon => "Monday",
            Weekday::Tue => "Tuesday",
            Weekday::Wed => "Wednesday",
            Weekday::Thu => "Thursday",
            Weekday::Fri => "Friday",
            Weekday::Sat => "Saturday",
            Weekday::Sun => "Sunday",
        }
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub const fn url(&self) -> Option<&Url> {
        self.url.as_ref()
    }

    pub fn items_in(&self, category: Category) -> impl Iterator<Item = &MenuItem> {
        self.items
            .iter()
            .filter(move |item| item.category() == category)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeeklyMenu {
    source_label: String,
    generated_at: DateTime<Utc>,
    week_of: NaiveDate,
    source_url: Option<Url>,
    days: Vec<DayMenu>,
}

impl WeeklyMenu {
    /// Lays `sections` out as Monday to Friday. A weekday without a section
    /// gets an empty day; a weekday located twice keeps its first section.
    pub fn assemble(
        source_label: impl Into<String>,
        generated_at: DateTime<Utc>,
        source_url: Option<Url>,
        sections: impl IntoIterator<Item = DayMenu>,
    ) -> Self {
        let mut slots: [Option<DayMenu>; 5] = Default::default();
        for section in sections {
            let Some(index) = WORKWEEK.iter().position(|day| *day == section.day) else {
                log::debug!("ignoring weekend section for {}", section.day);
                continue;
            };
            if slots[index].is_none() {
                slots[index] = Some(section);
            } else {
                log::debug!("ignoring repeated section for {}", section.day);
            }
        }
        let days = WORKWEEK
            .iter()
            .zip(slots)
            .map(|(day, slot)| slot.unwrap_or_else(|| DayMenu::empty(*day)))
            .collect();

        Self {
            source_label: source_label.into(),
            generated_at,
            week_of: week_of(generated_at.date_naive()),
            source_url,
            days,
        }
    }

    pub fn source_label(&self) -> &str {
        &self.source_label
    }

    pub const fn generated_at(&self) -> DateTime<Utc> {
        self.generated_at
    }

    pub const fn week_of(&self) -> NaiveDate {
        self.week_of
    }

    pub const fn source_url(&self) -> Option<&Url> {
        self.source_url.as_ref()
    }

    pub fn days(&self) -> &[DayMenu] {
        &self.days
    }

    /// Calendar date of `day` within this menu's week.
    pub fn date_of(&self, day: &DayMenu) -> NaiveDate {
        self.week_of + Duration::days(i64::from(day.day.num_days_from_monday()))
    }

    pub fn item_count(&self) -> usize {
        self.days.iter().map(|day| day.items.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn item(name: &str) -> MenuItem {
        MenuItem::new(name).expect("name should be non-empty")
    }

    #[test]
    fn test_week_of() {
        let monday = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        assert_eq!(week_of(monday), monday);
        assert_eq!(week_of(NaiveDate::from_ymd_opt(2026, 10, 23).unwrap()), monday);
        // weekends roll forward
        assert_eq!(
            week_of(NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()),
            monday
        );
        assert_eq!(
            week_of(NaiveDate::from_ymd_opt(2026, 10, 17).unwrap()),
            monday
        );
    }

    #[test]
    fn test_assemble_orders_and_fills_days() {
        let now = Utc.with_ymd_and_hms(2026, 10, 20, 9, 0, 0).unwrap();
        let menu = WeeklyMenu::assemble(
            "Palo Alto",
            now,
            None,
            vec![
                DayMenu::new(Weekday::Fri, [item("Fish Tacos")]),
                DayMenu::new(Weekday::Mon, [item("Turkey Sandwich")]),
                DayMenu::new(Weekday::Mon, [item("Should Be Ignored")]),
                DayMenu::new(Weekday::Sat, [item("Brunch")]),
            ],
        );
        let days: Vec<Weekday> = menu.days().iter().map(DayMenu::day).collect();
        assert_eq!(days, WORKWEEK);
        assert_eq!(menu.days()[0].items()[0].name(), "Turkey Sandwich");
        assert_eq!(menu.days()[4].items()[0].name(), "Fish Tacos");
        assert!(menu.days()[1].is_empty());
        assert_eq!(menu.item_count(), 2);
        assert_eq!(menu.week_of(), NaiveDate::from_ymd_opt(2026, 10, 19).unwrap());
        assert_eq!(
            menu.date_of(&menu.days()[4]),
            NaiveDate::from_ymd_opt(2026, 10, 23).unwrap()
        );
    }

    #[test]
    fn test_day_dedupes_items() {
        let day = DayMenu::new(
            Weekday::Tue,
            [item("Pho"), item("Banh Mi"), item("Pho")],
        );
        let names: Vec<&str> = day.items().iter().map(MenuItem::name).collect();
        assert_eq!(names, ["Pho", "Banh Mi"]);
    }
}
