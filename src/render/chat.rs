use std::fmt::{self, Display, Formatter};

use crate::menu::{DayMenu, MenuItem, WeeklyMenu};

/// Placeholder for a day the café posted nothing for.
pub const NO_MENU: &str = "No menu posted";

/// Renders `menu` as a Slack mrkdwn message. Never empty: a week without any
/// items still lists every day with the placeholder.
pub fn chat_message(menu: &WeeklyMenu) -> String {
    ChatMessage(menu).to_string()
}

struct ChatMessage<'a>(&'a WeeklyMenu);

/// Slack treats these three as control characters in message text.
fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

impl Display for ChatMessage<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let menu = self.0;
        writeln!(
            f,
            "*{} - Weekly Lunch Menu* (week of {})",
            escape(menu.source_label()),
            menu.week_of().format("%Y-%m-%d")
        )?;
        if let Some(url) = menu.source_url() {
            writeln!(f, "<{url}|View full menu>")?;
        }
        for day in menu.days() {
            writeln!(f)?;
            write_day(f, menu, day)?;
        }
        Ok(())
    }
}

fn write_day(f: &mut Formatter<'_>, menu: &WeeklyMenu, day: &DayMenu) -> fmt::Result {
    write!(
        f,
        "*{} - {}*",
        day.name(),
        menu.date_of(day).format("%m/%d")
    )?;
    if let Some(url) = day.url() {
        write!(f, "  <{url}|View menu>")?;
    }
    writeln!(f)?;
    if day.is_empty() {
        return writeln!(f, "_{NO_MENU}_");
    }
    for item in day.items() {
        write_item(f, item)?;
    }
    Ok(())
}

fn write_item(f: &mut Formatter<'_>, item: &MenuItem) -> fmt::Result {
    write!(f, "• {}", escape(item.name()))?;
    if !item.tags().is_empty() {
        let tags: Vec<&str> = item.tags().iter().map(String::as_str).collect();
        write!(f, " [{}]", escape(&tags.join(", ")))?;
    }
    writeln!(f)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::{DayMenu, MenuItem};
    use chrono::{TimeZone, Utc, Weekday};
    use url::Url;

    fn menu(sections: Vec<DayMenu>) -> WeeklyMenu {
        WeeklyMenu::assemble(
            "Snap Palo Alto",
            Utc.with_ymd_and_hms(2026, 10, 19, 8, 0, 0).unwrap(),
            None,
            sections,
        )
    }

    fn item(name: &str) -> MenuItem {
        MenuItem::new(name).unwrap()
    }

    #[test]
    fn test_empty_week_still_has_content() {
        let message = chat_message(&menu(vec![]));
        assert!(!message.is_empty());
        assert_eq!(message.matches(NO_MENU).count(), 5);
        assert!(message.starts_with("*Snap Palo Alto - Weekly Lunch Menu* (week of 2026-10-19)\n"));
        for day in ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"] {
            assert!(message.contains(&format!("*{day} - ")), "{day} missing");
        }
    }

    #[test]
    fn test_items_and_tags() {
        let pasta = item("Pasta").with_tags(["vegetarian".to_string(), "nut free".to_string()]);
        let message = chat_message(&menu(vec![
            DayMenu::new(Weekday::Mon, [item("Turkey Sandwich")]),
            DayMenu::new(Weekday::Wed, [pasta]),
        ]));
        let expected = "\
*Snap Palo Alto - Weekly Lunch Menu* (week of 2026-10-19)

*Monday - 10/19*
• Turkey Sandwich

*Tuesday - 10/20*
_No menu posted_

*Wednesday - 10/21*
• Pasta [nut free, vegetarian]

*Thursday - 10/22*
_No menu posted_

*Friday - 10/23*
_No menu posted_
";
        assert_eq!(message, expected);
    }

    #[test]
    fn test_links_and_escaping() {
        let url: Url = "https://snap-palo-alto.cafebonappetit.com/cafe/2026-10-19/"
            .parse()
            .unwrap();
        let message = chat_message(&menu(vec![DayMenu::new(
            Weekday::Mon,
            [item("Mac & Cheese <3")],
        )
        .with_url(url)]));
        assert!(message.contains(
            "*Monday - 10/19*  <https://snap-palo-alto.cafebonappetit.com/cafe/2026-10-19/|View menu>"
        ));
        assert!(message.contains("• Mac &amp; Cheese &lt;3"));
    }

    #[test]
    fn test_deterministic() {
        let week = menu(vec![DayMenu::new(Weekday::Thu, [item("Beef Pho")])]);
        assert_eq!(chat_message(&week), chat_message(&week.clone()));
    }
}
