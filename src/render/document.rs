use std::fmt::{self, Display, Formatter};

use crate::menu::{Category, DayMenu, MenuItem, WeeklyMenu};

use super::NO_MENU;

static STYLE: &str = r#"
    * { margin: 0; padding: 0; box-sizing: border-box; }
    body {
        font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Ubuntu, sans-serif;
        background: #f8f9fa;
        padding: 40px 20px;
    }
    .container { max-width: 900px; margin: 0 auto; }
    header { text-align: center; color: #1a365d; margin-bottom: 40px; }
    header h1 { font-size: 2.5rem; margin-bottom: 10px; }
    header p { font-size: 1.2rem; color: #4a5568; }
    .generated-time { font-size: 0.9rem; color: #718096; margin-top: 10px; }
    .day-card {
        background: white;
        border-radius: 16px;
        padding: 24px;
        margin-bottom: 20px;
        box-shadow: 0 10px 40px rgba(0, 0, 0, 0.1);
    }
    .day-header {
        display: flex;
        justify-content: space-between;
        align-items: center;
        margin-bottom: 20px;
        padding-bottom: 15px;
        border-bottom: 2px solid #f0f0f0;
    }
    .day-name { font-size: 1.5rem; font-weight: 700; color: #333; }
    .day-date { color: #666; background: #f5f5f5; padding: 6px 12px; border-radius: 20px; }
    .menu-link { font-size: 0.9rem; color: #2563eb; text-decoration: none; }
    .menu-link:hover { text-decoration: underline; }
    .category { border-radius: 12px; padding: 16px; margin-bottom: 16px; }
    .category:last-child { margin-bottom: 0; }
    .category h3 { font-size: 1.1rem; color: #333; margin-bottom: 8px; }
    .category-count {
        font-size: 0.85rem;
        font-weight: normal;
        color: #999;
        background: #f5f5f5;
        padding: 2px 8px;
        border-radius: 10px;
    }
    .meat { background: #fff5f5; border-left: 4px solid #e74c3c; }
    .seafood { background: #f0f9ff; border-left: 4px solid #3498db; }
    .other { background: #f9f9f9; border-left: 4px solid #95a5a6; }
    .items-list { list-style: none; }
    .items-list li { padding: 6px 0; color: #444; }
    .tag {
        font-size: 0.75rem;
        color: #2f855a;
        background: #f0fff4;
        padding: 1px 6px;
        margin-left: 6px;
        border-radius: 8px;
    }
    .station { font-size: 0.8rem; color: #999; margin-left: 6px; }
    .item-description { font-size: 0.85rem; color: #777; }
    .no-items { color: #999; font-style: italic; }
    footer { text-align: center; color: #718096; margin-top: 40px; font-size: 0.9rem; }
    @media (max-width: 600px) {
        header h1 { font-size: 1.8rem; }
        .day-header { flex-direction: column; align-items: flex-start; gap: 10px; }
    }
"#;

/// Renders `menu` as a self-contained HTML page for viewing in a browser.
pub fn document(menu: &WeeklyMenu) -> String {
    Document(menu).to_string()
}

struct Document<'a>(&'a WeeklyMenu);

/// Escaped text, safe inside element content and quoted attributes.
struct Escaped<'a>(&'a str);

impl Display for Escaped<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for c in self.0.chars() {
            match c {
                '&' => f.write_str("&amp;")?,
                '<' => f.write_str("&lt;")?,
                '>' => f.write_str("&gt;")?,
                '"' => f.write_str("&quot;")?,
                '\'' => f.write_str("&#39;")?,
                c => write!(f, "{c}")?,
            }
        }
        Ok(())
    }
}

impl Display for Document<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let menu = self.0;
        let label = Escaped(menu.source_label());
        let week_of = menu.week_of().format("%B %-d, %Y");
        writeln!(f, "<!DOCTYPE html>")?;
        writeln!(f, "<html lang=\"en\">")?;
        writeln!(f, "<head>")?;
        writeln!(f, "<meta charset=\"utf-8\">")?;
        writeln!(
            f,
            "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">"
        )?;
        writeln!(f, "<title>{label} - Weekly Lunch Menu - Week of {week_of}</title>")?;
        writeln!(f, "<style>{STYLE}</style>")?;
        writeln!(f, "</head>")?;
        writeln!(f, "<body>")?;
        writeln!(f, "<div class=\"container\">")?;
        writeln!(f, "<header>")?;
        writeln!(f, "<h1>Weekly Lunch Menu</h1>")?;
        writeln!(f, "<p>{label}</p>")?;
        writeln!(f, "<p>Week of {week_of}</p>")?;
        writeln!(
            f,
            "<p class=\"generated-time\">Generated: {} UTC</p>",
            menu.generated_at().format("%A, %B %d, %Y at %I:%M %p")
        )?;
        if let Some(url) = menu.source_url() {
            writeln!(
                f,
                "<p><a class=\"menu-link\" href=\"{}\" target=\"_blank\" rel=\"noopener\">View full menu</a></p>",
                Escaped(url.as_str())
            )?;
        }
        writeln!(f, "</header>")?;
        for day in menu.days() {
            write_day(f, menu, day)?;
        }
        writeln!(f, "<footer><p>Auto-generated by cafe_menu</p></footer>")?;
        writeln!(f, "</div>")?;
        writeln!(f, "</body>")?;
        writeln!(f, "</html>")
    }
}

fn write_day(f: &mut Formatter<'_>, menu: &WeeklyMenu, day: &DayMenu) -> fmt::Result {
    writeln!(f, "<article class=\"day-card\">")?;
    writeln!(f, "<div class=\"day-header\">")?;
    writeln!(
        f,
        "<div><span class=\"day-name\">{}</span> <span class=\"day-date\">{}</span></div>",
        day.name(),
        menu.date_of(day).format("%B %-d")
    )?;
    if let Some(url) = day.url() {
        writeln!(
            f,
            "<a class=\"menu-link\" href=\"{}\" target=\"_blank\" rel=\"noopener\">View full menu</a>",
            Escaped(url.as_str())
        )?;
    }
    writeln!(f, "</div>")?;
    if day.is_empty() {
        writeln!(f, "<p class=\"no-items\">{NO_MENU}</p>")?;
    }
    for category in [Category::Meat, Category::Seafood, Category::Other] {
        let items: Vec<&MenuItem> = day.items_in(category).collect();
        if items.is_empty() {
            continue;
        }
        let noun = if items.len() == 1 { "item" } else { "items" };
        writeln!(
            f,
            "<section class=\"category {}\">",
            category.label().to_lowercase()
        )?;
        writeln!(
            f,
            "<h3>{} <span class=\"category-count\">{} {noun}</span></h3>",
            category.label(),
            items.len()
        )?;
        writeln!(f, "<ul class=\"items-list\">")?;
        for item in items {
            write_item(f, item)?;
        }
        writeln!(f, "</ul>")?;
        writeln!(f, "</section>")?;
    }
    writeln!(f, "</article>")
}

fn write_item(f: &mut Formatter<'_>, item: &MenuItem) -> fmt::Result {
    write!(f, "<li><span class=\"item-name\">{}</span>", Escaped(item.name()))?;
    for tag in item.tags() {
        write!(f, "<span class=\"tag\">{}</span>", Escaped(tag))?;
    }
    if let Some(station) = item.station() {
        write!(f, "<span class=\"station\">@{}</span>", Escaped(station))?;
    }
    if let Some(description) = item.description() {
        write!(
            f,
            "<p class=\"item-description\">{}</p>",
            Escaped(description)
        )?;
    }
    writeln!(f, "</li>")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::DayMenu;
    use chrono::{TimeZone, Utc, Weekday};
    use scraper::{Html, Selector};

    fn week() -> WeeklyMenu {
        let item = |name: &str| MenuItem::new(name).unwrap();
        WeeklyMenu::assemble(
            "Snap <Palo Alto>",
            Utc.with_ymd_and_hms(2026, 10, 19, 8, 5, 0).unwrap(),
            None,
            vec![
                DayMenu::new(
                    Weekday::Mon,
                    [
                        item("Turkey Sandwich"),
                        item("Grilled Salmon"),
                        item("Veggie Bowl")
                            .with_tags(["vegan".to_string()])
                            .with_description(Some("Quinoa & squash".to_string())),
                    ],
                ),
                DayMenu::new(Weekday::Thu, [item("Beef Pho").with_station(Some("global".to_string()))]),
            ],
        )
    }

    #[test]
    fn test_document_structure() {
        let html = document(&week());
        assert!(html.starts_with("<!DOCTYPE html>\n"));
        assert!(html.contains("<title>Snap &lt;Palo Alto&gt; - Weekly Lunch Menu - Week of October 19, 2026</title>"));
        assert!(html.contains("Generated: Monday, October 19, 2026 at 08:05 AM UTC"));

        let parsed = Html::parse_document(&html);
        let cards = Selector::parse("article.day-card").unwrap();
        assert_eq!(parsed.select(&cards).count(), 5);
        let empty = Selector::parse("p.no-items").unwrap();
        assert_eq!(parsed.select(&empty).count(), 3);
        let names = Selector::parse(".meat .item-name").unwrap();
        let meat: Vec<String> = parsed
            .select(&names)
            .map(|e| e.text().collect())
            .collect();
        assert_eq!(meat, ["Turkey Sandwich", "Beef Pho"]);
        let seafood = Selector::parse(".seafood .category-count").unwrap();
        assert_eq!(
            parsed.select(&seafood).next().unwrap().text().collect::<String>(),
            "1 item"
        );
    }

    #[test]
    fn test_document_escapes_and_details() {
        let html = document(&week());
        assert!(html.contains("<span class=\"tag\">vegan</span>"));
        assert!(html.contains("<p class=\"item-description\">Quinoa &amp; squash</p>"));
        assert!(html.contains("<span class=\"station\">@global</span>"));
        assert!(!html.contains("<Palo Alto>"));
    }

    #[test]
    fn test_document_deterministic() {
        let menu = week();
        assert_eq!(document(&menu), document(&menu));
    }
}
