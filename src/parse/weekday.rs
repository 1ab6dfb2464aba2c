use chrono::Weekday;

/// Recognizes a workday by full name or common abbreviation, ignoring case.
/// Weekend names are not recognized.
pub fn parse_weekday(word: &str) -> Option<Weekday> {
    match word.to_lowercase().as_str() {
        "monday" | "mon" => Some(Weekday::Mon),
        "tuesday" | "tue" | "tues" => Some(Weekday::Tue),
        "wednesday" | "wed" | "weds" => Some(Weekday::Wed),
        "thursday" | "thu" | "thur" | "thurs" => Some(Weekday::Thu),
        "friday" | "fri" => Some(Weekday::Fri),
        _ => None,
    }
}

/// Splits free text into alphabetic words.
fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !c.is_alphabetic())
        .filter(|word| !word.is_empty())
}

/// The weekday `text` starts with, as long as no other weekday is named later
/// on (so "Mon - Fri" is not Monday).
pub fn leading_weekday(text: &str) -> Option<Weekday> {
    let mut words = words(text);
    let day = parse_weekday(words.next()?)?;
    if words.filter_map(parse_weekday).any(|other| other != day) {
        return None;
    }
    Some(day)
}

/// The one weekday named anywhere in `text`. Naming two different days
/// ("mon-fri") names none.
pub fn only_weekday(text: &str) -> Option<Weekday> {
    let mut days = words(text).filter_map(parse_weekday);
    let day = days.next()?;
    days.all(|other| other == day).then_some(day)
}
