use std::{borrow::Cow, sync::OnceLock};

use regex::Regex;

/// Trims `s` and folds every whitespace run (newlines and non-breaking spaces
/// included) into a single space.
pub fn remove_excess_whitespace(s: &str) -> Cow<'_, str> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"\s{2,}|[^\S ]").expect("regex should be valid"));
    re.replace_all(s.trim(), " ")
}
