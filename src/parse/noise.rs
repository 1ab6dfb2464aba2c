//! Bon Appétit café pages mix the dishes with legend text, navigation and
//! blog teasers that share the item markup. These lists weed them out.

use std::sync::OnceLock;

use regex::Regex;

const EXCLUDE_KEYWORDS: &[&str] = &[
    "nutrition", "ingredients", "read more", "cal.", "calories", "menu icon", "legend",
    "subscribe", "email", "contact", "hours", "served from", "closed", "copyright", "privacy",
    "terms of use", "navigation", "stay fresh", "the power of", "the buzz", "wellness",
    "sustainability", "food allergies", "hide descriptions", "collapse dayparts", "menu mail",
    "tell us", "faq", "icons", "about your food", "snapchat", "days", "café", "cafe",
    "filters", "show", "exclude", "view menu", "palo alto", "santa monica", "seattle",
    "new york", "san francisco", "bellevue", "monday", "tuesday", "wednesday", "thursday",
    "friday", "tomorrow", "today", "breakfast", "coffee bar", "condiments", "extras",
    "specials", "station", "may contain", "gluten", "vegan:", "vegetarian:", "dairy",
    "allergen", "kitchen", "prepared in", "raw/undercooked", "bon appétit", "bon appetit",
    "tree nut", "ask us", "am -", "pm -", "- pm", "- am", "desserts",
    // blog teasers
    "eat with your senses", "improve your mood", "upcycle your", "boards, boards",
    "how to plan", "simple shifts", "beat holiday", "ways to uplift", "gift guide",
    "gift (guide)", "power of mental",
];

// Filter and picker controls.
const CONTROL_WORDS: &[&str] = &["click", "select", "choose", "option"];

// Always-available salad bar toppings rather than dishes.
const EXCLUDE_ITEMS: &[&str] = &[
    "tuna salad",
    "parmesan cheese",
    "shredded cheese",
    "croutons",
    "cage free egg",
];

const DIETARY_LABELS: &[&str] = &["vegan", "vegetarian", "gluten-free", "organic", "halal"];

// Single short words that are still dishes.
const SHORT_FOODS: &[&str] = &["oatmeal", "congee", "pasta", "rice", "soup", "salad", "pho", "chili"];

/// Whether a daypart title reads like a dish rather than page furniture.
pub fn is_menu_item(name: &str) -> bool {
    static CALORIES: OnceLock<Regex> = OnceLock::new();
    let calories = CALORIES.get_or_init(|| {
        Regex::new(r"^\d+\s*(cal\.?|calories?)?$").expect("regex should be valid")
    });

    let lower = name.trim().to_lowercase();
    let length = lower.chars().count();
    if !(3..=60).contains(&length) {
        return false;
    }
    if calories.is_match(&lower)
        || DIETARY_LABELS.contains(&lower.as_str())
        || EXCLUDE_ITEMS.contains(&lower.as_str())
        || EXCLUDE_KEYWORDS.iter().any(|k| lower.contains(k))
        || CONTROL_WORDS.iter().any(|k| lower.contains(k))
    {
        return false;
    }
    if !lower.contains(' ') && length < 10 && !SHORT_FOODS.contains(&lower.as_str()) {
        return false;
    }
    true
}
