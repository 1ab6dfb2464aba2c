use serde::Serialize;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
pub enum Category {
    Meat,
    Seafood,
    Other,
}

const MEAT_KEYWORDS: &[&str] = &[
    "beef", "steak", "pork", "bacon", "ham", "sausage", "lamb", "veal", "chicken", "turkey",
    "duck", "poultry", "wing", "thigh", "breast", "ribs", "brisket", "meatball", "burger",
    "patty", "carnitas", "chorizo", "prosciutto", "pepperoni", "rotisserie", "bulgogi",
    "galbi", "kalbi", "korean bbq", "japchae", "dakgalbi", "samgyeopsal", "bossam", "bo ssam",
    "katsu", "karaage", "gyudon", "yakitori", "yakiniku", "ribeye", "chashu", "nikujaga",
    "char siu", "mapo", "kung pao", "general tso", "szechuan", "sichuan", "satay", "rendang",
    "adobo", "larb", "laab",
];

const SEAFOOD_KEYWORDS: &[&str] = &[
    "fish", "salmon", "tuna", "cod", "tilapia", "halibut", "mahi", "trout", "shrimp", "prawn",
    "lobster", "crab", "clam", "mussel", "oyster", "scallop", "squid", "calamari", "octopus",
    "seafood", "sushi", "sashimi", "poke", "ceviche", "anchovy", "sardine", "bass", "snapper",
    "ahi", "unagi", "eel", "ikura", "ebi", "hotate", "uni",
];

// Stations serving sides and drinks; meat found there is a topping, not a dish.
const SIDE_STATIONS: &[&str] = &[
    "salad",
    "bowl bar",
    "beverages",
    "coffee bar",
    "soup",
    "desserts",
    "condiments",
];

const MAIN_STATIONS: &[&str] = &[
    "daily dish",
    "grill",
    "wok",
    "exhibition",
    "chef",
    "entree",
    "hot food",
    "global",
    "comfort",
    "green lite",
];

impl Category {
    /// Classifies a dish by name. Seafood is checked first since it is the
    /// more specific match ("tuna steak" is seafood).
    pub fn of(name: &str, station: Option<&str>) -> Self {
        let name = name.to_lowercase();
        let category = if contains_word(&name, SEAFOOD_KEYWORDS) {
            Self::Seafood
        } else if contains_word(&name, MEAT_KEYWORDS) {
            Self::Meat
        } else {
            Self::Other
        };
        match (category, station.map(str::to_lowercase)) {
            (Self::Other, _) | (_, None) => category,
            (_, Some(station)) => {
                let main = MAIN_STATIONS.iter().any(|s| station.contains(s));
                let side = SIDE_STATIONS.iter().any(|s| station.contains(s));
                if main && !side {
                    category
                } else {
                    Self::Other
                }
            }
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Meat => "Meat",
            Self::Seafood => "Seafood",
            Self::Other => "Other",
        }
    }
}

/// Keyword match anchored at word starts: "ham" hits "ham hock" but not "graham".
fn contains_word(haystack: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| {
        haystack.match_indices(keyword).any(|(at, _)| {
            haystack[..at]
                .chars()
                .next_back()
                .map_or(true, |c| !c.is_alphanumeric())
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_by_name() {
        assert_eq!(Category::of("Turkey Sandwich", None), Category::Meat);
        assert_eq!(Category::of("Grilled Salmon", None), Category::Seafood);
        assert_eq!(Category::of("Ahi Tuna Steak", None), Category::Seafood);
        assert_eq!(Category::of("Veggie Bowl", None), Category::Other);
        assert_eq!(Category::of("Graham Cracker Crumble", None), Category::Other);
        assert_eq!(Category::of("Unagi Don", None), Category::Seafood);
    }

    #[test]
    fn test_category_by_station() {
        assert_eq!(
            Category::of("Bacon Bits", Some("salad bar")),
            Category::Other
        );
        assert_eq!(Category::of("Beef Pho", Some("Global")), Category::Meat);
        assert_eq!(
            Category::of("Chicken Noodle", Some("Soup")),
            Category::Other
        );
        assert_eq!(Category::of("Tofu Stir Fry", Some("wok")), Category::Other);
    }
}
