//! Keyword-based intent classification for chat questions
//!
//! `classify` is pure and total: it lowercases the question, tests substring
//! membership against a fixed keyword table, and returns the first category
//! in CLASSIFICATION_ORDER with any hit, or General when nothing matches.
//!
//! The order is load-bearing. A question can contain keywords from several
//! sets ("cheap restaurant" hits both Food and Budget); fixing the priority
//! makes classification reproducible. Do not reorder without updating the
//! fallback tests.

use tracing::debug;

/// Topic category for a chat question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Food,
    Budget,
    HiddenGems,
    Timing,
    Transportation,
    Accommodation,
    Safety,
    Culture,
    Weather,
    Activity,
    General,
}

impl Category {
    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            Category::Food => "food",
            Category::Budget => "budget",
            Category::HiddenGems => "hidden gems",
            Category::Timing => "timing",
            Category::Transportation => "transportation",
            Category::Accommodation => "accommodation",
            Category::Safety => "safety",
            Category::Culture => "culture",
            Category::Weather => "weather",
            Category::Activity => "activities",
            Category::General => "general",
        }
    }

    /// Every category, classification priority order first, General last
    pub const ALL: [Category; 11] = [
        Category::Food,
        Category::Budget,
        Category::HiddenGems,
        Category::Timing,
        Category::Transportation,
        Category::Accommodation,
        Category::Safety,
        Category::Culture,
        Category::Weather,
        Category::Activity,
        Category::General,
    ];
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Category -> keyword set, in classification priority order
///
/// Keywords are matched as substrings of the lowercased question, so entries
/// are chosen to avoid false hits inside longer words ("eats" rather than
/// "eat", which hides inside "weather"; "bars" rather than "bar", which hides
/// inside "Barcelona"). Collisions across sets are resolved by order: "hotel"
/// contains "hot", but Accommodation outranks Weather.
const CLASSIFICATION_ORDER: &[(Category, &[&str])] = &[
    (
        Category::Food,
        &[
            "restaurant", "food", "eats", "eating", "dining", "meal", "cuisine", "dish", "breakfast", "lunch",
            "dinner", "cafe", "coffee", "drink", "bars", "wine bar",
        ],
    ),
    (
        Category::Budget,
        &["money", "budget", "cheap", "cost", "save", "expensive", "price", "afford", "spend"],
    ),
    (
        Category::HiddenGems,
        &["hidden", "gem", "secret", "off the beaten", "authentic", "undiscovered", "insider"],
    ),
    (
        Category::Timing,
        &["time", "timing", "when", "hour", "schedule", "crowd", "queue", "early", "late"],
    ),
    (
        Category::Transportation,
        &[
            "transport", "metro", "subway", "bus", "train", "tram", "taxi", "uber", "get around", "airport",
            "drive", "car rental",
        ],
    ),
    (
        Category::Accommodation,
        &["hotel", "hostel", "accommodation", "airbnb", "apartment", "resort", "stay", "check-in"],
    ),
    (
        Category::Safety,
        &["safe", "safety", "danger", "crime", "scam", "theft", "pickpocket", "emergency"],
    ),
    (
        Category::Culture,
        &["culture", "custom", "etiquette", "tradition", "language", "tipping", "dress code", "polite"],
    ),
    (
        Category::Weather,
        &["weather", "rain", "temperature", "climate", "sunny", "cold", "hot", "forecast", "umbrella"],
    ),
    (
        Category::Activity,
        &[
            "activity", "activities", "things to do", "museum", "tour", "attraction", "sight", "hike", "beach",
            "nightlife", "shopping", "visit",
        ],
    ),
];

/// Classify a free-text question into a topic category
///
/// Never fails: anything unmatched is General.
pub fn classify(question: &str) -> Category {
    let lower = question.to_lowercase();

    for (category, keywords) in CLASSIFICATION_ORDER {
        if keywords.iter().any(|kw| lower.contains(kw)) {
            debug!(%category, "classify: matched");
            return *category;
        }
    }

    debug!("classify: no keyword match, defaulting to General");
    Category::General
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_food_keywords_any_casing() {
        assert_eq!(classify("best RESTAURANT nearby?"), Category::Food);
        assert_eq!(classify("where can I find good Food"), Category::Food);
        assert_eq!(classify("Best cheap eats?"), Category::Food);
        assert_eq!(classify("good cocktail bars?"), Category::Food);
    }

    #[test]
    fn test_destination_names_do_not_trigger_food() {
        // "Barcelona" must not hit a food keyword
        assert_eq!(classify("Is Barcelona walkable?"), Category::General);
        assert_eq!(classify("best wine bar in Barcelona?"), Category::Food);
    }

    #[test]
    fn test_priority_order_food_beats_budget() {
        // Contains both "cheap" (Budget) and "restaurant" (Food)
        assert_eq!(classify("any cheap restaurant recommendations?"), Category::Food);
    }

    #[test]
    fn test_budget_questions() {
        assert_eq!(classify("how do I save money?"), Category::Budget);
        assert_eq!(classify("is it expensive there?"), Category::Budget);
    }

    #[test]
    fn test_hidden_gems() {
        assert_eq!(classify("show me some hidden gems"), Category::HiddenGems);
        assert_eq!(classify("what do insiders recommend?"), Category::HiddenGems);
    }

    #[test]
    fn test_timing() {
        assert_eq!(classify("when should I go to the tower?"), Category::Timing);
        assert_eq!(classify("how bad are the crowds?"), Category::Timing);
    }

    #[test]
    fn test_transportation_and_accommodation() {
        assert_eq!(classify("how does the metro work?"), Category::Transportation);
        assert_eq!(classify("which hotel district is best?"), Category::Accommodation);
    }

    #[test]
    fn test_hot_inside_hotel_resolved_by_priority() {
        // "hotel" contains "hot"; Accommodation outranks Weather
        assert_eq!(classify("recommend a hotel"), Category::Accommodation);
        assert_eq!(classify("is it hot in august?"), Category::Weather);
    }

    #[test]
    fn test_eat_inside_weather_not_food() {
        assert_eq!(classify("what's the weather like?"), Category::Weather);
    }

    #[test]
    fn test_safety_culture_activity() {
        assert_eq!(classify("is the old town safe at night?"), Category::Safety);
        assert_eq!(classify("what's the tipping etiquette?"), Category::Culture);
        assert_eq!(classify("best museum to visit?"), Category::Activity);
    }

    #[test]
    fn test_default_general() {
        assert_eq!(classify("tell me something interesting"), Category::General);
        assert_eq!(classify(""), Category::General);
        assert_eq!(classify("   "), Category::General);
    }
}
