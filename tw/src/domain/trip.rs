//! Trip preferences for a planning session
//!
//! A TripContext is immutable once a session starts; planning a new trip
//! replaces it wholesale. Every field that can appear in a prompt or response
//! template has a rendering default so templates never show an empty
//! placeholder.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Month of travel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    /// All twelve months, in calendar order
    pub const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    /// Parse a month name, case-insensitively
    ///
    /// Returns None for anything that is not one of the twelve names.
    pub fn parse(s: &str) -> Option<Self> {
        debug!(%s, "Month::parse: called");
        let lower = s.trim().to_lowercase();
        Month::ALL.iter().copied().find(|m| m.name().to_lowercase() == lower)
    }

    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            Month::January => "January",
            Month::February => "February",
            Month::March => "March",
            Month::April => "April",
            Month::May => "May",
            Month::June => "June",
            Month::July => "July",
            Month::August => "August",
            Month::September => "September",
            Month::October => "October",
            Month::November => "November",
            Month::December => "December",
        }
    }
}

impl std::fmt::Display for Month {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Budget tier for the trip
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BudgetTier {
    Budget,
    #[default]
    MidRange,
    Luxury,
    Backpacker,
    Family,
}

impl BudgetTier {
    /// Parse a budget tier, case-insensitively
    ///
    /// Accepts both "mid-range" and "midrange" spellings.
    pub fn parse(s: &str) -> Option<Self> {
        debug!(%s, "BudgetTier::parse: called");
        match s.trim().to_lowercase().as_str() {
            "budget" => Some(BudgetTier::Budget),
            "mid-range" | "midrange" | "mid range" => Some(BudgetTier::MidRange),
            "luxury" => Some(BudgetTier::Luxury),
            "backpacker" => Some(BudgetTier::Backpacker),
            "family" => Some(BudgetTier::Family),
            _ => None,
        }
    }

    /// Display name used in prompts and responses
    pub fn name(&self) -> &'static str {
        match self {
            BudgetTier::Budget => "budget",
            BudgetTier::MidRange => "mid-range",
            BudgetTier::Luxury => "luxury",
            BudgetTier::Backpacker => "backpacker",
            BudgetTier::Family => "family",
        }
    }
}

impl std::fmt::Display for BudgetTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Style of holiday being planned
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HolidayType {
    City,
    Beach,
    Adventure,
    Romantic,
    Family,
    Cultural,
    Relaxation,
    #[default]
    General,
}

impl HolidayType {
    /// Parse a holiday type, case-insensitively
    pub fn parse(s: &str) -> Option<Self> {
        debug!(%s, "HolidayType::parse: called");
        match s.trim().to_lowercase().as_str() {
            "city" | "city break" => Some(HolidayType::City),
            "beach" => Some(HolidayType::Beach),
            "adventure" => Some(HolidayType::Adventure),
            "romantic" => Some(HolidayType::Romantic),
            "family" => Some(HolidayType::Family),
            "cultural" | "culture" => Some(HolidayType::Cultural),
            "relaxation" | "relaxing" => Some(HolidayType::Relaxation),
            "general" | "any" | "trip" => Some(HolidayType::General),
            _ => None,
        }
    }

    /// Display name used in prompts ("a city break to ...")
    pub fn name(&self) -> &'static str {
        match self {
            HolidayType::City => "city break",
            HolidayType::Beach => "beach holiday",
            HolidayType::Adventure => "adventure trip",
            HolidayType::Romantic => "romantic getaway",
            HolidayType::Family => "family holiday",
            HolidayType::Cultural => "cultural trip",
            HolidayType::Relaxation => "relaxing break",
            HolidayType::General => "trip",
        }
    }
}

impl std::fmt::Display for HolidayType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The traveler's stated preferences for the current session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripContext {
    /// Destination city or region
    pub destination: String,

    /// Month of travel, if stated
    pub month: Option<Month>,

    /// Trip length in days (always positive)
    pub duration_days: u32,

    /// Group size bucket ("1", "2", "3-5", "6+")
    pub group_size: String,

    /// Budget tier
    pub budget: BudgetTier,

    /// Holiday style
    pub holiday_type: HolidayType,

    /// Free-text notes from the traveler
    pub comments: String,
}

impl TripContext {
    /// Create a context for a destination with default everything else
    pub fn new(destination: impl Into<String>) -> Self {
        Self {
            destination: destination.into(),
            ..Default::default()
        }
    }

    /// Destination for rendering, with the generic default applied
    pub fn destination_display(&self) -> &str {
        if self.destination.trim().is_empty() {
            "your destination"
        } else {
            self.destination.trim()
        }
    }

    /// Month for rendering, with the generic default applied
    pub fn month_display(&self) -> String {
        match self.month {
            Some(m) => m.to_string(),
            None => "your travel dates".to_string(),
        }
    }

    /// Group size for rendering, with the generic default applied
    pub fn group_display(&self) -> &str {
        if self.group_size.trim().is_empty() {
            "your group"
        } else {
            self.group_size.trim()
        }
    }
}

impl Default for TripContext {
    fn default() -> Self {
        Self {
            destination: String::new(),
            month: None,
            duration_days: 7,
            group_size: "2".to_string(),
            budget: BudgetTier::default(),
            holiday_type: HolidayType::default(),
            comments: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_parse_case_insensitive() {
        assert_eq!(Month::parse("june"), Some(Month::June));
        assert_eq!(Month::parse("JUNE"), Some(Month::June));
        assert_eq!(Month::parse(" October "), Some(Month::October));
        assert_eq!(Month::parse("Smarch"), None);
    }

    #[test]
    fn test_budget_tier_parse() {
        assert_eq!(BudgetTier::parse("Mid-Range"), Some(BudgetTier::MidRange));
        assert_eq!(BudgetTier::parse("midrange"), Some(BudgetTier::MidRange));
        assert_eq!(BudgetTier::parse("LUXURY"), Some(BudgetTier::Luxury));
        assert_eq!(BudgetTier::parse("gold-plated"), None);
    }

    #[test]
    fn test_holiday_type_parse() {
        assert_eq!(HolidayType::parse("City Break"), Some(HolidayType::City));
        assert_eq!(HolidayType::parse("beach"), Some(HolidayType::Beach));
        assert_eq!(HolidayType::parse("unknown"), None);
    }

    #[test]
    fn test_rendering_defaults() {
        let trip = TripContext::default();
        assert_eq!(trip.destination_display(), "your destination");
        assert_eq!(trip.month_display(), "your travel dates");

        let trip = TripContext {
            destination: " Lisbon ".to_string(),
            month: Some(Month::June),
            ..Default::default()
        };
        assert_eq!(trip.destination_display(), "Lisbon");
        assert_eq!(trip.month_display(), "June");
    }

    #[test]
    fn test_duration_default_positive() {
        assert!(TripContext::default().duration_days > 0);
    }
}
