//! Embedded prompts
//!
//! These are compiled into the binary from .pmt files at build time and used
//! when no user override file is present.

use tracing::debug;

/// Shared system prompt for the planning agents
pub const SYSTEM: &str = include_str!("../../prompts/system.pmt");

/// Day-by-day itinerary generator
pub const ITINERARY: &str = include_str!("../../prompts/itinerary.pmt");

/// Local activity suggestions
pub const ACTIVITIES: &str = include_str!("../../prompts/activities.pmt");

/// Month/destination weather guidance
pub const WEATHER: &str = include_str!("../../prompts/weather.pmt");

/// Packing checklist generator
pub const PACKING: &str = include_str!("../../prompts/packing.pmt");

/// Dining and culture notes
pub const FOOD_CULTURE: &str = include_str!("../../prompts/food-culture.pmt");

/// Chat responder system prompt (personality + response rules)
pub const CHAT_SYSTEM: &str = include_str!("../../prompts/chat-system.pmt");

/// Chat responder user prompt (trip details + history + question)
pub const CHAT: &str = include_str!("../../prompts/chat.pmt");

/// Get the embedded prompt by name
pub fn get_embedded(name: &str) -> Option<&'static str> {
    debug!(%name, "get_embedded: called");
    match name {
        "system" => Some(SYSTEM),
        "itinerary" => Some(ITINERARY),
        "activities" => Some(ACTIVITIES),
        "weather" => Some(WEATHER),
        "packing" => Some(PACKING),
        "food-culture" => Some(FOOD_CULTURE),
        "chat-system" => Some(CHAT_SYSTEM),
        "chat" => Some(CHAT),
        _ => {
            debug!("get_embedded: no match found");
            None
        }
    }
}
