//! Activity suggestions agent
//!
//! Takes the generated itinerary as input so suggestions line up with the
//! day-by-day plan instead of duplicating it.

use eyre::Result;
use tracing::debug;

use super::run_agent;
use crate::domain::TripContext;
use crate::llm::LlmClient;
use crate::prompts::{PromptContext, PromptLoader};

/// Suggest local activities complementing the itinerary
pub async fn suggest_activities(
    llm: &dyn LlmClient,
    prompts: &PromptLoader,
    trip: &TripContext,
    itinerary: &str,
    max_tokens: u32,
) -> Result<String> {
    debug!(destination = %trip.destination_display(), "suggest_activities: called");
    let context = PromptContext::from_trip(trip).with_itinerary(itinerary);
    run_agent(llm, prompts, "activities", &context, max_tokens).await
}
