//! Itinerary agent
//!
//! Produces the day-by-day itinerary that anchors the rest of the plan. Runs
//! first because later agents take the itinerary as input.

use eyre::Result;
use tracing::debug;

use super::run_agent;
use crate::domain::TripContext;
use crate::llm::LlmClient;
use crate::prompts::{PromptContext, PromptLoader};

/// Generate a day-by-day itinerary for the trip
pub async fn generate_itinerary(
    llm: &dyn LlmClient,
    prompts: &PromptLoader,
    trip: &TripContext,
    max_tokens: u32,
) -> Result<String> {
    debug!(destination = %trip.destination_display(), days = trip.duration_days, "generate_itinerary: called");
    let context = PromptContext::from_trip(trip);
    run_agent(llm, prompts, "itinerary", &context, max_tokens).await
}
