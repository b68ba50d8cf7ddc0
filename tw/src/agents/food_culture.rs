//! Food and culture agent
//!
//! Runs last in the pipeline. No live restaurant search is wired in; the
//! template instructs the model to fall back to well-known recommendations.

use eyre::Result;
use tracing::debug;

use super::run_agent;
use crate::domain::TripContext;
use crate::llm::LlmClient;
use crate::prompts::{PromptContext, PromptLoader};

/// Produce dining and cultural guidance for the destination
pub async fn food_culture_guide(
    llm: &dyn LlmClient,
    prompts: &PromptLoader,
    trip: &TripContext,
    max_tokens: u32,
) -> Result<String> {
    debug!(destination = %trip.destination_display(), "food_culture_guide: called");
    let context = PromptContext::from_trip(trip);
    run_agent(llm, prompts, "food-culture", &context, max_tokens).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::CompletionResponse;
    use crate::llm::client::mock::MockLlmClient;

    #[tokio::test]
    async fn test_guide_returned() {
        let client = MockLlmClient::new(vec![CompletionResponse::text(
            "## Dining Recommendations\nTry the tascas of Alfama.",
        )]);
        let trip = TripContext::new("Lisbon");

        let guide = food_culture_guide(&client, &PromptLoader::embedded_only(), &trip, 1000)
            .await
            .unwrap();
        assert!(guide.contains("Alfama"));
    }
}
