//! Weather outlook agent

use eyre::Result;
use tracing::debug;

use super::run_agent;
use crate::domain::TripContext;
use crate::llm::LlmClient;
use crate::prompts::{PromptContext, PromptLoader};

/// Describe the expected weather for the destination and month
pub async fn weather_outlook(
    llm: &dyn LlmClient,
    prompts: &PromptLoader,
    trip: &TripContext,
    max_tokens: u32,
) -> Result<String> {
    debug!(destination = %trip.destination_display(), month = %trip.month_display(), "weather_outlook: called");
    let context = PromptContext::from_trip(trip);
    run_agent(llm, prompts, "weather", &context, max_tokens).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::CompletionResponse;
    use crate::llm::client::mock::MockLlmClient;

    #[tokio::test]
    async fn test_empty_model_output_is_error() {
        let client = MockLlmClient::new(vec![CompletionResponse::text("   ")]);
        let trip = TripContext::new("Lisbon");

        let result = weather_outlook(&client, &PromptLoader::embedded_only(), &trip, 1000).await;
        assert!(result.is_err());
    }
}
