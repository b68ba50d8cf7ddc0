//! Packing list agent

use eyre::Result;
use tracing::debug;

use super::run_agent;
use crate::domain::TripContext;
use crate::llm::LlmClient;
use crate::prompts::{PromptContext, PromptLoader};

/// Produce a packing list for the trip style, destination, and month
pub async fn packing_list(
    llm: &dyn LlmClient,
    prompts: &PromptLoader,
    trip: &TripContext,
    max_tokens: u32,
) -> Result<String> {
    debug!(destination = %trip.destination_display(), "packing_list: called");
    let context = PromptContext::from_trip(trip);
    run_agent(llm, prompts, "packing", &context, max_tokens).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::CompletionResponse;
    use crate::llm::client::mock::MockLlmClient;

    #[tokio::test]
    async fn test_list_returned() {
        let client = MockLlmClient::new(vec![CompletionResponse::text("- Light jacket\n- Sunscreen")]);
        let trip = TripContext::new("Lisbon");

        let list = packing_list(&client, &PromptLoader::embedded_only(), &trip, 1000)
            .await
            .unwrap();
        assert!(list.contains("Sunscreen"));
    }
}
