//! Plan generation pipeline
//!
//! Runs the five planning agents as a straight-line chain:
//! itinerary -> activities -> weather -> packing -> food & culture.
//! A failed stage records a warning and leaves its section empty; the chain
//! always runs to the end so a flaky model still yields a partial plan.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::agents;
use crate::domain::TripContext;
use crate::llm::LlmClient;
use crate::prompts::PromptLoader;

/// The accumulated output of a planning run
///
/// Sections are empty strings until their stage succeeds. Warnings carry one
/// human-readable line per failed stage.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlanState {
    pub itinerary: String,
    pub activity_suggestions: String,
    pub weather_forecast: String,
    pub packing_list: String,
    pub food_culture: String,
    pub warnings: Vec<String>,
}

impl PlanState {
    /// True when at least one section was produced
    pub fn has_content(&self) -> bool {
        !self.itinerary.is_empty()
            || !self.activity_suggestions.is_empty()
            || !self.weather_forecast.is_empty()
            || !self.packing_list.is_empty()
            || !self.food_culture.is_empty()
    }
}

/// Executes the planning chain for a trip
pub struct Planner {
    llm: Arc<dyn LlmClient>,
    prompts: PromptLoader,
    max_tokens: u32,
}

impl Planner {
    pub fn new(llm: Arc<dyn LlmClient>, prompts: PromptLoader, max_tokens: u32) -> Self {
        Self {
            llm,
            prompts,
            max_tokens,
        }
    }

    /// Run all five stages in order
    ///
    /// Never fails as a whole. Each stage that errors contributes a warning
    /// and an empty section. The activities stage still runs when the
    /// itinerary stage failed; it just plans without one.
    pub async fn run_plan(&self, trip: &TripContext) -> PlanState {
        info!(destination = %trip.destination_display(), days = trip.duration_days, "run_plan: starting");
        let mut state = PlanState::default();

        match agents::generate_itinerary(&*self.llm, &self.prompts, trip, self.max_tokens).await {
            Ok(text) => state.itinerary = text,
            Err(e) => record_failure(&mut state, "itinerary", e),
        }

        match agents::suggest_activities(&*self.llm, &self.prompts, trip, &state.itinerary, self.max_tokens)
            .await
        {
            Ok(text) => state.activity_suggestions = text,
            Err(e) => record_failure(&mut state, "activities", e),
        }

        match agents::weather_outlook(&*self.llm, &self.prompts, trip, self.max_tokens).await {
            Ok(text) => state.weather_forecast = text,
            Err(e) => record_failure(&mut state, "weather", e),
        }

        match agents::packing_list(&*self.llm, &self.prompts, trip, self.max_tokens).await {
            Ok(text) => state.packing_list = text,
            Err(e) => record_failure(&mut state, "packing list", e),
        }

        match agents::food_culture_guide(&*self.llm, &self.prompts, trip, self.max_tokens).await {
            Ok(text) => state.food_culture = text,
            Err(e) => record_failure(&mut state, "food and culture", e),
        }

        debug!(warnings = state.warnings.len(), "run_plan: finished");
        state
    }
}

fn record_failure(state: &mut PlanState, stage: &str, error: eyre::Report) {
    warn!(%stage, %error, "run_plan: stage failed");
    state.warnings.push(format!("{} section unavailable: {}", stage, error));
}
