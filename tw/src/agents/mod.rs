//! Planning agents
//!
//! One agent per plan section. Each renders its prompt template for the trip,
//! sends a single completion request, and returns the trimmed text. Agents do
//! not retry and do not swallow errors; the pipeline decides what a stage
//! failure means for the overall plan.

mod activities;
mod food_culture;
mod itinerary;
mod packing;
mod weather;

pub use activities::suggest_activities;
pub use food_culture::food_culture_guide;
pub use itinerary::generate_itinerary;
pub use packing::packing_list;
pub use weather::weather_outlook;

use eyre::{Result, eyre};

use crate::llm::{CompletionRequest, LlmClient, Message};
use crate::prompts::{PromptContext, PromptLoader};

/// Render a template and run it through the model, returning trimmed text
///
/// Shared by every agent. An empty model response is an error here; the
/// pipeline converts agent errors into plan warnings.
async fn run_agent(
    llm: &dyn LlmClient,
    prompts: &PromptLoader,
    template: &str,
    context: &PromptContext,
    max_tokens: u32,
) -> Result<String> {
    let user_prompt = prompts.render(template, context)?;
    let system_prompt = prompts.system_prompt()?;

    let request = CompletionRequest {
        system_prompt,
        messages: vec![Message::user(user_prompt)],
        max_tokens,
    };

    let response = llm.complete(request).await?;
    let text = response
        .content
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .ok_or_else(|| eyre!("model returned an empty {} section", template))?;

    Ok(text)
}
