//! Primary chat responder
//!
//! Drives one question through the state machine
//! `Idle -> AwaitingModel -> {Accepted, Rejected} -> Done`. The model gets a
//! single attempt with a bounded timeout; a failed call or a low-quality
//! reply routes to the deterministic classifier + selector, which cannot
//! fail. Exactly one ConversationEntry is appended per invocation, whichever
//! branch produced the answer.

use std::sync::Arc;

use tracing::{debug, info, warn};

use super::intent::{Category, classify};
use super::selector::{ResponseSelector, ensure_terminal_punctuation};
use crate::domain::{ConversationEntry, ConversationLog, ResponseSource, TripContext};
use crate::llm::{CompletionRequest, LlmClient, Message};
use crate::prompts::{PromptContext, PromptLoader};

/// How many recent log entries are included in the model prompt
pub const HISTORY_WINDOW: usize = 3;

/// Character budget per included history response
pub const HISTORY_CHAR_BUDGET: usize = 150;

/// Itinerary excerpt budget for the chat prompt
pub const ITINERARY_EXCERPT_CHARS: usize = 800;

/// Minimum accepted model response length
pub const MIN_RESPONSE_CHARS: usize = 40;

/// How far into the (lowercased) response disqualifying phrases are scanned
pub const REJECT_SCAN_CHARS: usize = 120;

/// Responses longer than this are cut at a sentence boundary for display
pub const MAX_RESPONSE_CHARS: usize = 500;

/// Phrases that disqualify a model response near its start
const REJECT_PHRASES: &[&str] = &["sorry", "don't know", "can't help"];

/// Responder state, one question at a time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Idle,
    AwaitingModel,
    Accepted,
    Rejected,
    Done,
}

/// Outcome of one respond() invocation, for logging and display
#[derive(Debug, Clone)]
pub struct RespondOutcome {
    pub entry: ConversationEntry,
    /// Category used by the fallback branch, when it ran
    pub fallback_category: Option<Category>,
}

/// The conversational responder: model first, deterministic fallback second
pub struct Responder {
    llm: Arc<dyn LlmClient>,
    prompts: PromptLoader,
    selector: ResponseSelector,
    max_tokens: u32,
}

impl Responder {
    pub fn new(llm: Arc<dyn LlmClient>, prompts: PromptLoader, max_tokens: u32) -> Self {
        Self {
            llm,
            prompts,
            selector: ResponseSelector::new(),
            max_tokens,
        }
    }

    /// Replace the selector RNG, for deterministic tests
    pub fn with_selector(mut self, selector: ResponseSelector) -> Self {
        self.selector = selector;
        self
    }

    /// Answer a question about the trip
    ///
    /// Never fails. Appends exactly one entry to the log and returns the
    /// outcome; the entry is a clone of what was appended.
    pub async fn respond(
        &mut self,
        question: &str,
        trip: &TripContext,
        itinerary: Option<&str>,
        log: &mut ConversationLog,
    ) -> RespondOutcome {
        let mut state = State::Idle;
        debug!(?state, %question, "respond: called");

        state = State::AwaitingModel;
        debug!(?state, "respond: invoking model");

        let model_response = match self.build_chat_request(question, trip, itinerary, log) {
            Ok(request) => self.llm.complete(request).await,
            Err(e) => {
                // Render failure is treated like any other model failure
                warn!(error = %e, "respond: prompt rendering failed");
                Err(crate::llm::LlmError::InvalidResponse(e.to_string()))
            }
        };

        let (response, source, fallback_category) = match model_response {
            Ok(completion) => {
                let text = completion.content.unwrap_or_default();
                if passes_quality_filter(&text) {
                    state = State::Accepted;
                    debug!(?state, chars = text.len(), "respond: model response accepted");
                    (normalize(text), ResponseSource::Model, None)
                } else {
                    state = State::Rejected;
                    debug!(?state, chars = text.len(), "respond: model response failed quality filter");
                    let (text, category) = self.fallback(question, trip);
                    (text, ResponseSource::Fallback, Some(category))
                }
            }
            Err(e) => {
                state = State::Rejected;
                info!(?state, error = %e, "respond: model unavailable, using fallback");
                let (text, category) = self.fallback(question, trip);
                (text, ResponseSource::Fallback, Some(category))
            }
        };

        state = State::Done;
        let entry = ConversationEntry::new(question, response, source);
        log.append(entry.clone());
        debug!(?state, log_len = log.len(), ?source, "respond: entry appended");

        RespondOutcome {
            entry,
            fallback_category,
        }
    }

    /// The guaranteed-success branch: classify, then select
    fn fallback(&mut self, question: &str, trip: &TripContext) -> (String, Category) {
        let category = classify(question);
        debug!(%category, "fallback: classified");
        (self.selector.select(category, trip), category)
    }

    /// Build the completion request for the model attempt
    ///
    /// Embeds trip context, the bounded recent-history window, and the
    /// question. Public via build_chat_prompt for prompt inspection in tests.
    fn build_chat_request(
        &self,
        question: &str,
        trip: &TripContext,
        itinerary: Option<&str>,
        log: &ConversationLog,
    ) -> eyre::Result<CompletionRequest> {
        let user_prompt = self.build_chat_prompt(question, trip, itinerary, log)?;

        let system_context = PromptContext::from_trip(trip);
        let system_prompt = self.prompts.render("chat-system", &system_context)?;

        Ok(CompletionRequest {
            system_prompt,
            messages: vec![Message::user(user_prompt)],
            max_tokens: self.max_tokens,
        })
    }

    /// Render the user-side chat prompt for a question
    pub fn build_chat_prompt(
        &self,
        question: &str,
        trip: &TripContext,
        itinerary: Option<&str>,
        log: &ConversationLog,
    ) -> eyre::Result<String> {
        let mut context = PromptContext::from_trip(trip).with_question(question);

        if let Some(itinerary) = itinerary {
            context = context.with_itinerary(truncate_chars(itinerary, ITINERARY_EXCERPT_CHARS));
        }

        let history = format_recent_history(log);
        if !history.is_empty() {
            context = context.with_history(history);
        }

        self.prompts.render("chat", &context)
    }
}

/// Format the bounded recent-history block for the chat prompt
///
/// At most HISTORY_WINDOW entries, each response truncated to
/// HISTORY_CHAR_BUDGET characters.
fn format_recent_history(log: &ConversationLog) -> String {
    let mut block = String::new();
    for entry in log.recent(HISTORY_WINDOW) {
        block.push_str("User: ");
        block.push_str(&entry.question);
        block.push_str("\nYou: ");
        block.push_str(&truncate_chars(&entry.response, HISTORY_CHAR_BUDGET));
        block.push('\n');
    }
    block
}

/// Quality filter for model responses
///
/// Accepts text longer than MIN_RESPONSE_CHARS whose first REJECT_SCAN_CHARS
/// (lowercased) contain none of the disqualifying phrases. Scanning only the
/// head keeps long, good answers that end with a caveat.
fn passes_quality_filter(text: &str) -> bool {
    let trimmed = text.trim();
    if trimmed.chars().count() <= MIN_RESPONSE_CHARS {
        debug!(chars = trimmed.len(), "passes_quality_filter: too short");
        return false;
    }

    let head: String = trimmed.chars().take(REJECT_SCAN_CHARS).collect::<String>().to_lowercase();
    for phrase in REJECT_PHRASES {
        if head.contains(phrase) {
            debug!(%phrase, "passes_quality_filter: disqualifying phrase");
            return false;
        }
    }
    true
}

/// Normalize an accepted model response for display
///
/// Strips stray JSON wrapping, bounds the length at a sentence boundary, and
/// guarantees terminal punctuation.
fn normalize(text: String) -> String {
    let text = strip_json_wrapper(text.trim().to_string());
    let text = truncate_at_sentence(text);
    ensure_terminal_punctuation(text)
}

/// Unwrap `{"response": "..."}` style output some models emit
fn strip_json_wrapper(text: String) -> String {
    if text.starts_with('{') && text.ends_with('}') {
        if let Ok(value) = serde_json::from_str::<serde_json::Value>(&text) {
            if let Some(inner) = value.get("response").and_then(|v| v.as_str()) {
                debug!("strip_json_wrapper: unwrapped response field");
                return inner.to_string();
            }
        }
    }
    text
}

/// Cut over-long responses at a sentence boundary, keeping the first three
/// sentences, and invite a follow-up
fn truncate_at_sentence(text: String) -> String {
    if text.chars().count() <= MAX_RESPONSE_CHARS {
        return text;
    }

    let sentences: Vec<&str> = text.split(". ").collect();
    let mut truncated = sentences.iter().take(3).copied().collect::<Vec<_>>().join(". ");
    if !truncated.ends_with('.') {
        truncated.push('.');
    }
    truncated.push_str(" (Want me to elaborate on anything specific?)");
    debug!(original_chars = text.len(), "truncate_at_sentence: truncated");
    truncated
}

/// Truncate to at most `budget` characters, on a char boundary
fn truncate_chars(text: &str, budget: usize) -> String {
    if text.chars().count() <= budget {
        text.to_string()
    } else {
        text.chars().take(budget).collect()
    }
}
