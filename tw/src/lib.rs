//! TripWeaver - trip planning and travel Q&A
//!
//! TripWeaver generates a structured trip plan through a chain of LLM agents,
//! then answers follow-up questions conversationally. The chat path is built
//! to degrade gracefully: a model failure or low-quality reply routes to a
//! deterministic keyword-classified fallback, so a question always gets an
//! answer.
//!
//! # Modules
//!
//! - [`llm`] - LLM client trait and the Groq/Ollama implementations
//! - [`agents`] - One planning agent per plan section
//! - [`pipeline`] - The plan generation chain and its accumulated state
//! - [`chat`] - Question classification, fallback selection, and the responder
//! - [`prompts`] - Handlebars prompt templates with user overrides
//! - [`config`] - Configuration types and loading
//! - [`cli`] - Command-line interface

pub mod agents;
pub mod chat;
pub mod cli;
pub mod config;
pub mod domain;
pub mod llm;
pub mod pipeline;
pub mod prompts;
pub mod repl;

// Re-export commonly used types
pub use chat::{Category, Responder, RespondOutcome, ResponseSelector, classify};
pub use config::{Config, LlmConfig};
pub use domain::{ConversationEntry, ConversationLog, ResponseSource, TripContext};
pub use llm::{CompletionRequest, CompletionResponse, GroqClient, LlmClient, LlmError, OllamaClient, create_client};
pub use pipeline::{PlanState, Planner};
pub use prompts::{PromptContext, PromptLoader};
