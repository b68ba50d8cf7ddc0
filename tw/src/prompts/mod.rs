//! Prompt Template System
//!
//! Loads and renders `.pmt` (prompt template) files for the planning agents
//! and the chat responder.
//!
//! Template loading chain:
//! 1. `.tripweaver/prompts/{name}.pmt` (user override)
//! 2. Embedded fallback compiled into the binary
//!
//! Templates use Handlebars syntax for variable substitution.

pub mod embedded;
mod loader;

pub use loader::{PromptContext, PromptLoader};
