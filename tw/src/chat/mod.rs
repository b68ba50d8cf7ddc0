//! Conversational Q&A about a planned trip
//!
//! The responder tries the model once, then falls back to a deterministic
//! classify-and-select pipeline that always produces an answer. Submodules:
//! - `intent`: keyword classification of questions into topic categories
//! - `selector`: per-category fallback templates and random selection
//! - `responder`: the state machine tying model attempt and fallback together

mod intent;
mod responder;
mod selector;

pub use intent::{Category, classify};
pub use responder::{
    HISTORY_CHAR_BUDGET, HISTORY_WINDOW, MAX_RESPONSE_CHARS, MIN_RESPONSE_CHARS, REJECT_SCAN_CHARS,
    Responder, RespondOutcome,
};
pub use selector::{ResponseSelector, candidates};
