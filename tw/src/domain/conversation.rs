//! Conversation history for a chat session
//!
//! The log is append-only and insertion-ordered. It grows for the lifetime of
//! a session and is emptied only by an explicit clear (new trip / clear chat).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Which branch of the responder produced a response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseSource {
    /// The LLM call succeeded and passed the quality filter
    Model,
    /// The deterministic classifier + selector produced the answer
    Fallback,
}

/// One question/answer pair in the chat history
///
/// Immutable after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationEntry {
    pub question: String,
    pub response: String,
    pub source: ResponseSource,
    pub created_at: DateTime<Utc>,
}

impl ConversationEntry {
    /// Create an entry stamped with the current time
    pub fn new(question: impl Into<String>, response: impl Into<String>, source: ResponseSource) -> Self {
        Self {
            question: question.into(),
            response: response.into(),
            source,
            created_at: Utc::now(),
        }
    }
}

/// Append-only ordered sequence of conversation entries
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConversationLog {
    entries: Vec<ConversationEntry>,
}

impl ConversationLog {
    /// Create an empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one entry to the end of the log
    pub fn append(&mut self, entry: ConversationEntry) {
        debug!(len = self.entries.len(), source = ?entry.source, "ConversationLog::append: called");
        self.entries.push(entry);
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the log has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries oldest-first
    pub fn iter(&self) -> impl Iterator<Item = &ConversationEntry> {
        self.entries.iter()
    }

    /// The last `n` entries, oldest-first
    ///
    /// Used to build the bounded recent-context window for chat prompts.
    pub fn recent(&self, n: usize) -> &[ConversationEntry] {
        let start = self.entries.len().saturating_sub(n);
        &self.entries[start..]
    }

    /// Empty the log (explicit user action only)
    pub fn clear(&mut self) {
        debug!(len = self.entries.len(), "ConversationLog::clear: called");
        self.entries.clear();
    }
}
