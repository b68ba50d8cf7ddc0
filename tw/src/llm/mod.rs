//! LLM client module for TripWeaver
//!
//! Provides the provider-agnostic completion trait and the two concrete
//! providers: Groq (hosted, OpenAI-compatible) for deployment and Ollama for
//! local development.

use std::sync::Arc;

use tracing::debug;

pub mod client;
mod error;
mod groq;
mod ollama;
mod types;

pub use client::LlmClient;
pub use error::LlmError;
pub use groq::GroqClient;
pub use ollama::OllamaClient;
pub use types::{CompletionRequest, CompletionResponse, Message, Role, StopReason, TokenUsage};

use crate::config::LlmConfig;

/// Create an LLM client based on the provider specified in config
///
/// Supports "groq" and "ollama" providers.
pub fn create_client(config: &LlmConfig) -> Result<Arc<dyn LlmClient>, LlmError> {
    debug!(provider = %config.provider, model = %config.model, "create_client: called");
    match config.provider.as_str() {
        "groq" => {
            debug!("create_client: creating Groq client");
            Ok(Arc::new(GroqClient::from_config(config)?))
        }
        "ollama" => {
            debug!("create_client: creating Ollama client");
            Ok(Arc::new(OllamaClient::from_config(config)?))
        }
        other => {
            debug!(provider = %other, "create_client: unknown provider");
            Err(LlmError::InvalidResponse(format!(
                "Unknown LLM provider: '{}'. Supported: groq, ollama",
                other
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_client_rejects_unknown_provider() {
        let config = LlmConfig {
            provider: "carrier-pigeon".to_string(),
            ..Default::default()
        };
        let result = create_client(&config);
        assert!(result.is_err());
    }

    #[test]
    fn test_create_client_ollama_needs_no_key() {
        let config = LlmConfig {
            provider: "ollama".to_string(),
            model: "llama3.2:3b-instruct-q4_K_M".to_string(),
            ..Default::default()
        };
        assert!(create_client(&config).is_ok());
    }
}
