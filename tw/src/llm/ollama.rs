//! Ollama client implementation
//!
//! Local development provider. Talks to the Ollama `/api/chat` endpoint with
//! streaming disabled; no API key involved.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

use super::{CompletionRequest, CompletionResponse, LlmClient, LlmError, StopReason, TokenUsage};
use crate::config::LlmConfig;

/// Default local endpoint when config leaves base-url empty
const DEFAULT_BASE_URL: &str = "http://localhost:11434";

/// Ollama local API client
pub struct OllamaClient {
    model: String,
    base_url: String,
    http: Client,
    max_tokens: u32,
    timeout: Duration,
}

impl OllamaClient {
    /// Create a new client from configuration
    pub fn from_config(config: &LlmConfig) -> Result<Self, LlmError> {
        debug!(?config.model, "OllamaClient::from_config: called");
        let timeout = Duration::from_millis(config.timeout_ms);

        let http = Client::builder().timeout(timeout).build().map_err(LlmError::Network)?;

        let base_url = if config.base_url.is_empty() {
            DEFAULT_BASE_URL.to_string()
        } else {
            config.base_url.clone()
        };

        Ok(Self {
            model: config.model.clone(),
            base_url,
            http,
            max_tokens: config.max_tokens,
            timeout,
        })
    }

    /// Build the request body for the `/api/chat` endpoint
    fn build_request_body(&self, request: &CompletionRequest) -> serde_json::Value {
        debug!(%self.model, %request.max_tokens, "build_request_body: called");

        let mut messages = vec![serde_json::json!({
            "role": "system",
            "content": request.system_prompt,
        })];

        messages.extend(request.messages.iter().map(|msg| {
            serde_json::json!({
                "role": msg.role,
                "content": msg.content,
            })
        }));

        serde_json::json!({
            "model": self.model,
            "messages": messages,
            "stream": false,
            "options": {
                "num_predict": request.max_tokens.min(self.max_tokens),
            },
        })
    }

    fn parse_response(&self, api_response: OllamaResponse) -> CompletionResponse {
        debug!(done = api_response.done, "parse_response: called");
        let content = api_response.message.and_then(|m| m.content);

        // Ollama reports truncation via done_reason
        let stop_reason = match api_response.done_reason.as_deref() {
            Some("length") => StopReason::MaxTokens,
            _ => StopReason::EndTurn,
        };

        CompletionResponse {
            content,
            stop_reason,
            usage: TokenUsage {
                input_tokens: api_response.prompt_eval_count.unwrap_or(0),
                output_tokens: api_response.eval_count.unwrap_or(0),
            },
        }
    }
}

#[async_trait]
impl LlmClient for OllamaClient {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, LlmError> {
        debug!(%self.model, %request.max_tokens, "complete: called");
        let url = format!("{}/api/chat", self.base_url);
        let body = self.build_request_body(&request);

        let response = match self.http.post(&url).json(&body).send().await {
            Ok(r) => r,
            Err(e) if e.is_timeout() => {
                debug!("complete: request timed out");
                return Err(LlmError::Timeout(self.timeout));
            }
            Err(e) => {
                debug!(error = %e, "complete: network error");
                return Err(LlmError::Network(e));
            }
        };

        let status = response.status().as_u16();
        if !response.status().is_success() {
            debug!(%status, "complete: API error");
            let text = response.text().await.unwrap_or_default();
            return Err(LlmError::ApiError { status, message: text });
        }

        debug!("complete: success");
        let api_response: OllamaResponse = response.json().await?;
        Ok(self.parse_response(api_response))
    }
}

// Response deserialization structs

#[derive(Debug, Deserialize)]
struct OllamaResponse {
    message: Option<OllamaMessage>,
    #[serde(default)]
    done: bool,
    done_reason: Option<String>,
    prompt_eval_count: Option<u64>,
    eval_count: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct OllamaMessage {
    content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_client() -> OllamaClient {
        OllamaClient {
            model: "llama3.2:3b-instruct-q4_K_M".to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            http: Client::new(),
            max_tokens: 1000,
            timeout: Duration::from_secs(60),
        }
    }

    #[test]
    fn test_parse_response() {
        let json = r#"{
            "message": {"role": "assistant", "content": "June in Lisbon is warm."},
            "done": true,
            "done_reason": "stop",
            "prompt_eval_count": 80,
            "eval_count": 25
        }"#;
        let api_response: OllamaResponse = serde_json::from_str(json).unwrap();

        let response = make_client().parse_response(api_response);
        assert_eq!(response.content, Some("June in Lisbon is warm.".to_string()));
        assert_eq!(response.stop_reason, StopReason::EndTurn);
        assert_eq!(response.usage.output_tokens, 25);
    }

    #[test]
    fn test_request_body_disables_streaming() {
        let request = CompletionRequest {
            system_prompt: "You are a travel assistant.".to_string(),
            messages: vec![crate::llm::Message::user("What should I pack?")],
            max_tokens: 500,
        };

        let body = make_client().build_request_body(&request);
        assert_eq!(body["stream"], false);
        assert_eq!(body["options"]["num_predict"], 500);
        assert_eq!(body["messages"][0]["role"], "system");
    }
}
