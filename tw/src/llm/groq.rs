//! Groq API client implementation
//!
//! Groq exposes an OpenAI-compatible Chat Completions API; this is the hosted
//! provider used for deployment. One request per call, no retries - a failed
//! call is the caller's cue to fall back.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

use super::{CompletionRequest, CompletionResponse, LlmClient, LlmError, StopReason, TokenUsage};
use crate::config::LlmConfig;

/// Default API base when config leaves base-url empty
const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai";

/// Groq API client
pub struct GroqClient {
    model: String,
    api_key: String,
    base_url: String,
    http: Client,
    max_tokens: u32,
    timeout: Duration,
}

impl GroqClient {
    /// Create a new client from configuration
    ///
    /// Reads the API key from the environment variable named in config.
    pub fn from_config(config: &LlmConfig) -> Result<Self, LlmError> {
        debug!(?config.model, "GroqClient::from_config: called");
        let api_key = config
            .get_api_key()
            .map_err(|e| LlmError::InvalidResponse(e.to_string()))?;

        let timeout = Duration::from_millis(config.timeout_ms);

        let http = Client::builder().timeout(timeout).build().map_err(LlmError::Network)?;

        let base_url = if config.base_url.is_empty() {
            DEFAULT_BASE_URL.to_string()
        } else {
            config.base_url.clone()
        };

        Ok(Self {
            model: config.model.clone(),
            api_key,
            base_url,
            http,
            max_tokens: config.max_tokens,
            timeout,
        })
    }

    /// Build the request body for the chat completions endpoint
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
            "max_tokens": request.max_tokens.min(self.max_tokens),
        })
    }

    /// Parse the API response into the provider-agnostic shape
    fn parse_response(&self, api_response: GroqResponse) -> CompletionResponse {
        debug!(choice_count = api_response.choices.len(), "parse_response: called");
        let choice = api_response.choices.into_iter().next();

        let (content, stop_reason) = match choice {
            Some(c) => {
                let stop_reason = c
                    .finish_reason
                    .as_deref()
                    .map(StopReason::from_finish_reason)
                    .unwrap_or(StopReason::EndTurn);
                (c.message.content, stop_reason)
            }
            None => (None, StopReason::EndTurn),
        };

        let usage = api_response
            .usage
            .map(|u| TokenUsage {
                input_tokens: u.prompt_tokens,
                output_tokens: u.completion_tokens,
            })
            .unwrap_or_default();

        CompletionResponse {
            content,
            stop_reason,
            usage,
        }
    }
}

#[async_trait]
impl LlmClient for GroqClient {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, LlmError> {
        debug!(%self.model, %request.max_tokens, "complete: called");
        let url = format!("{}/v1/chat/completions", self.base_url);
        let body = self.build_request_body(&request);

        let response = match self
            .http
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await
        {
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
        let api_response: GroqResponse = response.json().await?;
        Ok(self.parse_response(api_response))
    }
}

// Response deserialization structs

#[derive(Debug, Deserialize)]
struct GroqResponse {
    choices: Vec<GroqChoice>,
    usage: Option<GroqUsage>,
}

#[derive(Debug, Deserialize)]
struct GroqChoice {
    message: GroqMessage,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GroqMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GroqUsage {
    #[serde(default)]
    prompt_tokens: u64,
    #[serde(default)]
    completion_tokens: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_response_extracts_content() {
        let json = r#"{
            "choices": [
                {"message": {"role": "assistant", "content": "Pack layers for June."}, "finish_reason": "stop"}
            ],
            "usage": {"prompt_tokens": 120, "completion_tokens": 30}
        }"#;
        let api_response: GroqResponse = serde_json::from_str(json).unwrap();

        let config = LlmConfig::default();
        let client = GroqClient {
            model: config.model.clone(),
            api_key: "test-key".to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            http: Client::new(),
            max_tokens: config.max_tokens,
            timeout: Duration::from_secs(30),
        };

        let response = client.parse_response(api_response);
        assert_eq!(response.content, Some("Pack layers for June.".to_string()));
        assert_eq!(response.stop_reason, StopReason::EndTurn);
        assert_eq!(response.usage.input_tokens, 120);
    }

    #[test]
    fn test_parse_response_empty_choices() {
        let api_response: GroqResponse = serde_json::from_str(r#"{"choices": []}"#).unwrap();

        let config = LlmConfig::default();
        let client = GroqClient {
            model: config.model.clone(),
            api_key: "test-key".to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            http: Client::new(),
            max_tokens: config.max_tokens,
            timeout: Duration::from_secs(30),
        };

        let response = client.parse_response(api_response);
        assert_eq!(response.content, None);
    }

    #[test]
    fn test_request_body_includes_system_prompt() {
        let client = GroqClient {
            model: "llama3-70b-8192".to_string(),
            api_key: "test-key".to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            http: Client::new(),
            max_tokens: 1000,
            timeout: Duration::from_secs(30),
        };

        let request = CompletionRequest {
            system_prompt: "You are a travel assistant.".to_string(),
            messages: vec![crate::llm::Message::user("Where should I eat?")],
            max_tokens: 4000,
        };

        let body = client.build_request_body(&request);
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][1]["content"], "Where should I eat?");
        // Request cap is clamped to the client cap
        assert_eq!(body["max_tokens"], 1000);
    }
}
