//! LlmClient trait definition

use async_trait::async_trait;

use super::{CompletionRequest, CompletionResponse, LlmError};

/// Stateless LLM client - each call is independent
///
/// This is the core abstraction for interacting with language models. A call
/// is a single attempt with a bounded timeout: there is no retry loop here.
/// Failure routes the caller straight to its deterministic fallback, which
/// keeps chat latency bounded and predictable.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Send a single completion request (blocking until complete or timeout)
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, LlmError>;
}

/// Mock client support
///
/// Not test-gated so integration tests in `tests/` can drive the responder
/// and pipeline without a provider.
pub mod mock {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;
    use tracing::debug;

    /// Mock LLM client for unit tests
    ///
    /// Returns canned responses in order, or a scripted error on every call.
    pub struct MockLlmClient {
        responses: Vec<CompletionResponse>,
        always_fail: bool,
        call_count: AtomicUsize,
    }

    impl MockLlmClient {
        pub fn new(responses: Vec<CompletionResponse>) -> Self {
            debug!(response_count = %responses.len(), "MockLlmClient::new: called");
            Self {
                responses,
                always_fail: false,
                call_count: AtomicUsize::new(0),
            }
        }

        /// A client that fails every call with a timeout error
        pub fn failing() -> Self {
            debug!("MockLlmClient::failing: called");
            Self {
                responses: vec![],
                always_fail: true,
                call_count: AtomicUsize::new(0),
            }
        }

        pub fn call_count(&self) -> usize {
            self.call_count.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl LlmClient for MockLlmClient {
        async fn complete(&self, _request: CompletionRequest) -> Result<CompletionResponse, LlmError> {
            debug!("MockLlmClient::complete: called");
            let idx = self.call_count.fetch_add(1, Ordering::SeqCst);
            if self.always_fail {
                debug!("MockLlmClient::complete: scripted failure");
                return Err(LlmError::Timeout(Duration::from_secs(30)));
            }
            self.responses.get(idx).cloned().ok_or_else(|| {
                debug!("MockLlmClient::complete: no more mock responses");
                LlmError::InvalidResponse("No more mock responses".to_string())
            })
        }
    }

}
