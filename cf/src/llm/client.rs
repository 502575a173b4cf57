//! LlmClient trait definition

use async_trait::async_trait;

use super::{CompletionRequest, CompletionResponse, LlmError};

/// Stateless chat-completion client - each call is independent
///
/// Implementations make exactly one attempt per call. Retry policy, if any,
/// belongs to the caller.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Send a single completion request and wait for the full response
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, LlmError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tracing::debug;

    /// Mock LLM client for unit tests
    ///
    /// Replays scripted outcomes in order and remembers every request it saw.
    pub struct MockLlmClient {
        outcomes: Vec<Result<CompletionResponse, LlmError>>,
        requests: Mutex<Vec<CompletionRequest>>,
        call_count: AtomicUsize,
    }

    impl MockLlmClient {
        pub fn new(outcomes: Vec<Result<CompletionResponse, LlmError>>) -> Self {
            debug!(outcome_count = %outcomes.len(), "MockLlmClient::new: called");
            Self {
                outcomes,
                requests: Mutex::new(Vec::new()),
                call_count: AtomicUsize::new(0),
            }
        }

        /// Mock that answers every call with the same text
        pub fn replying(text: &str, times: usize) -> Self {
            Self::new((0..times).map(|_| Ok(CompletionResponse::text(text))).collect())
        }

        /// Mock that fails its first call with `err`
        pub fn failing(err: LlmError) -> Self {
            Self::new(vec![Err(err)])
        }

        pub fn call_count(&self) -> usize {
            self.call_count.load(Ordering::SeqCst)
        }

        pub fn requests(&self) -> Vec<CompletionRequest> {
            self.requests.lock().map(|r| r.clone()).unwrap_or_default()
        }
    }

    #[async_trait]
    impl LlmClient for MockLlmClient {
        async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, LlmError> {
            debug!("MockLlmClient::complete: called");
            if let Ok(mut seen) = self.requests.lock() {
                seen.push(request);
            }
            let idx = self.call_count.fetch_add(1, Ordering::SeqCst);
            self.outcomes.get(idx).cloned().unwrap_or_else(|| {
                debug!("MockLlmClient::complete: no more mock outcomes");
                Err(LlmError::Unknown("No more mock outcomes".to_string()))
            })
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use std::time::Duration;

        fn request() -> CompletionRequest {
            CompletionRequest {
                system_prompt: "Test".to_string(),
                user_prompt: "Idea".to_string(),
                model: "test-model".to_string(),
                temperature: 0.5,
                max_tokens: 100,
                timeout: Duration::from_secs(1),
            }
        }

        #[tokio::test]
        async fn test_mock_client_replays_outcomes() {
            let client = MockLlmClient::new(vec![
                Ok(CompletionResponse::text("Response 1")),
                Err(LlmError::Timeout(Duration::from_secs(1))),
            ]);

            let resp = client.complete(request()).await.unwrap();
            assert_eq!(resp.content, "Response 1");

            let err = client.complete(request()).await.unwrap_err();
            assert!(matches!(err, LlmError::Timeout(_)));

            assert_eq!(client.call_count(), 2);
            assert_eq!(client.requests().len(), 2);
        }

        #[tokio::test]
        async fn test_mock_client_errors_when_exhausted() {
            let client = MockLlmClient::new(vec![]);
            let result = client.complete(request()).await;
            assert!(matches!(result, Err(LlmError::Unknown(_))));
        }
    }
}
