//! Mock text-generation adapter for testing without API calls.
//!
//! Returns scripted responses for development and testing purposes.

use crate::domain::DomainError;
use crate::ports::TextGenerationPort;
use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tracing::info;

/// Scripted outcome for one `generate` call.
#[derive(Debug, Clone)]
pub enum MockReply {
    /// Echo a rewrite built from the prompt.
    Rewrite,
    /// Return this exact text.
    Text(String),
    /// Fail with `GenerationUnavailable`.
    Fail(String),
    /// Sleep this long before answering (used to exercise timeouts).
    Hang(Duration),
}

/// Mock text-generation adapter.
///
/// Replays the scripted replies in order; once the script is exhausted every call
/// returns `MockReply::Rewrite`. Simulates network latency with a configurable delay.
pub struct MockAiAdapter {
    /// Simulated network delay in milliseconds.
    delay_ms: u64,
    script: Mutex<VecDeque<MockReply>>,
    calls: AtomicUsize,
}

impl MockAiAdapter {
    /// Create a new mock adapter with default delay (100ms).
    pub fn new() -> Self {
        Self::with_delay(100)
    }

    /// Create a mock adapter with custom delay.
    pub fn with_delay(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            script: Mutex::new(VecDeque::new()),
            calls: AtomicUsize::new(0),
        }
    }

    /// Create a mock adapter (no delay) that replays `replies` in order.
    pub fn scripted(replies: impl IntoIterator<Item = MockReply>) -> Self {
        let adapter = Self::with_delay(0);
        if let Ok(mut script) = adapter.script.lock() {
            script.extend(replies);
        }
        adapter
    }

    /// Number of `generate` calls so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn next_reply(&self) -> MockReply {
        self.script
            .lock()
            .ok()
            .and_then(|mut s| s.pop_front())
            .unwrap_or(MockReply::Rewrite)
    }
}

impl Default for MockAiAdapter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl TextGenerationPort for MockAiAdapter {
    async fn generate(&self, prompt: &str, max_tokens: u32) -> Result<String, DomainError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        info!(
            call,
            prompt_len = prompt.len(),
            max_tokens,
            "[MOCK] Simulating plan rewrite"
        );

        tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;

        match self.next_reply() {
            MockReply::Rewrite => Ok(format!(
                "[MOCK] Personalised plan rewritten from a {} character prompt.\n\n\
                 PROFILE OVERVIEW\nA simulated overview.\n\n\
                 WEEKLY WORKOUT PLAN\nA simulated week of training.\n\n\
                 DIET PLAN\nA simulated meal plan.\n\n\
                 HYDRATION & LIFESTYLE\nDrink water and sleep well.\n\n\
                 FINAL ADVICE\nConfigure a real AI API key for production.",
                prompt.len()
            )),
            MockReply::Text(text) => Ok(text),
            MockReply::Fail(reason) => Err(DomainError::GenerationUnavailable(reason)),
            MockReply::Hang(d) => {
                tokio::time::sleep(d).await;
                Ok("[MOCK] late reply".to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_adapter_default_rewrite() {
        let adapter = MockAiAdapter::with_delay(10);
        let text = adapter.generate("prompt", 100).await.unwrap();
        assert!(text.contains("PROFILE OVERVIEW"));
        assert!(text.contains("FINAL ADVICE"));
        assert_eq!(adapter.calls(), 1);
    }

    #[tokio::test]
    async fn test_mock_adapter_script_order() {
        let adapter = MockAiAdapter::scripted([
            MockReply::Fail("down".to_string()),
            MockReply::Text("hello".to_string()),
        ]);
        assert!(adapter.generate("p", 1).await.is_err());
        assert_eq!(adapter.generate("p", 1).await.unwrap(), "hello");
        assert!(adapter.generate("p", 1).await.unwrap().starts_with("[MOCK]"));
        assert_eq!(adapter.calls(), 3);
    }
}
