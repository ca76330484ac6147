//! Common test utilities, fixtures, and mocks shared by integration tests.

use std::sync::atomic::{AtomicUsize, Ordering};

use serenity::async_trait;

use gembot::gemini::{Completion, GeminiError, GeminiResult};

/// Sample channel ID configured as the relay's target channel.
pub const SAMPLE_CHANNEL_ID: u64 = 987654321;

/// A channel ID outside the configured target channel.
pub const OTHER_CHANNEL_ID: u64 = 111222333;

/// What a [`MockCompletion`] should produce for every request.
pub enum MockOutcome {
    /// A successful completion with the given text.
    Text(String),
    /// A successful request that yielded no text.
    Withheld,
    /// A failed request.
    Fail,
}

/// Hand-rolled completion collaborator with a fixed outcome and a call
/// counter, so tests can assert exactly how many outbound requests a
/// message produced.
pub struct MockCompletion {
    outcome: MockOutcome,
    calls: AtomicUsize,
}

impl MockCompletion {
    pub fn new(outcome: MockOutcome) -> Self {
        Self {
            outcome,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Completion for MockCompletion {
    async fn generate(&self, _prompt: &str) -> GeminiResult<Option<String>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.outcome {
            MockOutcome::Text(text) => Ok(Some(text.clone())),
            MockOutcome::Withheld => Ok(None),
            MockOutcome::Fail => Err(parse_error()),
        }
    }
}

/// Manufactures a real `GeminiError` out of an unparseable body.
fn parse_error() -> GeminiError {
    GeminiError::Json(serde_json::from_str::<serde_json::Value>("not json").unwrap_err())
}
