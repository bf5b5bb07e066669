//! Test doubles for the generation capability.

use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use super::{GenerationError, GenerationMode, GenerationRequest, TextGenerator};

/// A [`TextGenerator`] that answers with a canned reply and records prompts.
pub struct StubGenerator {
    reply: Result<String, String>,
    delay: Option<Duration>,
    requests: Mutex<Vec<GenerationRequest>>,
}

impl StubGenerator {
    /// A stub that always answers `text`.
    pub fn replying(text: impl Into<String>) -> Self {
        Self {
            reply: Ok(text.into()),
            delay: None,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// A stub whose backend always answers 503 with `message` as the body.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            reply: Err(message.into()),
            delay: None,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Delay every answer by `delay`.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Requests received so far, in order.
    pub fn requests(&self) -> Vec<GenerationRequest> {
        self.requests.lock().unwrap().clone()
    }

    async fn answer(&self, prompt: &str, mode: GenerationMode) -> Result<String, GenerationError> {
        self.requests.lock().unwrap().push(GenerationRequest {
            prompt: prompt.to_string(),
            mode,
        });

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        self.reply
            .clone()
            .map_err(|body| GenerationError::Status {
                status: reqwest::StatusCode::SERVICE_UNAVAILABLE,
                body,
            })
    }
}

#[async_trait]
impl TextGenerator for StubGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        self.answer(prompt, GenerationMode::Standard).await
    }

    async fn generate_current(&self, prompt: &str) -> Result<String, GenerationError> {
        self.answer(prompt, GenerationMode::Current).await
    }
}
