//! Generation domain module.
//!
//! This module holds the text-generation capability the tools delegate to.
//! The tools domain only ever sees the [`TextGenerator`] trait; the concrete
//! Vertex AI client lives in `vertex.rs` and is injected at startup.
//!
//! ## Architecture
//!
//! - `sampling.rs` - Fixed sampling configuration chosen once at startup
//! - `vertex.rs` - Vertex AI `generateContent` client
//! - `error.rs` - Backend error types

mod error;
mod sampling;
pub mod vertex;

#[cfg(test)]
pub(crate) mod testing;

use async_trait::async_trait;

pub use error::GenerationError;
pub use sampling::SamplingConfig;
pub use vertex::VertexClient;

/// Which flavour of generation a tool asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationMode {
    /// Plain generation under the startup sampling configuration.
    Standard,
    /// Generation biased towards current, up-to-date information.
    Current,
}

/// A prompt ready to be sent to the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub prompt: String,
    pub mode: GenerationMode,
}

impl GenerationRequest {
    /// A request for plain generation.
    pub fn standard(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            mode: GenerationMode::Standard,
        }
    }

    /// A request for recency-biased generation.
    pub fn current(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            mode: GenerationMode::Current,
        }
    }
}

/// Capability to turn a prompt into text.
///
/// Implementations are shared across all in-flight requests, so they must be
/// `Send + Sync` and must not keep per-request state.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate text for the prompt.
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError>;

    /// Generate text for a prompt that asks for current information.
    ///
    /// Backends without a dedicated recency path fall back to [`generate`].
    ///
    /// [`generate`]: TextGenerator::generate
    async fn generate_current(&self, prompt: &str) -> Result<String, GenerationError> {
        self.generate(prompt).await
    }
}
