//! Sampling configuration for the generation backend.

use serde::{Deserialize, Serialize};

/// Fixed sampling parameters sent with every generation request.
///
/// Chosen once at startup; callers of the tools cannot change them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SamplingConfig {
    /// Sampling temperature.
    pub temperature: f32,

    /// Nucleus-sampling threshold.
    pub top_p: f32,

    /// Upper bound on generated tokens.
    pub max_output_tokens: u32,

    /// Whether the model's hidden reasoning is returned alongside the answer.
    pub include_thoughts: bool,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            top_p: 0.95,
            max_output_tokens: 8192,
            include_thoughts: false,
        }
    }
}
