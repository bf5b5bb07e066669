//! Error types and handling for the MCP server.
//!
//! Startup-level failures: anything that prevents the server from being
//! built. Per-request faults live in the tools domain.

use thiserror::Error;

/// A specialized Result type for MCP server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the MCP server.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration-related errors.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The generation backend could not be set up.
    #[error("Generation backend error: {0}")]
    Generation(#[from] crate::domains::generation::GenerationError),
}

impl Error {
    /// Create a new configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
