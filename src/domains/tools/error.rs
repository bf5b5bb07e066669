//! Tool-specific error types.

use thiserror::Error;

/// Hard faults raised while dispatching a tool call.
///
/// These abort the call and surface on the JSON-RPC error channel. Backend
/// failures are not represented here; they come back as `isError` results.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ToolError {
    /// The requested tool is not in the registry.
    #[error("unknown tool: {0}")]
    UnknownTool(String),

    /// A required argument is missing or is not a string.
    #[error("{0} must be a string")]
    ExpectedString(String),

    /// The `tools/call` params could not be decoded.
    #[error("invalid params: {0}")]
    InvalidParams(String),
}

impl ToolError {
    /// Create a new "unknown tool" error.
    pub fn unknown_tool(name: impl Into<String>) -> Self {
        Self::UnknownTool(name.into())
    }

    /// Create a new "expected string" error for the named field.
    pub fn expected_string(field: impl Into<String>) -> Self {
        Self::ExpectedString(field.into())
    }

    /// Create a new "invalid params" error.
    pub fn invalid_params(msg: impl Into<String>) -> Self {
        Self::InvalidParams(msg.into())
    }
}
