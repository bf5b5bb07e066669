//! Gemini tools module.
//!
//! This module provides the tools backed by the text-generation capability:
//! - `query`: Send a prompt as-is
//! - `query_with_search`: Send a prompt asking for current information
//! - `code_review`: Build a review prompt around a code snippet
//!
//! Each tool validates its own arguments and turns them into a
//! [`GenerationRequest`](crate::domains::generation::GenerationRequest);
//! the dispatcher does the rest.

pub mod code_review;
pub mod query;
pub mod query_with_search;

pub use code_review::GeminiCodeReviewTool;
pub use query::GeminiQueryTool;
pub use query_with_search::GeminiQueryWithSearchTool;

/// Description of the `prompt` argument shared by both query tools.
pub(crate) const PROMPT_DESCRIPTION: &str = "The prompt or question to send to Gemini";
