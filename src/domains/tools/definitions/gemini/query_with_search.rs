//! Gemini query tool biased towards current information.
//!
//! There is no retrieval behind this tool: it asks the model for up-to-date
//! information through the prompt and uses the backend's recency path.

use rmcp::model::Tool;

use super::PROMPT_DESCRIPTION;
use crate::domains::generation::GenerationRequest;
use crate::domains::tools::{InputSchema, ToolArguments, ToolError};

/// Instruction prepended to every prompt sent through this tool.
pub const RECENCY_INSTRUCTION: &str =
    "Please provide current, up-to-date information if available. ";

/// Gemini Query With Search Tool implementation.
#[derive(Debug, Clone)]
pub struct GeminiQueryWithSearchTool;

impl GeminiQueryWithSearchTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "gemini_query_with_search";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Query Google's Gemini AI model optimized for current information. Use this for queries that need real-time or recent data.";

    /// Create the descriptor for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: InputSchema::object()
                .required_string("prompt", PROMPT_DESCRIPTION)
                .build(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Validate arguments and build the generation request.
    pub fn prepare(arguments: &ToolArguments) -> Result<GenerationRequest, ToolError> {
        let prompt = arguments.require_str("prompt")?;
        Ok(GenerationRequest::current(format!(
            "{}{}",
            RECENCY_INSTRUCTION, prompt
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::generation::GenerationMode;

    #[test]
    fn test_instruction_prepended() {
        let args = ToolArguments::new().with("prompt", "Latest Rust release?");
        let request = GeminiQueryWithSearchTool::prepare(&args).unwrap();
        assert_eq!(
            request.prompt,
            "Please provide current, up-to-date information if available. Latest Rust release?"
        );
        assert_eq!(request.mode, GenerationMode::Current);
    }

    #[test]
    fn test_non_string_prompt_rejected() {
        let args = ToolArguments::new().with("prompt", true);
        assert!(GeminiQueryWithSearchTool::prepare(&args).is_err());
    }
}
