//! Plain Gemini query tool.

use rmcp::model::Tool;

use super::PROMPT_DESCRIPTION;
use crate::domains::generation::GenerationRequest;
use crate::domains::tools::{InputSchema, ToolArguments, ToolError};

/// Gemini Query Tool implementation.
#[derive(Debug, Clone)]
pub struct GeminiQueryTool;

impl GeminiQueryTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "gemini_query";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Query Google's Gemini AI model with any prompt. Best for general questions, coding assistance, explanations, and creative tasks.";

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
    ///
    /// The prompt is forwarded unchanged.
    pub fn prepare(arguments: &ToolArguments) -> Result<GenerationRequest, ToolError> {
        let prompt = arguments.require_str("prompt")?;
        Ok(GenerationRequest::standard(prompt))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::generation::GenerationMode;

    #[test]
    fn test_prompt_forwarded_unchanged() {
        let args = ToolArguments::new().with("prompt", "What is Rust?");
        let request = GeminiQueryTool::prepare(&args).unwrap();
        assert_eq!(request.prompt, "What is Rust?");
        assert_eq!(request.mode, GenerationMode::Standard);
    }

    #[test]
    fn test_prompt_required() {
        let err = GeminiQueryTool::prepare(&ToolArguments::new()).unwrap_err();
        assert_eq!(err, ToolError::expected_string("prompt"));
    }
}
