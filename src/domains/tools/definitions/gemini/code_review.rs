//! Gemini code review tool.
//!
//! Wraps a code snippet in a review prompt with a fixed rubric and a
//! requested JSON answer shape. Whatever the model answers is returned as
//! raw text; the answer is never parsed.

use rmcp::model::Tool;

use crate::domains::generation::GenerationRequest;
use crate::domains::tools::{InputSchema, ToolArguments, ToolError};

const REVIEW_RUBRIC: &str = r#"Please analyze:
1. Code quality and best practices
2. Potential bugs or issues
3. Performance considerations
4. Security concerns
5. Readability and maintainability
6. Specific improvements you'd recommend

Provide your response in JSON format with this structure:
{
  "summary": "Brief overall assessment",
  "quality_score": "1-10 rating",
  "issues": [
    {"severity": "high|medium|low", "type": "bug|style|performance|security", "description": "...", "suggestion": "..."}
  ],
  "strengths": ["strength 1", "strength 2"],
  "recommendations": ["recommendation 1", "recommendation 2"]
}"#;

/// Gemini Code Review Tool implementation.
#[derive(Debug, Clone)]
pub struct GeminiCodeReviewTool;

impl GeminiCodeReviewTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "gemini_code_review";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Have Gemini review code and provide improvement suggestions. Automatically analyzes code quality, potential bugs, best practices, and optimization opportunities.";

    /// Create the descriptor for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: InputSchema::object()
                .required_string("code", "The code to review")
                .required_string(
                    "language",
                    "Programming language (e.g., 'go', 'python', 'javascript')",
                )
                .string_property(
                    "focus",
                    "Optional: Specific aspects to focus on (e.g., 'security', 'performance', 'readability')",
                )
                .build(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Validate arguments and build the review prompt.
    ///
    /// `code` is checked before `language`; `focus` is optional.
    pub fn prepare(arguments: &ToolArguments) -> Result<GenerationRequest, ToolError> {
        let code = arguments.require_str("code")?;
        let language = arguments.require_str("language")?;
        let focus = arguments.optional_str("focus");

        Ok(GenerationRequest::standard(build_prompt(
            code, language, focus,
        )))
    }
}

fn build_prompt(code: &str, language: &str, focus: &str) -> String {
    let mut prompt = format!(
        "Review the following {} code and provide detailed feedback.\n\nCode:\n{}\n\n",
        language, code
    );

    if !focus.is_empty() {
        prompt.push_str(&format!("Focus specifically on: {}\n\n", focus));
    }

    prompt.push_str(REVIEW_RUBRIC);
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::generation::GenerationMode;
    use serde_json::json;

    #[test]
    fn test_prompt_embeds_code_and_language() {
        let args = ToolArguments::new()
            .with("code", "x=1")
            .with("language", "python");
        let request = GeminiCodeReviewTool::prepare(&args).unwrap();

        assert_eq!(request.mode, GenerationMode::Standard);
        assert!(request.prompt.starts_with(
            "Review the following python code and provide detailed feedback.\n\nCode:\nx=1\n\n"
        ));
        assert!(!request.prompt.contains("Focus specifically on"));
        assert!(request.prompt.contains("5. Readability and maintainability"));
        assert!(request.prompt.ends_with("}"));
    }

    #[test]
    fn test_focus_included_when_given() {
        let args = ToolArguments::new()
            .with("code", "fn main() {}")
            .with("language", "rust")
            .with("focus", "security");
        let request = GeminiCodeReviewTool::prepare(&args).unwrap();
        assert!(request
            .prompt
            .contains("Code:\nfn main() {}\n\nFocus specifically on: security\n\nPlease analyze:"));
    }

    #[test]
    fn test_non_string_focus_ignored() {
        let args = ToolArguments::new()
            .with("code", "x")
            .with("language", "go")
            .with("focus", 3);
        let request = GeminiCodeReviewTool::prepare(&args).unwrap();
        assert!(!request.prompt.contains("Focus specifically on"));
    }

    #[test]
    fn test_code_checked_before_language() {
        let err = GeminiCodeReviewTool::prepare(&ToolArguments::new()).unwrap_err();
        assert_eq!(err, ToolError::expected_string("code"));

        let args = ToolArguments::new().with("code", "x");
        let err = GeminiCodeReviewTool::prepare(&args).unwrap_err();
        assert_eq!(err.to_string(), "language must be a string");
    }

    #[test]
    fn test_schema_required_fields() {
        let tool = GeminiCodeReviewTool::to_tool();
        assert_eq!(tool.input_schema["required"], json!(["code", "language"]));
        assert_eq!(tool.input_schema["properties"].as_object().unwrap().len(), 3);
    }
}
