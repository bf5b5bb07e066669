//! Tool Dispatcher - validates, routes and runs tool calls.
//!
//! Fault classification:
//! - unknown tool, missing or mistyped required argument: [`ToolError`],
//!   reported on the JSON-RPC error channel;
//! - anything going wrong in the backend, timeout included: a normal
//!   [`CallToolResult`] with `isError` set.

use std::sync::Arc;
use std::time::Duration;

use rmcp::model::CallToolResult;
use tracing::{error, info, warn};

use super::definitions::{GeminiCodeReviewTool, GeminiQueryTool, GeminiQueryWithSearchTool};
use super::{ToolArguments, ToolError, error_result, text_result};
use crate::domains::generation::{
    GenerationError, GenerationMode, GenerationRequest, TextGenerator,
};

/// Dispatches `tools/call` requests to the tool definitions and the backend.
///
/// Holds no per-call state; one instance serves all requests.
pub struct ToolDispatcher {
    generator: Arc<dyn TextGenerator>,
    timeout: Duration,
}

impl ToolDispatcher {
    /// Create a dispatcher over `generator`, bounding every backend call by
    /// `timeout`.
    pub fn new(generator: Arc<dyn TextGenerator>, timeout: Duration) -> Self {
        Self { generator, timeout }
    }

    /// Execute a tool call.
    pub async fn execute(
        &self,
        name: &str,
        arguments: &ToolArguments,
    ) -> Result<CallToolResult, ToolError> {
        let request = match name {
            GeminiQueryTool::NAME => GeminiQueryTool::prepare(arguments)?,
            GeminiQueryWithSearchTool::NAME => GeminiQueryWithSearchTool::prepare(arguments)?,
            GeminiCodeReviewTool::NAME => GeminiCodeReviewTool::prepare(arguments)?,
            _ => {
                warn!("Unknown tool requested: {}", name);
                return Err(ToolError::unknown_tool(name));
            }
        };

        info!("Executing tool {}", name);

        match self.generate(&request).await {
            Ok(text) => Ok(text_result(text)),
            Err(e) => {
                error!("Tool {} failed: {}", name, e);
                Ok(error_result(e))
            }
        }
    }

    async fn generate(&self, request: &GenerationRequest) -> Result<String, GenerationError> {
        let call = async {
            match request.mode {
                GenerationMode::Standard => self.generator.generate(&request.prompt).await,
                GenerationMode::Current => self.generator.generate_current(&request.prompt).await,
            }
        };

        tokio::time::timeout(self.timeout, call)
            .await
            .map_err(|_| GenerationError::Timeout(self.timeout))?
    }
}
