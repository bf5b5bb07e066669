//! Tool Registry - the static catalog of all tools.
//!
//! The catalog is built once on first use and never changes afterwards, so
//! it is shared by every request without locking.

use std::sync::LazyLock;

use rmcp::model::Tool;

use super::definitions::{GeminiCodeReviewTool, GeminiQueryTool, GeminiQueryWithSearchTool};

static TOOLS: LazyLock<Vec<Tool>> = LazyLock::new(|| {
    vec![
        GeminiQueryTool::to_tool(),
        GeminiQueryWithSearchTool::to_tool(),
        GeminiCodeReviewTool::to_tool(),
    ]
});

/// Tool registry - read-only view over the tool catalog.
pub struct ToolRegistry;

impl ToolRegistry {
    /// All tool descriptors, in definition order.
    ///
    /// This is the single source of truth for `tools/list`.
    pub fn get_all_tools() -> &'static [Tool] {
        &TOOLS
    }

    /// Get all tool names.
    pub fn tool_names() -> Vec<&'static str> {
        vec![
            GeminiQueryTool::NAME,
            GeminiQueryWithSearchTool::NAME,
            GeminiCodeReviewTool::NAME,
        ]
    }
}
