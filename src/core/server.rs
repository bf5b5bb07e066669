//! MCP Server implementation.
//!
//! `McpServer` is the handle every transport holds: it answers the static
//! `initialize` handshake, lists the tool catalog and forwards tool calls to
//! the dispatcher. Cloning is cheap; all clones share the same dispatcher.

use rmcp::model::{
    CallToolResult, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo, Tool,
};
use std::sync::Arc;

use super::config::Config;
use super::error::Result;
use crate::domains::generation::{TextGenerator, VertexClient};
use crate::domains::tools::{ToolArguments, ToolDispatcher, ToolError, ToolRegistry};

/// The main MCP server handle.
#[derive(Clone)]
pub struct McpServer {
    info: Arc<Implementation>,
    dispatcher: Arc<ToolDispatcher>,
}

impl McpServer {
    /// Create a server that generates text through `generator`.
    pub fn new(config: &Config, generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            info: Arc::new(Implementation {
                name: config.server.name.clone(),
                title: None,
                version: config.server.version.clone(),
                icons: None,
                website_url: None,
            }),
            dispatcher: Arc::new(ToolDispatcher::new(generator, config.generation.timeout)),
        }
    }

    /// Create a server backed by the Vertex AI client described in `config`.
    pub fn with_vertex(config: &Config) -> Result<Self> {
        let client = VertexClient::new(&config.vertex, config.generation.sampling.clone())?;
        Ok(Self::new(config, Arc::new(client)))
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.info.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.info.version
    }

    /// Answer the `initialize` handshake.
    ///
    /// Announces protocol `2025-06-18` and the tools capability only.
    pub fn initialize(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2025_06_18,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: self.info.as_ref().clone(),
            instructions: None,
        }
    }

    /// List all available tools.
    pub fn list_tools(&self) -> &'static [Tool] {
        ToolRegistry::get_all_tools()
    }

    /// Call a tool by name.
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: &ToolArguments,
    ) -> std::result::Result<CallToolResult, ToolError> {
        self.dispatcher.execute(name, arguments).await
    }
}
