//! Vertex AI MCP Server Library
//!
//! This crate exposes Gemini on Vertex AI to Model Context Protocol clients
//! as three tools, served as JSON-RPC 2.0 over HTTP.
//!
//! # Architecture
//!
//! The server is organized into the following modules:
//!
//! - **core**: Configuration, error handling, the JSON-RPC protocol router,
//!   the server handle and the HTTP transport
//! - **domains**: Business logic organized by bounded contexts
//!   - **tools**: Tool catalog, argument validation and dispatch
//!   - **generation**: The text generation backend (Vertex AI)
//!
//! # Example
//!
//! ```rust,no_run
//! use vertex_mcp_server::core::{Config, McpServer, TransportService};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let server = McpServer::with_vertex(&config)?;
//!     TransportService::new(config.transport).run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
