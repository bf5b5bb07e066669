//! Core module containing shared infrastructure components.
//!
//! This module provides the foundational building blocks for the MCP server:
//! configuration, error handling, the JSON-RPC protocol router, the server
//! handle and the HTTP transport.

pub mod config;
pub mod error;
pub mod protocol;
pub mod server;
pub mod transport;

pub use config::{Config, LoggingConfig};
pub use error::{Error, Result};
pub use server::McpServer;
pub use transport::{HttpConfig, TransportService};
