//! Transport layer for the MCP server.
//!
//! JSON-RPC travels over HTTP POST. The transport owns everything that is
//! not JSON-RPC: HTTP methods and status codes, cross-origin headers, body
//! decoding failures, and the shutdown grace period. Message routing is
//! delegated to [`crate::core::protocol`].

mod config;
mod error;
pub mod http;
mod service;

pub use config::HttpConfig;
pub use error::{TransportError, TransportResult};
pub use service::TransportService;
