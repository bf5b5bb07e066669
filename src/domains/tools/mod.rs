//! Tools domain module.
//!
//! This module handles all tool-related functionality for the MCP server.
//! Tools are the AI-backed operations MCP clients invoke through `tools/call`.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `registry.rs` - Static tool catalog for `tools/list`
//! - `dispatcher.rs` - Argument validation, routing and result shaping
//! - `arguments.rs` - Typed access to dynamically typed call arguments
//! - `model.rs` - Schema and result builders over the rmcp model
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/` with `NAME`, `DESCRIPTION`,
//!    `to_tool()` and `prepare()`
//! 2. Export it in `definitions/mod.rs`
//! 3. Add it to the catalog in `registry.rs`
//! 4. Add a match arm in `dispatcher.rs`

mod arguments;
pub mod definitions;
mod dispatcher;
mod error;
mod model;
mod registry;

pub use arguments::ToolArguments;
pub use dispatcher::ToolDispatcher;
pub use error::ToolError;
pub use model::{InputSchema, error_result, text_result};
pub use registry::ToolRegistry;
