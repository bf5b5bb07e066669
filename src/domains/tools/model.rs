//! Builders for the rmcp tool model.
//!
//! Descriptors are [`Tool`](rmcp::model::Tool) and results are
//! [`CallToolResult`]; this module builds them in the shape `tools/list` and
//! `tools/call` put on the wire.

use std::fmt::Display;
use std::sync::Arc;

use rmcp::model::{CallToolResult, Content, JsonObject};
use serde_json::Value;

/// Builder for a tool's `inputSchema`.
///
/// Declarative only: the dispatcher enforces presence and type of the
/// `required` entries and nothing else.
#[derive(Debug, Clone, Default)]
pub struct InputSchema {
    properties: JsonObject,
    required: Vec<String>,
}

impl InputSchema {
    /// An object schema with no properties.
    pub fn object() -> Self {
        Self::default()
    }

    /// Add an optional string property.
    pub fn string_property(mut self, name: &str, description: &str) -> Self {
        let mut property = JsonObject::new();
        property.insert("type".to_string(), Value::from("string"));
        property.insert("description".to_string(), Value::from(description));
        self.properties
            .insert(name.to_string(), Value::Object(property));
        self
    }

    /// Add a required string property.
    pub fn required_string(mut self, name: &str, description: &str) -> Self {
        self = self.string_property(name, description);
        self.required.push(name.to_string());
        self
    }

    /// Finish the schema as `{type: "object", properties, required}`.
    pub fn build(self) -> Arc<JsonObject> {
        let mut schema = JsonObject::new();
        schema.insert("type".to_string(), Value::from("object"));
        schema.insert("properties".to_string(), Value::Object(self.properties));
        schema.insert("required".to_string(), Value::from(self.required));
        Arc::new(schema)
    }
}

/// A successful result carrying `text`.
///
/// `is_error` stays unset so the key is absent from the wire form;
/// `CallToolResult::success` would serialize `"isError": false`.
pub fn text_result(text: impl Into<String>) -> CallToolResult {
    CallToolResult {
        content: vec![Content::text(text)],
        structured_content: None,
        is_error: None,
        meta: None,
    }
}

/// A soft tool error describing `cause`.
pub fn error_result(cause: impl Display) -> CallToolResult {
    CallToolResult::error(vec![Content::text(format!("Error: {}", cause))])
}
