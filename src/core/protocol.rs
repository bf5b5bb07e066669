//! JSON-RPC protocol router.
//!
//! Decodes the JSON-RPC envelope, routes on the method name and encodes the
//! outcome. Transports only deal with bytes and status codes; everything
//! JSON-RPC-shaped happens here.
//!
//! Error codes emitted:
//! - `-32601` method not found
//! - `-32603` internal/dispatch error (unknown tool, invalid params, invalid
//!   arguments)
//!
//! Malformed request bodies never reach this module; the transport rejects
//! them before an `id` is known.

use rmcp::model::{CallToolResult, Tool};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::{info, warn};

use super::McpServer;
use crate::domains::tools::{ToolArguments, ToolError};

/// JSON-RPC version string.
pub const JSONRPC_VERSION: &str = "2.0";

/// The method does not exist.
pub const METHOD_NOT_FOUND: i32 = -32601;

/// Internal JSON-RPC error.
pub const INTERNAL_ERROR: i32 = -32603;

/// JSON-RPC request structure.
///
/// Every field is optional on the wire. An absent `id` reads as `null` and
/// is echoed as such. An absent or `null` method reads as the empty name.
/// `params` keeps an explicit `null` as `Some(Value::Null)`; only an absent
/// key is `None`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JsonRpcRequest {
    #[serde(default)]
    pub jsonrpc: String,
    #[serde(default)]
    pub id: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub params: Option<Value>,
}

impl JsonRpcRequest {
    /// The method name, empty when absent or `null`.
    pub fn method_name(&self) -> &str {
        self.method.as_deref().unwrap_or_default()
    }
}

/// Deserialize a present key as `Some`, including an explicit `null`.
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// JSON-RPC response structure.
///
/// Carries exactly one of `result` or `error`; the only way to build one is
/// through [`JsonRpcResponse::success`] and [`JsonRpcResponse::error`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: String,
    pub id: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    result: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    error: Option<JsonRpcError>,
}

/// JSON-RPC error structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonRpcError {
    pub code: i32,
    pub message: String,
}

impl JsonRpcResponse {
    /// Create a success response.
    pub fn success(id: Value, result: Value) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id,
            result: Some(result),
            error: None,
        }
    }

    /// Create an error response.
    pub fn error(id: Value, code: i32, message: impl Into<String>) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id,
            result: None,
            error: Some(JsonRpcError {
                code,
                message: message.into(),
            }),
        }
    }

    /// Method not found error.
    pub fn method_not_found(id: Value, method: &str) -> Self {
        Self::error(id, METHOD_NOT_FOUND, format!("Method not found: {}", method))
    }

    /// Internal error.
    pub fn internal_error(id: Value, msg: impl Into<String>) -> Self {
        Self::error(id, INTERNAL_ERROR, msg)
    }

    /// Serialize `result` into a success response.
    fn encode<T: Serialize>(id: Value, result: &T) -> Self {
        match serde_json::to_value(result) {
            Ok(value) => Self::success(id, value),
            Err(e) => Self::internal_error(id, format!("failed to encode result: {}", e)),
        }
    }

    /// The success payload, if any.
    pub fn result(&self) -> Option<&Value> {
        self.result.as_ref()
    }

    /// The error payload, if any.
    pub fn error_payload(&self) -> Option<&JsonRpcError> {
        self.error.as_ref()
    }
}

/// The methods this server understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RpcMethod<'a> {
    Initialize,
    Initialized,
    ToolsList,
    ToolsCall,
    Unknown(&'a str),
}

impl<'a> RpcMethod<'a> {
    /// Classify a method name.
    pub fn parse(method: &'a str) -> Self {
        match method {
            "initialize" => Self::Initialize,
            "notifications/initialized" => Self::Initialized,
            "tools/list" => Self::ToolsList,
            "tools/call" => Self::ToolsCall,
            other => Self::Unknown(other),
        }
    }
}

/// Parameters of `tools/call`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CallToolParams {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub arguments: Option<ToolArguments>,
}

/// Result of `tools/list`.
#[derive(Debug, Serialize)]
pub struct ListToolsResult<'a> {
    pub tools: &'a [Tool],
}

/// Handle one JSON-RPC request.
///
/// Returns `None` for notifications, which get no JSON-RPC body at all.
pub async fn handle_request(server: &McpServer, request: JsonRpcRequest) -> Option<JsonRpcResponse> {
    let JsonRpcRequest {
        id, method, params, ..
    } = request;
    let method = method.unwrap_or_default();

    let response = match RpcMethod::parse(&method) {
        RpcMethod::Initialize => {
            info!("Processing initialize request");
            JsonRpcResponse::encode(id, &server.initialize())
        }
        RpcMethod::Initialized => {
            info!("Client sent initialized notification");
            return None;
        }
        RpcMethod::ToolsList => {
            info!("Processing tools/list request");
            JsonRpcResponse::encode(
                id,
                &ListToolsResult {
                    tools: server.list_tools(),
                },
            )
        }
        RpcMethod::ToolsCall => {
            info!("Processing tools/call request");
            match call_tool(server, params).await {
                Ok(result) => JsonRpcResponse::encode(id, &result),
                Err(e) => JsonRpcResponse::internal_error(id, e.to_string()),
            }
        }
        RpcMethod::Unknown(name) => {
            warn!("Unknown method: {}", name);
            JsonRpcResponse::method_not_found(id, name)
        }
    };

    Some(response)
}

async fn call_tool(server: &McpServer, params: Option<Value>) -> Result<CallToolResult, ToolError> {
    let params: CallToolParams = match params {
        None => return Err(ToolError::invalid_params("missing params")),
        Some(Value::Null) => CallToolParams::default(),
        Some(params) => serde_json::from_value(params)
            .map_err(|e| ToolError::invalid_params(e.to_string()))?,
    };
    let arguments = params.arguments.unwrap_or_default();

    server.call_tool(&params.name, &arguments).await
}
