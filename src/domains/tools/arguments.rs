//! Tool call arguments.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::ToolError;

/// Arguments of a `tools/call`, as decoded from `params.arguments`.
///
/// Values are dynamically typed; tools read them only through the typed
/// accessors below. Keys no tool asks for are kept but never looked at.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ToolArguments(Map<String, Value>);

impl ToolArguments {
    /// Empty arguments.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Raw value of an argument.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// A required string argument.
    ///
    /// Missing and non-string values are both reported as
    /// [`ToolError::ExpectedString`].
    pub fn require_str(&self, key: &str) -> Result<&str, ToolError> {
        self.0
            .get(key)
            .and_then(Value::as_str)
            .ok_or_else(|| ToolError::expected_string(key))
    }

    /// An optional string argument; anything that is not a string reads as "".
    pub fn optional_str(&self, key: &str) -> &str {
        self.0.get(key).and_then(Value::as_str).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_require_str_present() {
        let args = ToolArguments::new().with("prompt", "hi");
        assert_eq!(args.require_str("prompt"), Ok("hi"));
    }

    #[test]
    fn test_require_str_missing_or_mistyped() {
        let args = ToolArguments::new().with("prompt", 42);
        assert_eq!(
            args.require_str("prompt"),
            Err(ToolError::expected_string("prompt"))
        );
        assert_eq!(
            args.require_str("code").unwrap_err().to_string(),
            "code must be a string"
        );
    }

    #[test]
    fn test_optional_str_defaults_to_empty() {
        let args = ToolArguments::new().with("focus", json!(["security"]));
        assert_eq!(args.optional_str("focus"), "");
        assert_eq!(args.optional_str("absent"), "");
    }

    #[test]
    fn test_decodes_from_object() {
        let args: ToolArguments =
            serde_json::from_value(json!({ "prompt": "hi", "extra": true })).unwrap();
        assert_eq!(args.require_str("prompt"), Ok("hi"));
        assert_eq!(args.get("extra"), Some(&json!(true)));
    }
}
