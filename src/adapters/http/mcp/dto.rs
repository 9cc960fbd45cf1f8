//! Data transfer objects for the MCP tool endpoints.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::application::handlers::{InvokeToolCommand, InvokeToolError};
use crate::domain::tools::ToolDescriptor;

// ═══════════════════════════════════════════════════════════════════════════
// Request DTOs
// ═══════════════════════════════════════════════════════════════════════════

/// Body of `POST /api/mcp`.
///
/// Fields are loosely typed. `null`, `false`, `0` and `""` count as absent
/// for both `tool` and `input`; any other scalar is taken in its text form.
#[derive(Debug, Clone, Default)]
pub struct InvokeToolRequest {
    pub tool: Option<Value>,
    pub input: Option<Value>,
}

impl InvokeToolRequest {
    /// Read the fields of a parsed body.
    ///
    /// A JSON object supplies `tool` and `input`. Strings, numbers, booleans
    /// and arrays carry neither, so the request is treated as having no tool.
    ///
    /// # Errors
    ///
    /// A `null` body has no fields to read and is rejected as malformed.
    pub fn from_json(body: Value) -> Result<Self, InvokeToolError> {
        match body {
            Value::Object(mut fields) => Ok(Self {
                tool: fields.remove("tool"),
                input: fields.remove("input"),
            }),
            Value::Null => Err(InvokeToolError::MalformedBody(
                "Request body must not be null".to_string(),
            )),
            _ => Ok(Self::default()),
        }
    }

    pub fn into_command(self) -> InvokeToolCommand {
        InvokeToolCommand {
            tool: self.tool.and_then(truthy_text),
            input: self.input.and_then(truthy_text),
        }
    }
}

fn truthy_text(value: Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        other => Some(other.to_string()),
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Response DTOs
// ═══════════════════════════════════════════════════════════════════════════

/// Body of `GET /api/mcp/tools`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolListResponse {
    pub count: usize,
    pub tools: Vec<ToolDescriptor>,
}

impl From<Vec<ToolDescriptor>> for ToolListResponse {
    fn from(tools: Vec<ToolDescriptor>) -> Self {
        Self {
            count: tools.len(),
            tools,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn command(body: Value) -> InvokeToolCommand {
        InvokeToolRequest::from_json(body).unwrap().into_command()
    }

    #[test]
    fn string_fields_pass_through() {
        let cmd = command(json!({ "tool": "roll-dice", "input": "8" }));
        assert_eq!(cmd.tool.as_deref(), Some("roll-dice"));
        assert_eq!(cmd.input.as_deref(), Some("8"));
    }

    #[test]
    fn falsy_tool_counts_as_missing() {
        for tool in [json!(null), json!(""), json!(false), json!(0)] {
            assert_eq!(command(json!({ "tool": tool })).tool, None);
        }
        assert_eq!(command(json!({})).tool, None);
    }

    #[test]
    fn non_string_tool_keeps_text_form() {
        assert_eq!(command(json!({ "tool": 42 })).tool.as_deref(), Some("42"));
    }

    #[test]
    fn scalar_input_is_stringified() {
        assert_eq!(command(json!({ "tool": "x", "input": 12 })).input.as_deref(), Some("12"));
        assert_eq!(command(json!({ "tool": "x", "input": true })).input.as_deref(), Some("true"));
    }

    #[test]
    fn falsy_input_counts_as_absent() {
        for input in [json!(null), json!(""), json!(false), json!(0), json!(0.0)] {
            assert_eq!(command(json!({ "tool": "person-app", "input": input })).input, None);
        }
    }

    #[test]
    fn non_object_body_has_no_tool() {
        for body in [json!("abc"), json!(42), json!(true), json!(["roll-dice"])] {
            let cmd = command(body);
            assert_eq!(cmd.tool, None);
            assert_eq!(cmd.input, None);
        }
    }

    #[test]
    fn null_body_is_malformed() {
        assert!(matches!(
            InvokeToolRequest::from_json(Value::Null),
            Err(InvokeToolError::MalformedBody(_))
        ));
    }

    #[test]
    fn tool_list_counts_entries() {
        let response = ToolListResponse::from(vec![]);
        assert_eq!(response.count, 0);
    }
}
