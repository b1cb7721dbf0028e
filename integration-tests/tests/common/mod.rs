//! Shared helpers for the tool dispatch integration tests.

use serde_json::Value;
use todo_params::{ToolError, ToolParams, ToolRegistry};

/// Dispatches a call the way the host server does for `tools/call`.
pub fn call(tool: &str, args: &Value) -> Result<ToolParams, ToolError> {
    ToolRegistry::with_todo_tools().dispatch_value(tool, args)
}

/// Dispatches a call that must be rejected and returns the caller-visible message.
pub fn rejection(tool: &str, args: &Value) -> String {
    match call(tool, args) {
        Ok(params) => panic!("{tool} unexpectedly admitted: {params:?}"),
        Err(err) => err.to_string(),
    }
}
