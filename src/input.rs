//! Input parsing for Claude Code hook invocations.

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when parsing hook input.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// The raw input from Claude Code's PreToolUse hook.
///
/// Only `tool_input.file_path` matters to this hook; every other field
/// in the payload is ignored. `tool_input` itself may be absent, in
/// which case the target path resolves to the empty string.
#[derive(Debug, Clone, Deserialize)]
pub struct HookInput {
    /// The tool's input parameters as raw JSON.
    #[serde(default)]
    pub tool_input: serde_json::Value,
}

impl HookInput {
    /// Parse from JSON string.
    pub fn parse(json: &str) -> Result<Self, InputError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Get the path targeted by the edit, or "" when absent.
    pub fn file_path(&self) -> &str {
        self.tool_input
            .get("file_path")
            .and_then(|v| v.as_str())
            .unwrap_or("")
    }
}
