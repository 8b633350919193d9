//! Input parsing for Claude Code hook JSON format
//!
//! Parses the JSON input from stdin that Claude Code sends to hooks and turns
//! it into the [`Request`] the gate evaluates.

use serde::Deserialize;

use crate::engine::common::redact_credentials;

/// Main input structure from Claude Code hooks
#[derive(Debug, Deserialize)]
pub struct HookInput {
    /// Name of the tool being invoked (e.g., "Bash", "Read", "Edit")
    #[serde(default)]
    pub tool_name: String,

    /// Tool-specific input parameters
    #[serde(default)]
    pub tool_input: ToolInput,

    /// Optional session identifier
    #[serde(default)]
    pub session_id: Option<String>,
}

/// Tool-specific input. Only `command` matters to the gate; every other
/// field is ignored.
#[derive(Debug, Clone, Default)]
pub struct ToolInput {
    /// Shell command text, when present and a string
    pub command: Option<String>,
}

impl<'de> Deserialize<'de> for ToolInput {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        // Deserialize as raw JSON value first so odd shapes degrade to "no command"
        let value = serde_json::Value::deserialize(deserializer)?;

        let Some(obj) = value.as_object() else {
            return Ok(ToolInput::default());
        };

        Ok(ToolInput {
            command: obj.get("command").and_then(|v| v.as_str()).map(String::from),
        })
    }
}

impl HookInput {
    /// Parse input from JSON string
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Build the request the engine evaluates
    pub fn into_request(self) -> Request {
        Request {
            tool_name: self.tool_name,
            command: self.tool_input.command.unwrap_or_default(),
            session_id: self.session_id,
        }
    }
}

/// A single unit of work: which tool is being invoked and with what command.
///
/// Built fresh per invocation and never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// Invoking tool identifier
    pub tool_name: String,

    /// Raw command text (empty when the input carried none)
    pub command: String,

    /// Session identifier, carried through to the audit log
    pub session_id: Option<String>,
}

impl Request {
    /// Create a request for a tool and command
    pub fn new(tool_name: impl Into<String>, command: impl Into<String>) -> Self {
        Self {
            tool_name: tool_name.into(),
            command: command.into(),
            session_id: None,
        }
    }

    /// Whether the request carries any command text
    pub fn has_command(&self) -> bool {
        !self.command.trim().is_empty()
    }

    /// Get a summary of the request for logging. Credentials are redacted
    /// before truncation so a cut never lands inside an unredacted secret.
    pub fn summary(&self) -> String {
        let redacted = redact_credentials(&self.command);
        let truncated = if redacted.chars().count() > 100 {
            let head: String = redacted.chars().take(100).collect();
            format!("{}...", head)
        } else {
            redacted
        };
        format!("{}: {}", self.tool_name, truncated)
    }
}
