//! JSONL audit logging for sql-gate
//!
//! Records every decision to a JSONL file for later review.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::input::Request;
use crate::output::Decision;

/// Log level for audit entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Allowed,
    Blocked,
    Warn,
    Disabled,
    Error,
}

/// An audit log entry
#[derive(Debug, Serialize)]
pub struct AuditEntry {
    /// Timestamp of the decision
    pub timestamp: DateTime<Utc>,

    /// Log level (ALLOWED, BLOCKED, WARN, DISABLED, ERROR)
    pub level: LogLevel,

    /// Tool that was invoked
    pub tool: String,

    /// Ids of the matched signatures, in catalog order
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub signatures: Vec<&'static str>,

    /// Exemption that allowed the command
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exemption: Option<&'static str>,

    /// Redacted summary of the command
    pub input_summary: String,

    /// Reason for the decision
    pub reason: String,

    /// Session ID (if provided)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
}

impl AuditEntry {
    /// Create a new audit entry from a request and decision
    pub fn new(request: &Request, decision: &Decision, disabled: bool) -> Self {
        let level = if disabled {
            LogLevel::Disabled
        } else {
            match decision {
                Decision::Allow { .. } => LogLevel::Allowed,
                Decision::Block { .. } => LogLevel::Blocked,
                Decision::Warn { .. } => LogLevel::Warn,
            }
        };

        Self {
            timestamp: Utc::now(),
            level,
            tool: request.tool_name.clone(),
            signatures: decision.matches().iter().map(|s| s.id).collect(),
            exemption: decision.exemption().map(|e| e.id),
            input_summary: request.summary(),
            reason: decision.reason(),
            session_id: request.session_id.clone(),
        }
    }

    /// Entry for input that could not be parsed (allowed, fail-open)
    pub fn input_error(error: &str) -> Self {
        Self {
            timestamp: Utc::now(),
            level: LogLevel::Error,
            tool: String::new(),
            signatures: Vec::new(),
            exemption: None,
            input_summary: String::new(),
            reason: format!("unparsable input (allowed): {}", error),
            session_id: None,
        }
    }
}

/// Audit logger
#[derive(Default)]
pub struct AuditLogger {
    writer: Option<BufWriter<File>>,
}

impl AuditLogger {
    /// Create a new audit logger
    pub fn new(path: Option<&Path>) -> Self {
        let writer = path.and_then(|p| {
            // Ensure parent directory exists
            if let Some(parent) = p.parent() {
                let _ = std::fs::create_dir_all(parent);
            }

            OpenOptions::new()
                .create(true)
                .append(true)
                .open(p)
                .ok()
                .map(BufWriter::new)
        });

        Self { writer }
    }

    /// Log an audit entry
    pub fn log(&mut self, entry: &AuditEntry) -> Result<(), std::io::Error> {
        if let Some(ref mut writer) = self.writer {
            let json = serde_json::to_string(entry)?;
            writeln!(writer, "{}", json)?;
            writer.flush()?;
        }
        Ok(())
    }

    /// Log a decision
    pub fn log_decision(
        &mut self,
        request: &Request,
        decision: &Decision,
        disabled: bool,
    ) -> Result<(), std::io::Error> {
        let entry = AuditEntry::new(request, decision, disabled);
        self.log(&entry)
    }

    /// Check if logging is enabled
    pub fn is_enabled(&self) -> bool {
        self.writer.is_some()
    }
}
