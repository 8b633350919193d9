//! Configuration loading for sql-gate
//!
//! Supports TOML configuration with embedded defaults. The policy catalogs
//! are compiled in; configuration only covers how the gate runs.

use serde::Deserialize;
use std::path::PathBuf;

/// Tool identifier governed by default
pub const DEFAULT_GOVERNED_TOOL: &str = "Bash";

/// General configuration section
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Tool whose commands are inspected; all others pass through
    pub governed_tool: String,

    /// Enable audit logging
    pub audit_log: bool,

    /// Path to audit log file
    pub audit_path: Option<String>,

    /// Report blocks as warnings and allow the command
    pub warn_only: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            governed_tool: DEFAULT_GOVERNED_TOOL.to_string(),
            audit_log: true,
            audit_path: Some("~/.claude/sql-gate/audit.jsonl".to_string()),
            warn_only: false,
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    pub fn load() -> Self {
        // Try to load from standard locations
        let config_paths = [
            // User-specific config
            dirs::home_dir().map(|p| p.join(".claude/sql-gate/config.toml")),
            // System-wide config
            Some(PathBuf::from("/etc/sql-gate/config.toml")),
        ];

        for path in config_paths.into_iter().flatten() {
            if path.exists() {
                match Self::load_from(&path) {
                    Ok(config) => return config,
                    Err(e) => {
                        eprintln!("Warning: Failed to load {}: {}", path.display(), e);
                    }
                }
            }
        }

        // Return defaults
        Config::default()
    }

    /// Load from a specific path
    pub fn load_from(path: &std::path::Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Expand ~ in path strings
    pub fn expand_path(path: &str) -> PathBuf {
        if let Some(rest) = path.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(rest);
            }
        }
        PathBuf::from(path)
    }

    /// Get the audit log path (expanded), or `None` when logging is off
    pub fn audit_path(&self) -> Option<PathBuf> {
        if !self.general.audit_log {
            return None;
        }
        self.general.audit_path.as_deref().map(Self::expand_path)
    }
}

/// Embedded default configuration
pub const DEFAULT_CONFIG_TOML: &str = r#"
[general]
governed_tool = "Bash"
audit_log = true
audit_path = "~/.claude/sql-gate/audit.jsonl"
warn_only = false
"#;
