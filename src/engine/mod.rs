//! Gate engine for sql-gate
//!
//! Runs extraction, exemption, and signature matching for one request and
//! produces a [`Decision`].

pub mod common;
pub mod exempt;
pub mod matcher;

use crate::config::Config;
use crate::input::Request;
use crate::output::Decision;
use crate::parser;

use std::env;

/// Environment variable that disables all checks (decisions are still logged)
pub const DISABLED_ENV: &str = "SQL_GATE_DISABLED";

/// Environment variable that turns blocks into warnings
pub const WARN_ONLY_ENV: &str = "SQL_GATE_WARN_ONLY";

/// The main gate engine
pub struct GateEngine {
    config: Config,
    disabled: bool,
    warn_only: bool,
}

impl GateEngine {
    /// Create a new engine with the given configuration. Environment
    /// overrides are read once, here.
    pub fn new(config: Config) -> Self {
        let disabled = env::var_os(DISABLED_ENV).is_some();
        let warn_only = config.general.warn_only || env::var_os(WARN_ONLY_ENV).is_some();

        Self {
            config,
            disabled,
            warn_only,
        }
    }

    /// Override the disabled switch
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Override warn-only mode
    pub fn with_warn_only(mut self, warn_only: bool) -> Self {
        self.warn_only = warn_only;
        self
    }

    /// Check if the gate is disabled
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Check if warn-only mode is enabled
    pub fn is_warn_only(&self) -> bool {
        self.warn_only
    }

    /// Whether requests from this tool are inspected
    pub fn governs(&self, tool_name: &str) -> bool {
        tool_name == self.config.general.governed_tool
    }

    /// Main entry point: decide on a request
    pub fn decide(&self, request: &Request) -> Decision {
        if self.disabled {
            return Decision::allow(format!("disabled via {}", DISABLED_ENV));
        }

        if !self.governs(&request.tool_name) {
            return Decision::allow("tool not governed - passing through");
        }

        if !request.has_command() {
            return Decision::allow("no command");
        }

        let decision = self.check_command(&request.command);

        if self.warn_only {
            return decision.into_warning();
        }

        decision
    }

    /// Classify a raw command, ignoring tool routing and overrides
    pub fn check_command(&self, command: &str) -> Decision {
        let extraction = parser::extract(command);

        if let Some(exemption) = exempt::find_exemption(command, &extraction.payload) {
            return Decision::exempt(exemption);
        }

        let matches = matcher::find_danger(&extraction.payload);
        if matches.is_empty() {
            return Decision::allow(format!(
                "no dangerous SQL in {} payload",
                extraction.source.as_str()
            ));
        }

        Decision::block(matches)
    }
}
