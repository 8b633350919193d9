//! Decisions and their rendering
//!
//! The exit status is the only authoritative part of the output: 0 lets the
//! command run, 2 blocks it. The rationale goes to stderr and is advisory.

use crate::rules::exemptions::EXEMPTION_SUMMARY;
use crate::rules::{Exemption, Signature};

/// Exit status for an allowed command
pub const EXIT_ALLOW: i32 = 0;

/// Exit status for a blocked command
pub const EXIT_BLOCK: i32 = 2;

/// Maximum number of matched signatures listed in a rationale
pub const MAX_LISTED: usize = 5;

/// Inner width of the rationale box
const BOX_WIDTH: usize = 78;

/// Decision result from the gate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Allow the command
    Allow {
        reason: String,
        exemption: Option<&'static Exemption>,
    },

    /// Block the command pending approval
    Block { matches: Vec<&'static Signature> },

    /// Would block, but warn-only mode lets it through
    Warn { matches: Vec<&'static Signature> },
}

/// Rendered decision: what the process exits with and what it prints to stderr
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub exit_code: i32,
    pub message: Option<String>,
}

impl Decision {
    /// Create an allow decision
    pub fn allow(reason: impl Into<String>) -> Self {
        Decision::Allow {
            reason: reason.into(),
            exemption: None,
        }
    }

    /// Create an allow decision naming the exemption that fired
    pub fn exempt(exemption: &'static Exemption) -> Self {
        Decision::Allow {
            reason: format!("exempt: {}", exemption.reason),
            exemption: Some(exemption),
        }
    }

    /// Create a block decision
    pub fn block(matches: Vec<&'static Signature>) -> Self {
        Decision::Block { matches }
    }

    /// Check if this decision stops the command
    pub fn is_block(&self) -> bool {
        matches!(self, Decision::Block { .. })
    }

    /// Check if the command may run (warnings included)
    pub fn is_allow(&self) -> bool {
        !self.is_block()
    }

    /// Matched signatures, in catalog order
    pub fn matches(&self) -> &[&'static Signature] {
        match self {
            Decision::Allow { .. } => &[],
            Decision::Block { matches } | Decision::Warn { matches } => matches.as_slice(),
        }
    }

    /// Labels of the matched signatures
    pub fn labels(&self) -> Vec<&'static str> {
        self.matches().iter().map(|s| s.label).collect()
    }

    /// Exemption that allowed the command, if any
    pub fn exemption(&self) -> Option<&'static Exemption> {
        match self {
            Decision::Allow { exemption, .. } => *exemption,
            _ => None,
        }
    }

    /// Downgrade a block to a warning
    pub fn into_warning(self) -> Self {
        match self {
            Decision::Block { matches } => Decision::Warn { matches },
            other => other,
        }
    }

    /// Get the reason
    pub fn reason(&self) -> String {
        match self {
            Decision::Allow { reason, .. } => reason.clone(),
            Decision::Block { .. } => format!("requires approval: {}", self.labels().join(", ")),
            Decision::Warn { .. } => format!("warn-only: {}", self.labels().join(", ")),
        }
    }

    /// Map the decision to an exit status and stderr message
    pub fn render(&self) -> Verdict {
        match self {
            Decision::Allow { .. } => Verdict {
                exit_code: EXIT_ALLOW,
                message: None,
            },
            Decision::Block { matches } => Verdict {
                exit_code: EXIT_BLOCK,
                message: Some(rationale(matches)),
            },
            Decision::Warn { matches } => Verdict {
                exit_code: EXIT_ALLOW,
                message: Some(format!(
                    "[sql-gate] Warning: would require approval ({})",
                    listed_labels(matches).join(", ")
                )),
            },
        }
    }
}

fn listed_labels(matches: &[&'static Signature]) -> Vec<&'static str> {
    matches.iter().take(MAX_LISTED).map(|s| s.label).collect()
}

/// Build the boxed rationale shown when a command is blocked
fn rationale(matches: &[&'static Signature]) -> String {
    let mut body: Vec<String> = vec![
        String::new(),
        "Detected operations:".to_string(),
    ];
    body.extend(listed_labels(matches).iter().map(|label| format!("  • {}", label)));
    if matches.len() > MAX_LISTED {
        body.push(format!("  … and {} more", matches.len() - MAX_LISTED));
    }

    body.extend(
        [
            "",
            "RULE: commands that create, alter, or drop database objects MUST:",
            "",
            "  1. Be proposed to the user BEFORE running",
            "  2. Include a justification and an impact analysis",
            "  3. Wait for explicit approval",
            "",
            "ALLOWED EXCEPTIONS:",
        ]
        .iter()
        .map(|s| s.to_string()),
    );
    body.extend(EXEMPTION_SUMMARY.iter().map(|e| format!("  • {}", e)));
    body.extend(
        [
            "",
            "ACTION: propose the change to the user and wait for approval.",
            "        Format: Schema/SQL + Justification + Impact",
            "",
        ]
        .iter()
        .map(|s| s.to_string()),
    );

    let rule = "═".repeat(BOX_WIDTH);
    let mut out = Vec::with_capacity(body.len() + 4);
    out.push(format!("╔{}╗", rule));
    out.push(boxed_line("SQL GOVERNANCE: database operation requires approval"));
    out.push(format!("╠{}╣", rule));
    out.extend(body.iter().map(|line| boxed_line(line)));
    out.push(format!("╚{}╝", rule));
    out.join("\n")
}

fn boxed_line(text: &str) -> String {
    let pad = BOX_WIDTH.saturating_sub(text.chars().count() + 2);
    format!("║  {}{}║", text, " ".repeat(pad))
}
