//! sql-gate - Database-change governance for Claude Code
//!
//! Inspects a proposed Bash command before it runs and blocks it when it would
//! create, alter, or destroy database objects without explicit approval.
//!
//! # Pipeline
//!
//! - **Payload extraction**: pulls SQL out of `psql -c "..."` style arguments
//!   and heredocs, falling back to the raw command
//! - **Exemptions**: official migration tooling and read-only SQL pass through
//! - **Signature matching**: every dangerous operation is reported, in catalog order
//! - **Rendering**: exit status 0 (allow) or 2 (block) plus a rationale on stderr
//!
//! # Example
//!
//! ```
//! use sql_gate::{Config, GateEngine, HookInput};
//!
//! let engine = GateEngine::new(Config::default());
//!
//! let input = r#"{"tool_name":"Bash","tool_input":{"command":"psql -c 'DROP TABLE users'"}}"#;
//! let request = HookInput::from_json(input).unwrap().into_request();
//!
//! let decision = engine.decide(&request);
//! assert!(decision.is_block());
//! assert_eq!(decision.render().exit_code, 2);
//! ```

pub mod audit;
pub mod config;
pub mod engine;
pub mod input;
pub mod output;
pub mod parser;
pub mod rules;

// Re-exports for convenience
pub use config::Config;
pub use engine::GateEngine;
pub use input::{HookInput, Request, ToolInput};
pub use output::{Decision, Verdict};
pub use parser::extract_payload;
pub use rules::{Exemption, Signature};
