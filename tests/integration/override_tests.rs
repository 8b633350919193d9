//! Integration tests for override mechanisms

use sql_gate::{Config, Decision, GateEngine, Request};

const DANGEROUS: &str = "psql -c 'DROP TABLE users'";

fn engine() -> GateEngine {
    GateEngine::new(Config::default())
        .with_disabled(false)
        .with_warn_only(false)
}

// ============================================================================
// Disabled
// ============================================================================

#[test]
fn test_disabled_allows_dangerous_command() {
    let request = Request::new("Bash", DANGEROUS);
    assert!(engine().decide(&request).is_block());

    let decision = engine().with_disabled(true).decide(&request);
    assert!(decision.is_allow());
    assert!(decision.matches().is_empty());
}

// ============================================================================
// Warn-only
// ============================================================================

#[test]
fn test_warn_only_converts_block_to_warn() {
    let request = Request::new("Bash", DANGEROUS);
    let decision = engine().with_warn_only(true).decide(&request);

    assert!(matches!(decision, Decision::Warn { .. }));
    assert!(decision.is_allow());
    assert_eq!(decision.labels(), vec!["DROP TABLE"]);

    let verdict = decision.render();
    assert_eq!(verdict.exit_code, 0);
    assert!(verdict.message.unwrap().contains("DROP TABLE"));
}

#[test]
fn test_warn_only_leaves_allow_untouched() {
    let request = Request::new("Bash", "ls");
    let decision = engine().with_warn_only(true).decide(&request);
    assert!(matches!(decision, Decision::Allow { .. }));
    assert!(decision.render().message.is_none());
}

// ============================================================================
// Governed tool
// ============================================================================

#[test]
fn test_governed_tool_from_config() {
    let config: Config = toml::from_str("[general]\ngoverned_tool = \"shell-execute\"\n").unwrap();
    let engine = GateEngine::new(config)
        .with_disabled(false)
        .with_warn_only(false);

    assert!(engine.decide(&Request::new("shell-execute", DANGEROUS)).is_block());
    assert!(engine.decide(&Request::new("Bash", DANGEROUS)).is_allow());
}
