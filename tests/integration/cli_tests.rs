//! Integration tests for the hook binary: exit status and stderr

use std::io::Write;
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

fn run_with(args: &[&str], envs: &[(&str, &str)], stdin: &str) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_sql-gate"));
    cmd.args(args)
        .env_remove("SQL_GATE_DISABLED")
        .env_remove("SQL_GATE_WARN_ONLY")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    for (key, value) in envs {
        cmd.env(key, value);
    }

    let mut child = cmd.spawn().unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

fn run(stdin: &str) -> Output {
    run_with(&["--no-audit"], &[], stdin)
}

fn bash(command: &str) -> String {
    serde_json::json!({
        "tool_name": "Bash",
        "tool_input": { "command": command },
    })
    .to_string()
}

#[test]
fn test_block_exits_2_with_rationale_on_stderr() {
    let output = run(&bash("psql -c 'DROP TABLE users'"));
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("DROP TABLE"));
    assert!(stderr.contains("explicit approval"));
}

#[test]
fn test_allow_exits_0_silently() {
    let output = run(&bash("psql -c 'SELECT * FROM users'"));
    assert_eq!(output.status.code(), Some(0));
    assert!(output.stdout.is_empty());
    assert!(output.stderr.is_empty());
}

#[test]
fn test_malformed_json_fails_open() {
    let output = run("{\"tool_name\": \"Bash\", \"tool_input\": ");
    assert_eq!(output.status.code(), Some(0));

    let output = run("not json at all");
    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn test_empty_input_allows() {
    assert_eq!(run("").status.code(), Some(0));
}

#[test]
fn test_missing_command_allows() {
    let output = run(r#"{"tool_name":"Bash","tool_input":{}}"#);
    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn test_other_tool_allows() {
    let output = run(r#"{"tool_name":"Write","tool_input":{"command":"DROP TABLE users"}}"#);
    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn test_dry_run_warns() {
    let output = run_with(&["--no-audit", "--dry-run"], &[], &bash("TRUNCATE logs"));
    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stderr).contains("TRUNCATE"));
}

#[test]
fn test_env_overrides() {
    let input = bash("TRUNCATE logs");

    let output = run_with(&["--no-audit"], &[("SQL_GATE_DISABLED", "1")], &input);
    assert_eq!(output.status.code(), Some(0));
    assert!(output.stderr.is_empty());

    let output = run_with(&["--no-audit"], &[("SQL_GATE_WARN_ONLY", "1")], &input);
    assert_eq!(output.status.code(), Some(0));
    assert!(!output.stderr.is_empty());
}

#[test]
fn test_config_file_and_audit_log() {
    let dir = TempDir::new().unwrap();
    let audit = dir.path().join("audit.jsonl");
    let config = dir.path().join("config.toml");
    std::fs::write(
        &config,
        format!(
            "[general]\ngoverned_tool = \"shell-execute\"\naudit_path = {:?}\n",
            audit.to_string_lossy()
        ),
    )
    .unwrap();
    let config_arg = format!("--config={}", config.display());

    let blocked = serde_json::json!({
        "tool_name": "shell-execute",
        "tool_input": { "command": "PGPASSWORD=hunter2 psql -c 'DROP SCHEMA app'" },
        "session_id": "s-1",
    })
    .to_string();
    let output = run_with(&[&config_arg], &[], &blocked);
    assert_eq!(output.status.code(), Some(2));

    let output = run_with(&[&config_arg], &[], "{{{");
    assert_eq!(output.status.code(), Some(0));

    let content = std::fs::read_to_string(&audit).unwrap();
    let lines: Vec<serde_json::Value> = content
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0]["level"], "BLOCKED");
    assert_eq!(lines[0]["signatures"][0], "drop-schema");
    assert_eq!(lines[0]["session_id"], "s-1");
    assert!(!content.contains("hunter2"));
    assert_eq!(lines[1]["level"], "ERROR");
}

#[test]
fn test_version() {
    let output = run_with(&["--version"], &[], "");
    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).starts_with("sql-gate "));
}
