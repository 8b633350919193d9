//! sql-gate - Database-change governance hook for Claude Code
//!
//! Reads one PreToolUse JSON message from stdin and exits with 0 (allow) or
//! 2 (block). On block, the rationale is written to stderr.
//!
//! # Usage
//!
//! ```bash
//! echo '{"tool_name":"Bash","tool_input":{"command":"psql -c \"DROP TABLE users\""}}' | sql-gate
//! echo $?   # 2
//!
//! # Dry-run mode (report but never block)
//! sql-gate --dry-run
//! ```

use std::env;
use std::io::{self, Read};
use std::path::Path;
use std::process;

use sql_gate::{
    audit::{AuditEntry, AuditLogger},
    config::Config,
    engine::GateEngine,
    input::HookInput,
    output::EXIT_ALLOW,
};

/// Print version information
fn print_version() {
    println!("sql-gate {}", env!("CARGO_PKG_VERSION"));
}

/// Print help message
fn print_help() {
    println!(
        r#"sql-gate - Database-change governance hook for Claude Code

USAGE:
    sql-gate [OPTIONS] < hook-input.json

OPTIONS:
    -h, --help              Print this help message
    -v, --version           Print version information
    -d, --dry-run           Warn instead of blocking
    -c, --config PATH       Path to config file
        --no-audit          Do not write the audit log

EXIT STATUS:
    0   allow (also on malformed input)
    2   block: database objects would be created, altered, or dropped

ENVIRONMENT:
    SQL_GATE_DISABLED=1     Disable all checks (still logs)
    SQL_GATE_WARN_ONLY=1    Warn but don't block

USAGE AS HOOK:
    Configure in ~/.claude/settings.json:
    {{
      "hooks": {{
        "PreToolUse": [{{
          "matcher": "Bash",
          "hooks": [{{ "type": "command", "command": "sql-gate" }}]
        }}]
      }}
    }}
"#
    );
}

/// Parse command line arguments
struct Args {
    help: bool,
    version: bool,
    dry_run: bool,
    no_audit: bool,
    config_path: Option<String>,
}

impl Args {
    fn parse() -> Self {
        let args: Vec<String> = env::args().collect();
        let mut result = Args {
            help: false,
            version: false,
            dry_run: false,
            no_audit: false,
            config_path: None,
        };

        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "-h" | "--help" => result.help = true,
                "-v" | "--version" => result.version = true,
                "-d" | "--dry-run" => result.dry_run = true,
                "--no-audit" => result.no_audit = true,
                "-c" | "--config" => {
                    if i + 1 < args.len() {
                        i += 1;
                        result.config_path = Some(args[i].clone());
                    }
                }
                arg if arg.starts_with("--config=") => {
                    let path = arg.trim_start_matches("--config=");
                    result.config_path = Some(path.to_string());
                }
                _ => {}
            }
            i += 1;
        }

        result
    }
}

fn main() {
    process::exit(run());
}

/// Evaluate one hook invocation and return the exit status
fn run() -> i32 {
    let args = Args::parse();

    // Handle help and version
    if args.help {
        print_help();
        return EXIT_ALLOW;
    }

    if args.version {
        print_version();
        return EXIT_ALLOW;
    }

    // Load configuration
    let mut config = match args.config_path {
        Some(ref path) => Config::load_from(Path::new(path)).unwrap_or_else(|e| {
            eprintln!("Warning: Failed to load config from {}: {}", path, e);
            Config::default()
        }),
        None => Config::load(),
    };

    if args.dry_run {
        config.general.warn_only = true;
    }
    if args.no_audit {
        config.general.audit_log = false;
    }

    let mut logger = AuditLogger::new(config.audit_path().as_deref());
    let engine = GateEngine::new(config);

    // Read JSON from stdin
    let mut input_json = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut input_json) {
        eprintln!("Warning: Failed to read hook input (allowing): {}", e);
        return EXIT_ALLOW;
    }

    // No input = nothing to check, allow
    if input_json.trim().is_empty() {
        return EXIT_ALLOW;
    }

    // Fail open on malformed input
    let request = match HookInput::from_json(&input_json) {
        Ok(input) => input.into_request(),
        Err(e) => {
            if let Err(log_err) = logger.log(&AuditEntry::input_error(&e.to_string())) {
                eprintln!("Warning: Failed to write audit log: {}", log_err);
            }
            return EXIT_ALLOW;
        }
    };

    let decision = engine.decide(&request);

    if let Err(e) = logger.log_decision(&request, &decision, engine.is_disabled()) {
        eprintln!("Warning: Failed to write audit log: {}", e);
    }

    let verdict = decision.render();
    if let Some(message) = verdict.message {
        eprintln!("{}", message);
    }

    verdict.exit_code
}
