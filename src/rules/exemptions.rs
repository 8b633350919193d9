//! Exemption rules
//!
//! Command exemptions trust official tooling regardless of what SQL it carries.
//! Content exemptions trust payloads that look read-only or introspective.
//! Either lane alone is enough to allow the command.

use crate::rules::{Exemption, Lane};

/// Trusted command forms, tested against the lower-cased raw command
pub const TRUSTED_COMMANDS: &[Exemption] = &[
    Exemption::new(
        "supabase-migration",
        Lane::Command,
        r"\bsupabase\s+migration\b",
        "supabase migration (official CLI)",
    ),
    Exemption::new(
        "supabase-db-push",
        Lane::Command,
        r"\bsupabase\s+db\s+push\b",
        "supabase db push (applies migrations)",
    ),
    Exemption::new(
        "supabase-db-pull",
        Lane::Command,
        r"\bsupabase\s+db\s+pull\b",
        "supabase db pull (schema pull)",
    ),
    Exemption::new(
        "pg-dump",
        Lane::Command,
        r"\bpg_dump\b",
        "pg_dump (backup/export)",
    ),
    Exemption::new(
        "psql-migration-file",
        Lane::Command,
        r"\bpsql\b.*(?:\s-f|--file)\b.*migrations",
        "psql -f with an existing file under migrations/",
    ),
];

/// Benign payload markers, tested against the upper-cased payload
pub const SAFE_CONTENT: &[Exemption] = &[
    Exemption::new("sql-comment", Lane::Content, r"--", "SQL line comment"),
    Exemption::new(
        "read-only-select",
        Lane::Content,
        r"(?i)SELECT\s+.*\bFROM\b",
        "read-only query",
    ),
    Exemption::new(
        "information-schema",
        Lane::Content,
        r"(?i)information_schema",
        "metadata query",
    ),
    Exemption::new(
        "pg-catalog",
        Lane::Content,
        r"(?i)pg_catalog",
        "system catalog query",
    ),
    Exemption::new("explain", Lane::Content, r"(?i)\bEXPLAIN\b", "query plan"),
];

/// Exemption categories as they are described to the user
pub const EXEMPTION_SUMMARY: &[&str] = &[
    "supabase migration / db push / db pull (official CLI)",
    "pg_dump (backup/export)",
    "Applying existing migration files from a migrations/ directory",
    "Read-only queries, metadata introspection, EXPLAIN",
];
