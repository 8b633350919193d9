//! Danger signature catalog
//!
//! Catalog order is report order: a payload matching several signatures lists
//! them in the order they are declared here.

use crate::rules::{Family, Signature};

/// Every signature, in priority order
pub const CATALOG: &[Signature] = &[
    // Object creation
    Signature::new(
        "create-table",
        Family::Creation,
        r"(?i)\bCREATE\s+(?:(?:GLOBAL|LOCAL)\s+)?(?:(?:TEMP|TEMPORARY|UNLOGGED)\s+)?TABLE\b",
        "CREATE TABLE",
    ),
    Signature::new(
        "create-view",
        Family::Creation,
        r"(?i)\bCREATE\s+(?:OR\s+REPLACE\s+)?(?:(?:TEMP|TEMPORARY|RECURSIVE)\s+)?VIEW\b",
        "CREATE VIEW",
    ),
    Signature::new(
        "create-materialized-view",
        Family::Creation,
        r"(?i)\bCREATE\s+MATERIALIZED\s+VIEW\b",
        "CREATE MATERIALIZED VIEW",
    ),
    Signature::new(
        "create-function",
        Family::Creation,
        r"(?i)\bCREATE\s+(?:OR\s+REPLACE\s+)?FUNCTION\b",
        "CREATE FUNCTION",
    ),
    Signature::new(
        "create-trigger",
        Family::Creation,
        r"(?i)\bCREATE\s+(?:OR\s+REPLACE\s+)?(?:CONSTRAINT\s+)?TRIGGER\b",
        "CREATE TRIGGER",
    ),
    Signature::new(
        "create-index",
        Family::Creation,
        r"(?i)\bCREATE\s+(?:UNIQUE\s+)?INDEX\b",
        "CREATE INDEX",
    ),
    Signature::new(
        "create-type",
        Family::Creation,
        r"(?i)\bCREATE\s+TYPE\b",
        "CREATE TYPE",
    ),
    Signature::new(
        "create-schema",
        Family::Creation,
        r"(?i)\bCREATE\s+SCHEMA\b",
        "CREATE SCHEMA",
    ),
    Signature::new(
        "create-extension",
        Family::Creation,
        r"(?i)\bCREATE\s+EXTENSION\b",
        "CREATE EXTENSION",
    ),
    Signature::new(
        "create-policy",
        Family::Creation,
        r"(?i)\bCREATE\s+POLICY\b",
        "CREATE POLICY",
    ),
    // Object alteration
    Signature::new(
        "alter-table",
        Family::Alteration,
        r"(?i)\bALTER\s+TABLE\b",
        "ALTER TABLE",
    ),
    Signature::new(
        "alter-view",
        Family::Alteration,
        r"(?i)\bALTER\s+VIEW\b",
        "ALTER VIEW",
    ),
    Signature::new(
        "alter-function",
        Family::Alteration,
        r"(?i)\bALTER\s+FUNCTION\b",
        "ALTER FUNCTION",
    ),
    // Object removal
    Signature::new(
        "drop-table",
        Family::Destruction,
        r"(?i)\bDROP\s+TABLE\b",
        "DROP TABLE",
    ),
    Signature::new(
        "drop-view",
        Family::Destruction,
        r"(?i)\bDROP\s+VIEW\b",
        "DROP VIEW",
    ),
    Signature::new(
        "drop-function",
        Family::Destruction,
        r"(?i)\bDROP\s+FUNCTION\b",
        "DROP FUNCTION",
    ),
    Signature::new(
        "drop-trigger",
        Family::Destruction,
        r"(?i)\bDROP\s+TRIGGER\b",
        "DROP TRIGGER",
    ),
    Signature::new(
        "drop-index",
        Family::Destruction,
        r"(?i)\bDROP\s+INDEX\b",
        "DROP INDEX",
    ),
    Signature::new(
        "drop-schema",
        Family::Destruction,
        r"(?i)\bDROP\s+SCHEMA\b",
        "DROP SCHEMA",
    ),
    Signature::new(
        "drop-policy",
        Family::Destruction,
        r"(?i)\bDROP\s+POLICY\b",
        "DROP POLICY",
    ),
    // Bulk erasure
    Signature::new(
        "truncate",
        Family::BulkErasure,
        r"(?i)\bTRUNCATE\b",
        "TRUNCATE",
    ),
    Signature::new(
        "delete-without-where",
        Family::BulkErasure,
        r"(?i)\bDELETE\s+FROM\b",
        "DELETE without WHERE",
    )
    .unless(r"(?i)\bWHERE\b"),
    // Red flags
    Signature::new(
        "create-table-as-select",
        Family::RedFlag,
        r"(?i)\bCREATE\s+TABLE\b[^;]*\bAS\s+SELECT\b",
        "CREATE TABLE AS SELECT (backup copy)",
    ),
    Signature::new(
        "insert-storage-buckets",
        Family::RedFlag,
        r"(?i)\bINSERT\s+INTO\s+STORAGE\.BUCKETS\b",
        "INSERT INTO storage.buckets",
    ),
];

/// Look up a signature by id
pub fn by_id(id: &str) -> Option<&'static Signature> {
    CATALOG.iter().find(|s| s.id == id)
}

/// All signatures belonging to a family, in catalog order
pub fn in_family(family: Family) -> impl Iterator<Item = &'static Signature> {
    CATALOG.iter().filter(move |s| s.family == family)
}
