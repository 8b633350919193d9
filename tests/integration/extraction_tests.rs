//! Integration tests for payload extraction

use sql_gate::extract_payload;
use sql_gate::parser::{extract, PayloadSource};

#[test]
fn test_heredoc_payload() {
    assert_eq!(
        extract_payload("client <<SQL\nDROP TABLE users;\nSQL"),
        "DROP TABLE USERS;"
    );
}

#[test]
fn test_inline_payload_both_quote_styles() {
    assert_eq!(extract_payload("psql -c \"drop view v\""), "DROP VIEW V");
    assert_eq!(extract_payload("psql -c 'drop view v'"), "DROP VIEW V");
}

#[test]
fn test_inline_multiline_payload() {
    let cmd = "psql \"$DATABASE_URL\" -c '\nALTER TABLE a\n  ADD COLUMN b int;\n'";
    assert_eq!(extract_payload(cmd), "\nALTER TABLE A\n  ADD COLUMN B INT;\n");
}

#[test]
fn test_piped_heredoc() {
    let extraction = extract("cat <<'EOF' | psql -h db\ncreate index i on t (x);\nEOF\n");
    assert_eq!(extraction.source, PayloadSource::Heredoc);
    assert_eq!(extraction.payload, "CREATE INDEX I ON T (X);");
}

#[test]
fn test_malformed_structures_degrade_to_raw() {
    for cmd in [
        "psql -c 'DROP TABLE users",
        "psql <<SQL\nDROP TABLE users;",
        "psql <<",
        "psql -c",
        "<<<<<<",
    ] {
        let extraction = extract(cmd);
        assert_eq!(extraction.source, PayloadSource::Raw, "{:?}", cmd);
        assert_eq!(extraction.payload, cmd.to_uppercase());
    }
}

#[test]
fn test_plain_command_is_payload() {
    let extraction = extract("supabase db reset");
    assert_eq!(extraction.source, PayloadSource::Raw);
    assert_eq!(extraction.payload, "SUPABASE DB RESET");
}
