//! Inline SQL passed as a quoted client argument
//!
//! Recognises `psql -c "..."` / `psql --command='...'` and
//! `mysql -e "..."` / `mariadb --execute '...'`. The quote that opens the
//! argument must close it; the text in between may span lines.

use once_cell::sync::Lazy;
use regex::Regex;

static INLINE_CLIENTS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        // psql -c / --command
        Regex::new(r#"(?s)\bpsql\b.*?\s(?:-c|--command)(?:\s+|=)(?:"([^"]+)"|'([^']+)')"#)
            .unwrap(),
        // mysql / mariadb -e / --execute
        Regex::new(
            r#"(?s)\b(?:mysql|mariadb)\b.*?\s(?:-e|--execute)(?:\s+|=)(?:"([^"]+)"|'([^']+)')"#,
        )
        .unwrap(),
    ]
});

/// Return the first quoted client argument, if any
pub fn extract(command: &str) -> Option<String> {
    INLINE_CLIENTS.iter().find_map(|re| {
        let caps = re.captures(command)?;
        caps.get(1)
            .or_else(|| caps.get(2))
            .map(|m| m.as_str().to_string())
    })
}
