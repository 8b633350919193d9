//! Heredoc body extraction
//!
//! Handles `<<WORD`, `<<'WORD'`, `<<"WORD"`, and the `<<-`/`<<~` variants.
//! Here-strings (`<<<`) are not heredocs. Anything after the delimiter on the
//! opening line (pipes, redirects) is skipped; the body runs until the first
//! line that is exactly the delimiter.

use once_cell::sync::Lazy;
use regex::Regex;

static HEREDOC_OPENER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"<<([-~])?\s*(?:'(\w+)'|"(\w+)"|(\w+))"#).unwrap());

/// Return the body of the first terminated, non-empty heredoc
pub fn extract(command: &str) -> Option<String> {
    for cap in HEREDOC_OPENER.captures_iter(command) {
        let Some(opener) = cap.get(0) else {
            continue;
        };

        // `<<<` here-string: the regex matched on its second and third `<`
        if command[..opener.start()].ends_with('<') {
            continue;
        }

        let Some(delimiter) = cap.get(2).or_else(|| cap.get(3)).or_else(|| cap.get(4)) else {
            continue;
        };

        let rest = &command[opener.end()..];
        let Some(newline) = rest.find('\n') else {
            continue;
        };

        if let Some(body) = body_until(&rest[newline + 1..], delimiter.as_str()) {
            return Some(body);
        }
    }

    None
}

/// Collect lines up to the terminator. `None` if it never appears or the
/// body is blank.
fn body_until(text: &str, delimiter: &str) -> Option<String> {
    let mut lines: Vec<&str> = Vec::new();

    for line in text.split('\n') {
        let line = line.strip_suffix('\r').unwrap_or(line);
        if line.trim() == delimiter {
            if lines.iter().all(|l| l.trim().is_empty()) {
                return None;
            }
            return Some(lines.join("\n"));
        }
        lines.push(line);
    }

    None
}
