//! Exemption classification
//!
//! Trusted commands are checked first against the lower-cased raw command,
//! then safe-content markers against the payload. First hit wins.

use once_cell::sync::Lazy;
use regex::RegexSet;

use crate::rules::exemptions::{SAFE_CONTENT, TRUSTED_COMMANDS};
use crate::rules::Exemption;

static COMMAND_SET: Lazy<RegexSet> = Lazy::new(|| {
    RegexSet::new(TRUSTED_COMMANDS.iter().map(|e| e.pattern))
        .unwrap_or_else(|_| RegexSet::empty())
});

static CONTENT_SET: Lazy<RegexSet> = Lazy::new(|| {
    RegexSet::new(SAFE_CONTENT.iter().map(|e| e.pattern)).unwrap_or_else(|_| RegexSet::empty())
});

/// Find the exemption that applies to a command, if any
pub fn find_exemption(command: &str, payload: &str) -> Option<&'static Exemption> {
    let lowered = command.to_lowercase();
    if let Some(index) = COMMAND_SET.matches(&lowered).iter().next() {
        return Some(&TRUSTED_COMMANDS[index]);
    }

    CONTENT_SET
        .matches(payload)
        .iter()
        .next()
        .map(|index| &SAFE_CONTENT[index])
}

/// Check if a command is exempt from danger matching.
///
/// Boolean form of [`find_exemption`] for callers that only need yes/no;
/// the engine itself uses `find_exemption` so it can name the exemption.
pub fn is_exempt(command: &str, payload: &str) -> bool {
    find_exemption(command, payload).is_some()
}
