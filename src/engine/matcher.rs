//! Danger signature matching
//!
//! One [`RegexSet`] pass over the payload finds every candidate signature.
//! Signatures with an `unless` guard are then confirmed statement by
//! statement, so `DELETE FROM a WHERE x; DELETE FROM b` still flags the
//! second delete.

use once_cell::sync::Lazy;
use regex::{Regex, RegexSet};

use crate::rules::signatures::CATALOG;
use crate::rules::Signature;

static SIGNATURE_SET: Lazy<RegexSet> = Lazy::new(|| {
    RegexSet::new(CATALOG.iter().map(|s| s.pattern)).unwrap_or_else(|_| RegexSet::empty())
});

/// Compiled pattern/guard pair for a guarded signature
struct Guard {
    pattern: Regex,
    unless: Regex,
}

static GUARDS: Lazy<Vec<Option<Guard>>> = Lazy::new(|| {
    CATALOG
        .iter()
        .map(|s| {
            let unless = s.unless?;
            Some(Guard {
                pattern: Regex::new(s.pattern).ok()?,
                unless: Regex::new(unless).ok()?,
            })
        })
        .collect()
});

/// Split a payload into statements on `;`
pub fn statements(payload: &str) -> impl Iterator<Item = &str> {
    payload.split(';').filter(|s| !s.trim().is_empty())
}

/// Every signature matching the payload, in catalog order
pub fn find_danger(payload: &str) -> Vec<&'static Signature> {
    SIGNATURE_SET
        .matches(payload)
        .into_iter()
        .filter(|&index| confirmed(index, payload))
        .map(|index| &CATALOG[index])
        .collect()
}

fn confirmed(index: usize, payload: &str) -> bool {
    match GUARDS.get(index) {
        Some(Some(guard)) => statements(payload)
            .any(|stmt| guard.pattern.is_match(stmt) && !guard.unless.is_match(stmt)),
        _ => true,
    }
}
