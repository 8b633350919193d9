//! Policy data for sql-gate
//!
//! Defines the danger signature catalog and the exemption lists. Both are
//! compiled-in tables evaluated top to bottom.

pub mod exemptions;
pub mod signatures;

/// Broad category of a danger signature
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
    /// New tables, views, functions, indexes, ...
    Creation,
    /// Structural change to an existing object
    Alteration,
    /// Object removal
    Destruction,
    /// Row erasure without a filter
    BulkErasure,
    /// Composite patterns that usually hide something else
    RedFlag,
}

/// A named pattern identifying one dangerous database operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    /// Unique identifier for this signature
    pub id: &'static str,

    /// Category of operation
    pub family: Family,

    /// Regex pattern to match against the upper-cased payload
    pub pattern: &'static str,

    /// Statement-scoped guard: a statement matching `pattern` only counts
    /// when it does not also match this
    pub unless: Option<&'static str>,

    /// Human-readable name shown in the rationale
    pub label: &'static str,
}

impl Signature {
    /// Create a new signature
    pub const fn new(
        id: &'static str,
        family: Family,
        pattern: &'static str,
        label: &'static str,
    ) -> Self {
        Self {
            id,
            family,
            pattern,
            unless: None,
            label,
        }
    }

    /// Attach a statement-scoped guard
    pub const fn unless(self, guard: &'static str) -> Self {
        Self {
            unless: Some(guard),
            ..self
        }
    }
}

/// Which text an exemption is tested against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lane {
    /// The lower-cased raw command
    Command,
    /// The upper-cased extracted payload
    Content,
}

/// A rule that exempts a command from danger matching
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exemption {
    /// Unique identifier for this exemption
    pub id: &'static str,

    /// Text this exemption inspects
    pub lane: Lane,

    /// Regex pattern to match
    pub pattern: &'static str,

    /// Human-readable reason for allowing
    pub reason: &'static str,
}

impl Exemption {
    /// Create a new exemption
    pub const fn new(
        id: &'static str,
        lane: Lane,
        pattern: &'static str,
        reason: &'static str,
    ) -> Self {
        Self {
            id,
            lane,
            pattern,
            reason,
        }
    }
}
