//! Payload extraction
//!
//! Finds the SQL a shell command is about to send to a database. Strategies
//! are tried in order and the first hit wins; when none applies the raw
//! command is the payload. Extraction never fails.

pub mod heredoc;
pub mod inline;

/// Where an extracted payload came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadSource {
    /// Quoted argument to a SQL client flag (`psql -c "..."`)
    InlineClient,
    /// Heredoc body (`psql <<SQL ... SQL`)
    Heredoc,
    /// No structure found; the whole command
    Raw,
}

impl PayloadSource {
    /// Short name for logging
    pub const fn as_str(&self) -> &'static str {
        match self {
            PayloadSource::InlineClient => "inline-client",
            PayloadSource::Heredoc => "heredoc",
            PayloadSource::Raw => "raw",
        }
    }
}

/// An extraction strategy: returns the embedded SQL if its form is present
type Strategy = fn(&str) -> Option<String>;

const STRATEGIES: &[(PayloadSource, Strategy)] = &[
    (PayloadSource::InlineClient, inline::extract),
    (PayloadSource::Heredoc, heredoc::extract),
];

/// Result of payload extraction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    /// Upper-cased payload
    pub payload: String,

    /// Strategy that produced it
    pub source: PayloadSource,
}

/// Extract and case-normalize the payload, recording which strategy produced it
pub fn extract(command: &str) -> Extraction {
    let (payload, source) = STRATEGIES
        .iter()
        .find_map(|(source, strategy)| strategy(command).map(|sql| (sql, *source)))
        .unwrap_or_else(|| (command.to_string(), PayloadSource::Raw));

    Extraction {
        payload: payload.to_uppercase(),
        source,
    }
}

/// Extract the upper-cased payload of a command
pub fn extract_payload(command: &str) -> String {
    extract(command).payload
}
