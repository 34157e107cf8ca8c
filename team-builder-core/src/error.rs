use thiserror::Error;

/// Structural failure of a team block. Aborts the whole import.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("team entry {entry}: malformed header: {reason}")]
    MalformedHeader { entry: usize, reason: String },
}

impl ParseError {
    pub(crate) fn header(reason: impl Into<String>) -> Self {
        ParseError::MalformedHeader {
            entry: 0,
            reason: reason.into(),
        }
    }

    pub(crate) fn at_entry(self, index: usize) -> Self {
        match self {
            ParseError::MalformedHeader { reason, .. } => ParseError::MalformedHeader {
                entry: index,
                reason,
            },
        }
    }

    /// 1-based block number within the imported text, 0 for a single block.
    pub fn entry(&self) -> usize {
        match self {
            ParseError::MalformedHeader { entry, .. } => *entry,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("species '{0}' not found")]
    NotFound(String),
    #[error("species lookup for '{key}' failed: {reason}")]
    Unavailable { key: String, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuardError {
    #[error("{name} is banned from being a Tera Captain")]
    RestrictedEntityViolation { name: String },
}

/// Non-fatal problems found during an import.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImportWarning {
    #[error("team entry {entry}: could not resolve species '{species}': {source}")]
    SpeciesLookupFailure {
        entry: usize,
        species: String,
        source: LookupError,
    },
}
