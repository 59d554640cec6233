//! Business outcome of a mutation protocol run.

use std::fmt;

/// Result of executing a protocol against a store scope.
///
/// Conflicts and missing records are ordinary outcomes, not errors: the
/// caller reports them as business failures. Store faults travel separately
/// as the protocol's error type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutationOutcome {
    /// Every check passed and the write was performed.
    Applied,
    /// A uniqueness check failed; nothing was written.
    Conflict(String),
    /// The record to change does not exist; nothing was written.
    NotFound(String),
}

impl MutationOutcome {
    /// Returns `true` when the write was performed.
    #[must_use]
    pub const fn is_applied(&self) -> bool {
        matches!(self, Self::Applied)
    }

    /// Returns the rejection message for a conflict or missing record.
    #[must_use]
    pub fn rejection(&self) -> Option<&str> {
        match self {
            Self::Applied => None,
            Self::Conflict(message) | Self::NotFound(message) => Some(message),
        }
    }
}

impl fmt::Display for MutationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Applied => f.write_str("applied"),
            Self::Conflict(message) => write!(f, "conflict: {message}"),
            Self::NotFound(message) => write!(f, "not found: {message}"),
        }
    }
}
