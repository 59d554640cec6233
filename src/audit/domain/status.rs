//! Stage-status values recorded in the audit trail.

use std::fmt;
use thiserror::Error;

const STARTED: &str = "operation started";
const COMPLETED: &str = "operation completed";
const FAILED_PREFIX: &str = "operation failed: ";
const VALIDATION_PREFIX: &str = "validation failed: ";
const REASON_SEPARATOR: &str = "; ";
const ESCAPE: char = '\\';

/// Pipeline stage recorded for one request.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AuditStatus {
    /// The backing call is about to be issued.
    OperationStarted,
    /// The backing call returned a reply.
    OperationCompleted,
    /// The backing call faulted.
    OperationFailed(String),
    /// The request was rejected before dispatch.
    ///
    /// Reasons are rendered joined by `"; "`, with `;` and `\` inside a
    /// reason escaped by a backslash. An empty list renders with no reasons;
    /// a list holding one empty reason renders the same way and parses back
    /// as the empty list.
    ValidationFailed(Vec<String>),
}

impl AuditStatus {
    /// Returns `true` for statuses that close a started operation.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::OperationCompleted | Self::OperationFailed(_))
    }
}

impl fmt::Display for AuditStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OperationStarted => f.write_str(STARTED),
            Self::OperationCompleted => f.write_str(COMPLETED),
            Self::OperationFailed(reason) => write!(f, "{FAILED_PREFIX}{reason}"),
            Self::ValidationFailed(reasons) => {
                let escaped: Vec<String> = reasons.iter().map(|reason| escape(reason)).collect();
                write!(f, "{VALIDATION_PREFIX}{}", escaped.join(REASON_SEPARATOR))
            }
        }
    }
}

/// Error returned while parsing a stored status string.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown audit status: {0}")]
pub struct ParseAuditStatusError(pub String);

impl TryFrom<&str> for AuditStatus {
    type Error = ParseAuditStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        if value == STARTED {
            return Ok(Self::OperationStarted);
        }
        if value == COMPLETED {
            return Ok(Self::OperationCompleted);
        }
        if let Some(reason) = value.strip_prefix(FAILED_PREFIX) {
            return Ok(Self::OperationFailed(reason.to_owned()));
        }
        if let Some(reasons) = value.strip_prefix(VALIDATION_PREFIX) {
            return Ok(Self::ValidationFailed(split_reasons(reasons)));
        }
        Err(ParseAuditStatusError(value.to_owned()))
    }
}

fn escape(reason: &str) -> String {
    let mut escaped = String::with_capacity(reason.len());
    for ch in reason.chars() {
        if ch == ESCAPE || ch == ';' {
            escaped.push(ESCAPE);
        }
        escaped.push(ch);
    }
    escaped
}

fn split_reasons(text: &str) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }
    let mut reasons = Vec::new();
    let mut current = String::new();
    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            ESCAPE => {
                if let Some(next) = chars.next() {
                    current.push(next);
                }
            }
            ';' if chars.peek() == Some(&' ') => {
                chars.next();
                reasons.push(std::mem::take(&mut current));
            }
            other => current.push(other),
        }
    }
    reasons.push(current);
    reasons
}
