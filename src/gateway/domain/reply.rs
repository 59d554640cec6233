//! Backing call results and request dispositions.

use super::BackingFault;
use crate::mutation::MutationOutcome;
use serde_json::Value;
use std::fmt;

/// Normalised result of a backing call that did not fault.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackingReply {
    /// Business success flag.
    pub success: bool,
    /// Human-readable outcome.
    pub message: String,
    /// Operation-specific payload.
    pub data: Option<Value>,
}

impl BackingReply {
    /// A successful reply.
    #[must_use]
    pub fn completed(message: impl Into<String>, data: Option<Value>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data,
        }
    }

    /// A business failure such as a conflict or missing record.
    #[must_use]
    pub fn declined(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
        }
    }

    /// Maps a protocol outcome, using `message` and `data` when applied.
    #[must_use]
    pub fn from_outcome(outcome: MutationOutcome, message: &str, data: Option<Value>) -> Self {
        match outcome {
            MutationOutcome::Applied => Self::completed(message, data),
            MutationOutcome::Conflict(rejection) | MutationOutcome::NotFound(rejection) => {
                Self::declined(rejection)
            }
        }
    }

    /// Interprets a downstream envelope-shaped body.
    ///
    /// # Errors
    ///
    /// Returns [`BackingFault::MalformedDownstreamResponse`] when the body
    /// is not an object or its `status` field is missing or not a boolean.
    pub fn from_downstream(body: &Value) -> Result<Self, BackingFault> {
        let object = body
            .as_object()
            .ok_or(BackingFault::MalformedDownstreamResponse)?;
        let success = object
            .get("status")
            .and_then(Value::as_bool)
            .ok_or(BackingFault::MalformedDownstreamResponse)?;
        let message = object
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_owned();
        let data = object.get("data").filter(|value| !value.is_null()).cloned();
        Ok(Self {
            success,
            message,
            data,
        })
    }
}

/// How a request left the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Disposition {
    /// Validation failed before any backing call.
    Rejected,
    /// No operation is bound to the method and path.
    Unrouted,
    /// The backing call succeeded.
    Completed,
    /// The backing call reported a business failure.
    Declined,
    /// The backing call faulted.
    Faulted,
}

impl Disposition {
    /// Returns the canonical lowercase label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rejected => "rejected",
            Self::Unrouted => "unrouted",
            Self::Completed => "completed",
            Self::Declined => "declined",
            Self::Faulted => "faulted",
        }
    }
}

impl fmt::Display for Disposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
