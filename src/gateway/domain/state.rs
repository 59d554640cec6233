//! Per-request pipeline state machine.

use super::PipelineStateError;
use std::fmt;

/// Stage reached by one request in the gateway pipeline.
///
/// ```text
/// Received ──► Validated ──► Dispatched ──► BackingSuccess ──► Responded
///    │                            └───────► BackingFailure ──► Responded
///    └──► Rejected
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PipelineState {
    /// The request arrived and a correlation id was assigned.
    Received,
    /// The payload passed structural and constraint validation.
    Validated,
    /// The backing call was issued.
    Dispatched,
    /// The backing call returned a reply.
    BackingSuccess,
    /// The backing call faulted.
    BackingFailure,
    /// The normalised envelope was produced.
    Responded,
    /// Validation failed; no backing call was made.
    Rejected,
}

impl PipelineState {
    /// Returns the canonical lowercase label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Received => "received",
            Self::Validated => "validated",
            Self::Dispatched => "dispatched",
            Self::BackingSuccess => "backing_success",
            Self::BackingFailure => "backing_failure",
            Self::Responded => "responded",
            Self::Rejected => "rejected",
        }
    }

    /// Returns `true` for states with no outgoing transition.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Responded | Self::Rejected)
    }

    /// Returns `true` when `next` is a legal successor of this state.
    #[must_use]
    pub const fn can_transition_to(self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Received, Self::Validated | Self::Rejected)
                | (Self::Validated, Self::Dispatched)
                | (Self::Dispatched, Self::BackingSuccess | Self::BackingFailure)
                | (Self::BackingSuccess | Self::BackingFailure, Self::Responded)
        )
    }

    /// Moves to `next` when the transition is legal.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineStateError`] for any transition not drawn in the
    /// type-level diagram.
    pub const fn transition_to(self, next: Self) -> Result<Self, PipelineStateError> {
        if self.can_transition_to(next) {
            Ok(next)
        } else {
            Err(PipelineStateError {
                from: self,
                to: next,
            })
        }
    }
}

impl fmt::Display for PipelineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
