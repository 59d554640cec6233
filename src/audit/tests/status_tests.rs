//! Unit tests for audit status rendering and parsing.

use crate::audit::domain::{AuditStatus, ParseAuditStatusError};
use rstest::rstest;

#[rstest]
#[case(AuditStatus::OperationStarted, "operation started")]
#[case(AuditStatus::OperationCompleted, "operation completed")]
#[case(
    AuditStatus::OperationFailed("store failure: connection refused".to_owned()),
    "operation failed: store failure: connection refused"
)]
#[case(
    AuditStatus::ValidationFailed(vec![
        "Missing required field: id".to_owned(),
        "Unexpected field: extra".to_owned(),
    ]),
    "validation failed: Missing required field: id; Unexpected field: extra"
)]
#[case(AuditStatus::ValidationFailed(Vec::new()), "validation failed: ")]
#[case(
    AuditStatus::ValidationFailed(vec![
        "Unexpected field: a; b".to_owned(),
        "Unexpected field: c\\d".to_owned(),
    ]),
    "validation failed: Unexpected field: a\\; b; Unexpected field: c\\\\d"
)]
fn status_renders_and_parses_stage_strings(#[case] status: AuditStatus, #[case] text: &str) {
    assert_eq!(status.to_string(), text);
    assert_eq!(AuditStatus::try_from(text), Ok(status));
}

#[rstest]
fn only_completion_and_failure_are_terminal() {
    assert!(!AuditStatus::OperationStarted.is_terminal());
    assert!(!AuditStatus::ValidationFailed(Vec::new()).is_terminal());
    assert!(AuditStatus::OperationCompleted.is_terminal());
    assert!(AuditStatus::OperationFailed("operation aborted".to_owned()).is_terminal());
}

#[rstest]
fn unknown_status_text_is_rejected() {
    assert_eq!(
        AuditStatus::try_from("operation paused"),
        Err(ParseAuditStatusError("operation paused".to_owned()))
    );
}
