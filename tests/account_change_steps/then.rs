//! Then steps for account change BDD scenarios.

use super::world::{AccountWorld, run_async};
use rstest_bdd_macros::then;
use serde_json::json;
use tollgate::audit::{domain::AuditStatus, ports::AuditStore};
use tollgate::gateway::domain::{Disposition, GatewayResponse};

fn expect_outcome(
    response: &GatewayResponse,
    disposition: Disposition,
    message: &str,
) -> Result<(), eyre::Report> {
    if response.disposition != disposition || response.envelope.message != message {
        return Err(eyre::eyre!(
            "expected {disposition} with '{message}', got {} with '{}'",
            response.disposition,
            response.envelope.message
        ));
    }
    Ok(())
}

fn last_statuses(world: &AccountWorld) -> Result<Vec<AuditStatus>, eyre::Report> {
    let correlation_id = world
        .response()?
        .correlation_id
        .ok_or_else(|| eyre::eyre!("response carries no correlation id"))?;
    let records = run_async(world.audit.find_by_correlation_id(correlation_id))
        .map_err(|err| eyre::eyre!("audit lookup failed: {err}"))?;
    Ok(records
        .iter()
        .map(|record| record.status().clone())
        .collect())
}

#[then(r#"the request is declined with "{message}""#)]
fn request_declined(world: &AccountWorld, message: String) -> Result<(), eyre::Report> {
    expect_outcome(world.response()?, Disposition::Declined, &message)
}

#[then(r#"the request completes with "{message}""#)]
fn request_completes(world: &AccountWorld, message: String) -> Result<(), eyre::Report> {
    expect_outcome(world.response()?, Disposition::Completed, &message)
}

#[then(r#"the request is rejected with "{violation}""#)]
fn request_rejected(world: &AccountWorld, violation: String) -> Result<(), eyre::Report> {
    let response = world.response()?;
    expect_outcome(response, Disposition::Rejected, "Validation failed.")?;
    let listed = response
        .envelope
        .data
        .as_ref()
        .and_then(|data| data.as_array())
        .is_some_and(|items| items.contains(&json!(violation)));
    if !listed {
        return Err(eyre::eyre!(
            "expected violation '{violation}' in {:?}",
            response.envelope.data
        ));
    }
    Ok(())
}

#[then("the audit trail ends with a completed operation")]
fn audit_ends_completed(world: &AccountWorld) -> Result<(), eyre::Report> {
    let statuses = last_statuses(world)?;
    if statuses != [AuditStatus::OperationStarted, AuditStatus::OperationCompleted] {
        return Err(eyre::eyre!("unexpected audit trail: {statuses:?}"));
    }
    Ok(())
}

#[then("the audit trail records a validation failure")]
fn audit_records_validation_failure(world: &AccountWorld) -> Result<(), eyre::Report> {
    let statuses = last_statuses(world)?;
    if !matches!(statuses.as_slice(), [AuditStatus::ValidationFailed(_)]) {
        return Err(eyre::eyre!("unexpected audit trail: {statuses:?}"));
    }
    Ok(())
}
