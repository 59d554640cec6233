//! Account flows through the full pipeline.

use crate::gateway_flows::helpers::{Gateway, MemoryBackend, account, gateway};
use rstest::rstest;
use serde_json::json;
use std::sync::Arc;
use tollgate::audit::domain::AuditStatus;
use tollgate::gateway::domain::{Disposition, InboundRequest};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn duplicate_account_id_is_declined(gateway: Gateway<MemoryBackend>) {
    let first = gateway
        .send("POST", "/accounts", account(7, "Ada", "ada@x.com"))
        .await;
    let second = gateway
        .send("POST", "/accounts", account(7, "Grace", "grace@x.com"))
        .await;

    assert_eq!(first.disposition, Disposition::Completed);
    assert_eq!(second.disposition, Disposition::Declined);
    assert!(!second.envelope.status);
    assert_eq!(second.envelope.message, "This Account ID is already in use.");
}

#[rstest]
#[case::email(account(8, "Grace", "ada@x.com"), "This email is already in use.")]
#[case::name(account(8, "Ada", "grace@x.com"), "This account name is already in use.")]
#[case::id_before_email(account(7, "Grace", "ada@x.com"), "This Account ID is already in use.")]
#[tokio::test(flavor = "multi_thread")]
async fn create_reports_the_first_taken_value(
    gateway: Gateway<MemoryBackend>,
    #[case] payload: serde_json::Value,
    #[case] expected: &str,
) {
    gateway
        .send("POST", "/accounts", account(7, "Ada", "ada@x.com"))
        .await;

    let response = gateway.send("POST", "/accounts", payload).await;

    assert_eq!(response.disposition, Disposition::Declined);
    assert_eq!(response.envelope.message, expected);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn email_change_from_absent_address_is_not_found(gateway: Gateway<MemoryBackend>) {
    let response = gateway
        .send(
            "PUT",
            "/accounts/email",
            json!({"old_email": "a@x.com", "new_email": "b@x.com"}),
        )
        .await;

    assert_eq!(response.disposition, Disposition::Declined);
    assert_eq!(response.envelope.message, "Old email not found.");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn email_change_to_held_address_conflicts(gateway: Gateway<MemoryBackend>) {
    gateway
        .send("POST", "/accounts", account(7, "Ada", "ada@x.com"))
        .await;
    gateway
        .send("POST", "/accounts", account(8, "Grace", "grace@x.com"))
        .await;

    let response = gateway
        .send(
            "PUT",
            "/accounts/email",
            json!({"old_email": "ada@x.com", "new_email": "grace@x.com"}),
        )
        .await;

    assert_eq!(response.envelope.message, "New email is already in use.");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn renaming_frees_the_old_name(gateway: Gateway<MemoryBackend>) {
    gateway
        .send("POST", "/accounts", account(7, "Ada", "ada@x.com"))
        .await;

    let renamed = gateway
        .send(
            "PUT",
            "/accounts/name",
            json!({"old_name": "Ada", "new_name": "Countess"}),
        )
        .await;
    let reused = gateway
        .send("POST", "/accounts", account(8, "Ada", "second@x.com"))
        .await;

    assert_eq!(renamed.disposition, Disposition::Completed);
    assert_eq!(renamed.envelope.message, "Account name changed.");
    assert_eq!(reused.disposition, Disposition::Completed);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn password_change_requires_current_password(gateway: Gateway<MemoryBackend>) {
    gateway
        .send("POST", "/accounts", account(7, "Ada", "ada@x.com"))
        .await;

    let wrong = gateway
        .send(
            "PUT",
            "/accounts/password",
            json!({"id": 7, "old_password": "guess", "new_password": "engine"}),
        )
        .await;
    let right = gateway
        .send(
            "PUT",
            "/accounts/password",
            json!({"id": "7", "old_password": "correct horse", "new_password": "engine"}),
        )
        .await;

    assert_eq!(
        wrong.envelope.message,
        "Account not found or password incorrect."
    );
    assert_eq!(right.disposition, Disposition::Completed);
    assert_eq!(right.envelope.message, "Password changed.");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn concurrent_creates_of_one_id_apply_once(gateway: Gateway<MemoryBackend>) {
    let pipeline = Arc::clone(&gateway.pipeline);
    let attempts = (0..8).map(|n| {
        let racer = Arc::clone(&pipeline);
        tokio::spawn(async move {
            let payload = account(7, &format!("racer{n}"), &format!("racer{n}@x.com"));
            racer
                .handle(InboundRequest::new("POST", "/accounts", payload))
                .await
        })
    });

    let mut completed = 0;
    for attempt in attempts.collect::<Vec<_>>() {
        let response = attempt.await.expect("attempt task finished");
        if response.disposition == Disposition::Completed {
            completed += 1;
        } else {
            assert_eq!(response.envelope.message, "This Account ID is already in use.");
        }
    }

    assert_eq!(completed, 1);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn every_dispatched_request_has_one_terminal_record(gateway: Gateway<MemoryBackend>) {
    let response = gateway
        .send("POST", "/accounts", account(7, "Ada", "ada@x.com"))
        .await;

    let trail = gateway.trail(&response).await;
    let statuses: Vec<&AuditStatus> = trail.iter().map(|record| record.status()).collect();

    assert_eq!(
        statuses,
        vec![&AuditStatus::OperationStarted, &AuditStatus::OperationCompleted]
    );
    assert!(trail.iter().all(|record| record.endpoint() == "/accounts"));
    assert!(trail.iter().all(|record| record.method() == "POST"));
}
