//! Order flows through the full pipeline.

use crate::gateway_flows::helpers::{Gateway, MemoryBackend, gateway, order};
use rstest::rstest;
use serde_json::json;
use tollgate::audit::domain::AuditStatus;
use tollgate::gateway::domain::Disposition;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn placing_an_order_returns_its_identifier(gateway: Gateway<MemoryBackend>) {
    let response = gateway.send("POST", "/orders", order(4, 2)).await;

    assert_eq!(response.disposition, Disposition::Completed);
    assert_eq!(response.envelope.message, "Order placed.");
    let data = response.envelope.data.expect("order data returned");
    assert_eq!(data.get("order_id"), Some(&json!(4)));
    assert!(data.get("placed_at").is_some());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn duplicate_order_id_is_declined(gateway: Gateway<MemoryBackend>) {
    gateway.send("POST", "/orders", order(4, 2)).await;

    let response = gateway.send("POST", "/orders", order(4, 5)).await;

    assert_eq!(response.disposition, Disposition::Declined);
    assert_eq!(response.envelope.message, "This Order ID is already in use.");
}

#[rstest]
#[case::zero(0)]
#[case::too_many(101)]
#[tokio::test(flavor = "multi_thread")]
async fn out_of_range_quantity_is_rejected(
    gateway: Gateway<MemoryBackend>,
    #[case] quantity: i64,
) {
    let response = gateway.send("POST", "/orders", order(4, quantity)).await;

    assert_eq!(response.disposition, Disposition::Rejected);
    assert_eq!(
        response.envelope.data,
        Some(json!(["quantity must be a whole number between 1 and 100"]))
    );
    assert_eq!(
        gateway
            .trail(&response)
            .await
            .iter()
            .map(|record| record.status().clone())
            .collect::<Vec<_>>(),
        vec![AuditStatus::ValidationFailed(vec![
            "quantity must be a whole number between 1 and 100".to_owned()
        ])]
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn audit_snapshot_keeps_the_raw_payload(gateway: Gateway<MemoryBackend>) {
    let mut payload = order(4, 2);
    if let Some(object) = payload.as_object_mut() {
        object.insert("coupon".to_owned(), json!("SPRING"));
    }

    let response = gateway.send("POST", "/orders", payload.clone()).await;

    assert_eq!(response.disposition, Disposition::Rejected);
    let trail = gateway.trail(&response).await;
    let record = trail.first().expect("rejection audited");
    assert_eq!(record.snapshot(), &payload);
}
