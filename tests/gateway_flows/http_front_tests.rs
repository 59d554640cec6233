//! HTTP front and downstream relay exercised over loopback sockets.

use crate::gateway_flows::helpers::{Gateway, MemoryBackend, account, gateway, memory_backend, order};
use rstest::rstest;
use serde_json::{Value, json};
use std::sync::Arc;
use std::time::Duration;
use tollgate::audit::domain::AuditStatus;
use tollgate::audit::ports::AuditStore;
use tollgate::config::GatewayConfig;
use tollgate::gateway::{
    adapters::{RoutedBackend, UreqTransport, http::router},
    domain::{CorrelationId, Disposition},
    ports::Backend,
};
use uuid::Uuid;

struct Reply {
    status: u16,
    correlation_id: Option<String>,
    body: Value,
}

async fn serve<B: Backend + 'static>(gateway: &Gateway<B>) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind loopback listener");
    let addr = listener.local_addr().expect("listener address");
    let app = router(Arc::clone(&gateway.pipeline));
    tokio::spawn(async move { axum::serve(listener, app).await });
    format!("http://{addr}")
}

async fn call(method: &'static str, url: String, body: Option<Value>) -> Reply {
    tokio::task::spawn_blocking(move || {
        let request = ureq::request(method, &url);
        let result = match body {
            Some(payload) => request.send_json(payload),
            None => request.call(),
        };
        let response = match result {
            Ok(response) | Err(ureq::Error::Status(_, response)) => response,
            Err(ureq::Error::Transport(err)) => panic!("gateway unreachable: {err}"),
        };
        Reply {
            status: response.status(),
            correlation_id: response.header("x-correlation-id").map(str::to_owned),
            body: response.into_json().expect("JSON envelope"),
        }
    })
    .await
    .expect("blocking call finished")
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_over_http_returns_envelope_and_correlation_header(
    gateway: Gateway<MemoryBackend>,
) {
    let base = serve(&gateway).await;

    let reply = call(
        "POST",
        format!("{base}/accounts"),
        Some(account(7, "Ada", "ada@x.com")),
    )
    .await;

    assert_eq!(reply.status, 200);
    assert_eq!(reply.body.get("status"), Some(&json!(true)));
    assert_eq!(reply.body.get("message"), Some(&json!("Account created.")));
    assert!(reply.body.get("date").is_some());

    let header = reply.correlation_id.expect("correlation header set");
    let correlation_id = CorrelationId::from_uuid(Uuid::parse_str(&header).expect("uuid header"));
    let trail = gateway
        .audit
        .find_by_correlation_id(correlation_id)
        .await
        .expect("audit store available");
    assert_eq!(trail.len(), 2);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unknown_endpoint_is_not_found(gateway: Gateway<MemoryBackend>) {
    let base = serve(&gateway).await;

    let reply = call("GET", format!("{base}/catalog"), None).await;

    assert_eq!(reply.status, 404);
    assert_eq!(
        reply.body.get("message"),
        Some(&json!("Unknown endpoint: GET /catalog"))
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unexpected_field_is_a_bad_request(gateway: Gateway<MemoryBackend>) {
    let base = serve(&gateway).await;

    let reply = call(
        "PUT",
        format!("{base}/accounts/email"),
        Some(json!({"email": "a@x.com", "extra": 1})),
    )
    .await;

    assert_eq!(reply.status, 400);
    assert_eq!(reply.body.get("status"), Some(&json!(false)));
    let violations = reply.body.get("data").expect("violations returned");
    assert!(
        violations
            .as_array()
            .is_some_and(|items| items.contains(&json!("Unexpected field: extra")))
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn query_string_payload_is_accepted(gateway: Gateway<MemoryBackend>) {
    gateway
        .send("POST", "/accounts", account(7, "Ada", "ada@x.com"))
        .await;
    let base = serve(&gateway).await;

    let reply = call(
        "PUT",
        format!("{base}/accounts/password?id=7&old_password=correct%20horse&new_password=engine"),
        None,
    )
    .await;

    assert_eq!(reply.status, 200);
    assert_eq!(reply.body.get("message"), Some(&json!("Password changed.")));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn orders_are_relayed_to_a_downstream_gateway(gateway: Gateway<MemoryBackend>) {
    let downstream_base = serve(&gateway).await;
    let config = GatewayConfig::from_json(
        &json!({"routes": {"place_order": {"kind": "downstream", "base_url": downstream_base}}})
            .to_string(),
    )
    .expect("config should parse");
    let transport = Arc::new(UreqTransport::new(Duration::from_secs(5)));
    let front = Gateway::over(RoutedBackend::from_config(
        &config,
        Arc::new(memory_backend()),
        &transport,
    ));

    let placed = front.send("POST", "/orders", order(4, 2)).await;
    let repeated = front.send("POST", "/orders", order(4, 2)).await;

    assert_eq!(placed.disposition, Disposition::Completed);
    assert_eq!(placed.envelope.message, "Order placed.");
    assert_eq!(repeated.disposition, Disposition::Declined);
    assert_eq!(repeated.envelope.message, "This Order ID is already in use.");
    assert_eq!(gateway.audit.records().expect("records readable").len(), 4);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unreachable_downstream_is_a_fault() {
    let config = GatewayConfig::from_json(
        r#"{"routes": {"place_order": {"kind": "downstream", "base_url": "http://127.0.0.1:1"}}}"#,
    )
    .expect("config should parse");
    let transport = Arc::new(UreqTransport::new(Duration::from_secs(2)));
    let front = Gateway::over(RoutedBackend::from_config(
        &config,
        Arc::new(memory_backend()),
        &transport,
    ));

    let response = front.send("POST", "/orders", order(4, 2)).await;

    assert_eq!(response.disposition, Disposition::Faulted);
    assert!(
        response
            .envelope
            .message
            .starts_with("downstream call failed:")
    );
    let trail = front.trail(&response).await;
    assert!(matches!(
        trail.last().map(|record| record.status()),
        Some(AuditStatus::OperationFailed(_))
    ));
}
