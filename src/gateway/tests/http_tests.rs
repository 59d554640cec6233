//! Unit tests for the HTTP front helpers.

use crate::gateway::adapters::http::{payload_from_parts, status_code};
use crate::gateway::domain::Disposition;
use axum::http::StatusCode;
use rstest::rstest;
use serde_json::json;
use std::collections::BTreeMap;

#[rstest]
#[case(Disposition::Rejected, StatusCode::BAD_REQUEST)]
#[case(Disposition::Unrouted, StatusCode::NOT_FOUND)]
#[case(Disposition::Completed, StatusCode::OK)]
#[case(Disposition::Declined, StatusCode::OK)]
#[case(Disposition::Faulted, StatusCode::BAD_GATEWAY)]
fn dispositions_map_to_status_codes(#[case] disposition: Disposition, #[case] code: StatusCode) {
    assert_eq!(status_code(disposition), code);
}

#[rstest]
fn query_parameters_become_string_fields_when_body_is_empty() {
    let query = BTreeMap::from([("id".to_owned(), "7".to_owned())]);
    assert_eq!(payload_from_parts(Ok(query), b""), json!({"id": "7"}));
}

#[rstest]
fn json_body_takes_precedence_over_query() {
    let query = BTreeMap::from([("id".to_owned(), "7".to_owned())]);
    assert_eq!(
        payload_from_parts(Ok(query), br#"{"email": "a@x.com"}"#),
        json!({"email": "a@x.com"})
    );
}

#[rstest]
fn non_json_body_is_kept_as_text() {
    assert_eq!(
        payload_from_parts(Ok(BTreeMap::new()), b"email=a@x.com"),
        json!("email=a@x.com")
    );
}

#[rstest]
fn undecodable_query_is_kept_as_text() {
    assert_eq!(payload_from_parts(Err("id[=7".to_owned()), b""), json!("id[=7"));
}
