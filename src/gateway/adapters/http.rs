//! `axum` front mapping HTTP requests onto the gateway pipeline.

use crate::audit::ports::AuditStore;
use crate::gateway::{
    domain::{Disposition, InboundRequest, ResponseEnvelope},
    ports::Backend,
    services::GatewayPipeline,
};
use axum::{
    Json, Router,
    body::Bytes,
    extract::{Query, State},
    http::{HeaderMap, HeaderValue, Method, StatusCode, Uri},
};
use mockable::Clock;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::sync::Arc;

use super::ureq_transport::CORRELATION_HEADER;

/// Builds a router sending every method and path through `pipeline`.
///
/// Routing to operations happens inside the pipeline, so unknown endpoints
/// are audited like any other rejected request.
pub fn router<B, S, C>(pipeline: Arc<GatewayPipeline<B, S, C>>) -> Router
where
    B: Backend + 'static,
    S: AuditStore + 'static,
    C: Clock + Send + Sync + 'static,
{
    Router::new()
        .fallback(handle::<B, S, C>)
        .with_state(pipeline)
}

/// Maps a disposition to the HTTP status returned to the caller.
///
/// Business failures travel with `200 OK` and `status: false`; only
/// infrastructure faults use an error status.
#[must_use]
pub const fn status_code(disposition: Disposition) -> StatusCode {
    match disposition {
        Disposition::Rejected => StatusCode::BAD_REQUEST,
        Disposition::Unrouted => StatusCode::NOT_FOUND,
        Disposition::Completed | Disposition::Declined => StatusCode::OK,
        Disposition::Faulted => StatusCode::BAD_GATEWAY,
    }
}

/// Builds the pipeline payload from the query string and body.
///
/// A non-empty body is parsed as JSON; text that is not JSON is kept as a
/// string so validation rejects it and the audit snapshot shows it. With an
/// empty body, query parameters become an object of string values. A query
/// that could not be decoded arrives as `Err(raw)` and is kept as text the
/// same way.
#[must_use]
pub fn payload_from_parts(
    query: Result<BTreeMap<String, String>, String>,
    body: &[u8],
) -> Value {
    if body.iter().all(u8::is_ascii_whitespace) {
        return match query {
            Ok(params) => Value::Object(
                params
                    .into_iter()
                    .map(|(key, value)| (key, Value::String(value)))
                    .collect::<Map<String, Value>>(),
            ),
            Err(raw) => Value::String(raw),
        };
    }
    serde_json::from_slice(body)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(body).into_owned()))
}

async fn handle<B, S, C>(
    State(pipeline): State<Arc<GatewayPipeline<B, S, C>>>,
    method: Method,
    uri: Uri,
    body: Bytes,
) -> (StatusCode, HeaderMap, Json<ResponseEnvelope>)
where
    B: Backend + 'static,
    S: AuditStore + 'static,
    C: Clock + Send + Sync + 'static,
{
    let query = Query::<BTreeMap<String, String>>::try_from_uri(&uri)
        .map(|Query(params)| params)
        .map_err(|rejection| {
            tracing::debug!(error = %rejection, "query string could not be decoded");
            uri.query().unwrap_or_default().to_owned()
        });
    let request = InboundRequest::new(
        method.as_str(),
        uri.path(),
        payload_from_parts(query, &body),
    );

    let response = pipeline.handle(request).await;

    let mut headers = HeaderMap::new();
    if let Some(correlation_id) = response.correlation_id
        && let Ok(value) = HeaderValue::from_str(&correlation_id.to_string())
    {
        headers.insert(CORRELATION_HEADER, value);
    }
    (
        status_code(response.disposition),
        headers,
        Json(response.envelope),
    )
}
