//! Health check endpoint handler.
//!
//! Provides a simple health check endpoint for monitoring and load balancers.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use redarbor_store::DocumentStore;
use tracing::debug;

use crate::error::RestResult;
use crate::state::AppState;

/// Handler for the health check endpoint.
///
/// Reports the backing store's health alongside the service status.
///
/// # Response
///
/// - `200 OK` - Server and store are healthy
/// - `503 Service Unavailable` - Store is unreachable or degraded
pub async fn health_handler<S>(State(state): State<AppState<S>>) -> RestResult<Response>
where
    S: DocumentStore,
{
    debug!("Processing health check request");

    let store_name = state.store().store_name();
    let (status, store_status) = match state.store().health_check().await {
        Ok(()) => (StatusCode::OK, "ok"),
        Err(_) => (StatusCode::SERVICE_UNAVAILABLE, "unavailable"),
    };

    let health_response = serde_json::json!({
        "status": if status == StatusCode::OK { "healthy" } else { "unhealthy" },
        "store": store_name,
        "checks": {
            "store": store_status
        },
        "timestamp": chrono::Utc::now().to_rfc3339()
    });

    Ok((status, Json(health_response)).into_response())
}

/// Handler for a liveness probe.
pub async fn liveness_handler() -> impl IntoResponse {
    StatusCode::OK
}
