//! List handler.
//!
//! `GET /api/redarbor`

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use redarbor_store::DocumentStore;
use serde_json::json;
use tracing::debug;

use crate::employee::INDEX_NAME;
use crate::error::RestResult;
use crate::state::AppState;

/// Handler for listing every employee record.
///
/// # Response
///
/// - `200 OK` with `{ "company": [record, ...] }`
/// - `500` plain text on a store failure (list errors are not reduced to a
///   generic 400 the way mutation errors are)
pub async fn list_handler<S>(State(state): State<AppState<S>>) -> RestResult<Response>
where
    S: DocumentStore,
{
    debug!("Processing employee list request");

    let records = state.store().search(None).await?;

    debug!(count = records.len(), "Returning employee list");
    Ok((StatusCode::OK, Json(json!({ INDEX_NAME: records }))).into_response())
}
