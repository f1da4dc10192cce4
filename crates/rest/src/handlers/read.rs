//! Read-by-id handler.
//!
//! `GET /api/redarbor/{id}`

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use redarbor_store::DocumentStore;
use tracing::debug;

use crate::error::RestResult;
use crate::state::AppState;

use super::normalize_id;

/// Handler for reading one employee by id.
///
/// # Response
///
/// - `200 OK` with the record JSON when found
/// - `200 OK` with an empty body when absent — intentional, preserved from
///   the original service (a missing record is not an error to its clients)
/// - `500` plain text on a store failure
pub async fn read_handler<S>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> RestResult<Response>
where
    S: DocumentStore,
{
    let id = normalize_id(&id);
    debug!(id = %id, "Processing employee read request");

    match state.store().get(&id).await? {
        Some(record) => Ok((StatusCode::OK, Json(record)).into_response()),
        None => {
            debug!(id = %id, "Employee not found, returning empty body");
            Ok(StatusCode::OK.into_response())
        }
    }
}
