//! Update handler.
//!
//! `PUT /api/redarbor/{id}`

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use redarbor_store::DocumentStore;
use serde_json::Value;
use tracing::{debug, error};

use crate::error::{RestError, RestResult};
use crate::state::AppState;

use super::normalize_id;

/// Handler for merge-updating an employee.
///
/// The body is an arbitrary partial record merged into the stored document.
/// Required fields are deliberately not validated here — only create
/// validates them.
///
/// # Response
///
/// - `200 OK` with an empty body on store-confirmed update
/// - `400` with the unknown-id message when no record exists for the id
/// - `400` with the generic update-failure message otherwise
pub async fn update_handler<S>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
    Json(partial): Json<Value>,
) -> RestResult<Response>
where
    S: DocumentStore,
{
    let id = normalize_id(&id);
    if id.is_empty() {
        return Err(RestError::MissingUpdateId);
    }

    debug!(id = %id, "Processing employee update request");

    match state.store().get(&id).await {
        Ok(Some(_)) => {}
        Ok(None) => return Err(RestError::NoSuchEmployee { id }),
        Err(e) => {
            error!(id = %id, error = %e, "Existence check failed during update");
            return Err(RestError::UpdateFailed { id });
        }
    }

    match state.store().update(&id, partial).await {
        Ok(outcome) if outcome.updated() => {
            debug!(id = %id, "Employee updated");
            Ok(StatusCode::OK.into_response())
        }
        Ok(outcome) => {
            error!(id = %id, result = ?outcome.result, "Store did not confirm update");
            Err(RestError::UpdateFailed { id })
        }
        Err(e) => {
            error!(id = %id, error = %e, "Update failed");
            Err(RestError::UpdateFailed { id })
        }
    }
}

/// Handler for PUT on the collection path, where no id can be present.
pub async fn update_missing_id_handler() -> RestResult<Response> {
    Err(RestError::MissingUpdateId)
}
