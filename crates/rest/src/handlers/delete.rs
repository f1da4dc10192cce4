//! Delete handler.
//!
//! `DELETE /api/redarbor/{id}`

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use redarbor_store::DocumentStore;
use tracing::{debug, error};

use crate::error::{RestError, RestResult};
use crate::state::AppState;

use super::normalize_id;

/// Handler for deleting an employee.
///
/// # Response
///
/// - `200 OK` with an empty body on store-confirmed deletion
/// - `400` with the unknown-id message when no record exists for the id
/// - `400` with the generic delete-failure message otherwise
pub async fn delete_handler<S>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> RestResult<Response>
where
    S: DocumentStore,
{
    let id = normalize_id(&id);
    if id.is_empty() {
        return Err(RestError::MissingDeleteId);
    }

    debug!(id = %id, "Processing employee delete request");

    match state.store().get(&id).await {
        Ok(Some(_)) => {}
        Ok(None) => return Err(RestError::NoSuchEmployee { id }),
        Err(e) => {
            error!(id = %id, error = %e, "Existence check failed during delete");
            return Err(RestError::DeleteFailed { id });
        }
    }

    match state.store().delete(&id).await {
        Ok(outcome) if outcome.deleted() => {
            debug!(id = %id, "Employee deleted");
            Ok(StatusCode::OK.into_response())
        }
        Ok(outcome) => {
            error!(id = %id, result = ?outcome.result, "Store did not confirm deletion");
            Err(RestError::DeleteFailed { id })
        }
        Err(e) => {
            error!(id = %id, error = %e, "Delete failed");
            Err(RestError::DeleteFailed { id })
        }
    }
}

/// Handler for DELETE on the collection path, where no id can be present.
pub async fn delete_missing_id_handler() -> RestResult<Response> {
    Err(RestError::MissingDeleteId)
}
