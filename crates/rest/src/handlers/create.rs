//! Create handler.
//!
//! `POST /api/redarbor`

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use redarbor_store::DocumentStore;
use tracing::{debug, error};

use crate::employee::Employee;
use crate::error::{RestError, RestResult};
use crate::state::AppState;

/// Handler for creating an employee.
///
/// Validates that every required field is present and non-empty, then checks
/// that no record with the same `CompanyId` exists before inserting. Insert
/// semantics (not upsert): the existence check is the only uniqueness
/// guarantee, so two concurrent creates for the same id can race — the store
/// decides that outcome.
///
/// # Response
///
/// - `200 OK` with the freshly fetched record on store-confirmed creation
/// - `400` with the required-field message when validation fails
/// - `400` with the duplicate-id message when the id is taken
/// - `400` with the generic create-failure message otherwise
pub async fn create_handler<S>(
    State(state): State<AppState<S>>,
    Json(employee): Json<Employee>,
) -> RestResult<Response>
where
    S: DocumentStore,
{
    if !employee.is_valid() {
        debug!("Rejecting create request with missing required fields");
        return Err(RestError::MissingRequiredFields);
    }

    let id = employee.id().to_string();
    debug!(id = %id, "Processing employee create request");

    match state.store().get(&id).await {
        Ok(Some(_)) => return Err(RestError::AlreadyExists { id }),
        Ok(None) => {}
        Err(e) => {
            error!(id = %id, error = %e, "Existence check failed during create");
            return Err(RestError::CreateFailed { id });
        }
    }

    let document = serde_json::to_value(&employee).map_err(|e| RestError::Internal {
        message: format!("Failed to serialize employee: {}", e),
    })?;

    let outcome = match state.store().insert(&id, document).await {
        Ok(outcome) => outcome,
        Err(e) => {
            error!(id = %id, error = %e, "Insert failed");
            return Err(RestError::CreateFailed { id });
        }
    };

    if !outcome.created() {
        error!(id = %id, result = ?outcome.result, "Store did not confirm creation");
        return Err(RestError::CreateFailed { id });
    }

    debug!(id = %id, "Employee created");

    // Answer with the record as the store now holds it
    match state.store().get(&id).await {
        Ok(Some(record)) => Ok((StatusCode::OK, Json(record)).into_response()),
        _ => Ok(StatusCode::OK.into_response()),
    }
}
