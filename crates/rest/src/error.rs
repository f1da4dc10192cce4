//! Error types for the employee REST API.
//!
//! Client-facing error bodies are plain text. The 400-level messages are the
//! literal Spanish templates the service has always answered with, so
//! existing clients keep matching on them.
//!
//! # Error mapping
//!
//! | Error | HTTP status |
//! |-------|-------------|
//! | MissingRequiredFields | 400 |
//! | AlreadyExists | 400 |
//! | NoSuchEmployee | 400 |
//! | MissingUpdateId / MissingDeleteId | 400 |
//! | CreateFailed / UpdateFailed / DeleteFailed | 400 |
//! | Internal | 500 |

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use redarbor_store::StoreError;
use thiserror::Error;

use crate::employee::REQUIRED_FIELDS;

/// Result type for REST handlers.
pub type RestResult<T> = Result<T, RestError>;

/// The primary error type for REST API operations.
#[derive(Error, Debug)]
pub enum RestError {
    /// A create body is missing at least one required field (HTTP 400).
    /// The message lists the full required set, not just the missing ones.
    #[error(
        "El documento NO contiene todos los campos obligatorios informados ({})",
        REQUIRED_FIELDS.join(", ")
    )]
    MissingRequiredFields,

    /// A record with this id already exists (HTTP 400).
    #[error("Ya existe documento para empleado con CompanyId={id}")]
    AlreadyExists {
        /// The duplicated id.
        id: String,
    },

    /// No record exists for the id of a mutating request (HTTP 400).
    #[error("NO existe documento para el empleado con CompanyId={id}")]
    NoSuchEmployee {
        /// The unknown id.
        id: String,
    },

    /// PUT without an id in the path (HTTP 400).
    #[error("Hay que indicar el Id (atributo \"CompanyId\") del employee a modificar")]
    MissingUpdateId,

    /// DELETE without an id in the path (HTTP 400).
    #[error("Hay que indicar el Id (atributo \"CompanyId\") del empleado a borrar")]
    MissingDeleteId,

    /// The store did not confirm the insert (HTTP 400).
    #[error("No se ha podido grabar el employee con CompanyId={id}")]
    CreateFailed {
        /// The id of the record that could not be written.
        id: String,
    },

    /// The store did not confirm the update (HTTP 400).
    #[error("No se ha podido actualizar el employee con CompanyId={id}")]
    UpdateFailed {
        /// The id of the record that could not be updated.
        id: String,
    },

    /// The store did not confirm the deletion (HTTP 400).
    #[error("No se ha podido borrar el employee con CompanyId={id}")]
    DeleteFailed {
        /// The id of the record that could not be deleted.
        id: String,
    },

    /// Backend failure on a read path (HTTP 500).
    #[error("Internal error: {message}")]
    Internal {
        /// Error message.
        message: String,
    },
}

impl RestError {
    /// The HTTP status this error renders as.
    pub fn status_code(&self) -> StatusCode {
        match self {
            RestError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        (self.status_code(), self.to_string()).into_response()
    }
}

impl From<StoreError> for RestError {
    fn from(err: StoreError) -> Self {
        RestError::Internal {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_message_lists_all_fields() {
        assert_eq!(
            RestError::MissingRequiredFields.to_string(),
            "El documento NO contiene todos los campos obligatorios informados \
             (CompanyId, Email, Password, PortalId, RoleId, StatusId, Username)"
        );
    }

    #[test]
    fn test_precondition_messages() {
        assert_eq!(
            RestError::AlreadyExists { id: "1".into() }.to_string(),
            "Ya existe documento para empleado con CompanyId=1"
        );
        assert_eq!(
            RestError::NoSuchEmployee { id: "7".into() }.to_string(),
            "NO existe documento para el empleado con CompanyId=7"
        );
        assert_eq!(
            RestError::MissingUpdateId.to_string(),
            "Hay que indicar el Id (atributo \"CompanyId\") del employee a modificar"
        );
        assert_eq!(
            RestError::MissingDeleteId.to_string(),
            "Hay que indicar el Id (atributo \"CompanyId\") del empleado a borrar"
        );
    }

    #[test]
    fn test_failure_messages() {
        assert_eq!(
            RestError::CreateFailed { id: "1".into() }.to_string(),
            "No se ha podido grabar el employee con CompanyId=1"
        );
        assert_eq!(
            RestError::UpdateFailed { id: "1".into() }.to_string(),
            "No se ha podido actualizar el employee con CompanyId=1"
        );
        assert_eq!(
            RestError::DeleteFailed { id: "1".into() }.to_string(),
            "No se ha podido borrar el employee con CompanyId=1"
        );
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            RestError::MissingRequiredFields.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            RestError::Internal {
                message: "boom".into()
            }
            .status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
