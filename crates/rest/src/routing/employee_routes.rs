//! Employee route configuration.
//!
//! Defines all routes for the employee CRUD API.

use axum::{
    Router,
    routing::{delete, get, put},
};
use redarbor_store::DocumentStore;

use crate::handlers;
use crate::state::AppState;

/// Creates all employee REST API routes.
///
/// # Routes
///
/// ## System-level
/// - `GET /health` - Health check
/// - `GET /_liveness` - Liveness probe
///
/// ## Collection-level
/// - `GET /api/redarbor[/]` - List all records
/// - `POST /api/redarbor[/]` - Create
/// - `PUT /api/redarbor[/]` - 400, id is mandatory
/// - `DELETE /api/redarbor[/]` - 400, id is mandatory
///
/// ## Instance-level
/// - `GET /api/redarbor/{id}` - Read
/// - `PUT /api/redarbor/{id}` - Merge-update
/// - `DELETE /api/redarbor/{id}` - Delete
pub fn create_routes<S>(state: AppState<S>) -> Router
where
    S: DocumentStore + 'static,
{
    // The collection path is routed both with and without a trailing slash;
    // PUT and DELETE there answer the missing-id error instead of 404/405.
    let collection = get(handlers::list_handler::<S>)
        .post(handlers::create_handler::<S>)
        .put(handlers::update_missing_id_handler)
        .delete(handlers::delete_missing_id_handler);

    Router::new()
        // System-level routes
        .route("/health", get(handlers::health_handler::<S>))
        .route("/_liveness", get(handlers::liveness_handler))
        // Collection-level routes
        .route("/api/redarbor", collection.clone())
        .route("/api/redarbor/", collection)
        // Instance-level routes
        .route("/api/redarbor/{id}", get(handlers::read_handler::<S>))
        .route("/api/redarbor/{id}", put(handlers::update_handler::<S>))
        .route(
            "/api/redarbor/{id}",
            delete(handlers::delete_handler::<S>),
        )
        // State
        .with_state(state)
}
