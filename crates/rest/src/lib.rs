//! # redarbor-rest - Employee CRUD REST API
//!
//! HTTP surface for the Redarbor employee service: a single resource under
//! `/api/redarbor` translating HTTP verbs into document-store calls through
//! the [`redarbor_store::DocumentStore`] gateway.
//!
//! ## API Endpoints
//!
//! | Method | Path | Response |
//! |--------|------|----------|
//! | GET | `/api/redarbor[/]` | `{ "company": [record...] }` |
//! | GET | `/api/redarbor/{id}` | record JSON, or empty body if absent |
//! | POST | `/api/redarbor[/]` | created record JSON, or 400 + text error |
//! | PUT | `/api/redarbor/{id}` | empty 200, or 400 + text error |
//! | DELETE | `/api/redarbor/{id}` | empty 200, or 400 + text error |
//! | GET | `/health` | health report JSON |
//!
//! Validation and precondition failures answer 400 with the service's
//! historical plain-text Spanish messages (see [`error`]). Store failures on
//! read paths answer 500; on mutation paths they are logged and reduced to
//! the generic 400 failure messages.
//!
//! ## Architecture
//!
//! - [`config`] - Server configuration (clap + environment)
//! - [`state`] - Application state (gateway, configuration)
//! - [`error`] - Error types and plain-text rendering
//! - [`employee`] - The employee record, required fields, index mapping
//! - [`handlers`] - One handler per interaction
//! - [`routing`] - Route configuration

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod employee;
pub mod error;
pub mod handlers;
pub mod routing;
pub mod state;

// Re-export commonly used types
pub use config::ServerConfig;
pub use error::{RestError, RestResult};
pub use state::AppState;

use std::sync::Arc;

use axum::{Router, extract::DefaultBodyLimit};
use redarbor_store::DocumentStore;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info;

/// Creates the Axum application with default configuration.
///
/// For more control, use [`create_app_with_config`].
pub fn create_app<S>(store: S) -> Router
where
    S: DocumentStore + 'static,
{
    create_app_with_config(store, ServerConfig::default())
}

/// Creates the Axum application with custom configuration.
///
/// Sets up all employee routes plus the tracing and timeout middleware, and
/// CORS when enabled.
pub fn create_app_with_config<S>(store: S, config: ServerConfig) -> Router
where
    S: DocumentStore + 'static,
{
    info!(
        store = store.store_name(),
        index = store.index(),
        "Creating REST API server"
    );

    // Create application state
    let state = AppState::new(Arc::new(store), config.clone());

    // Build the router with all employee routes
    let router = routing::create_routes(state);

    // Build middleware stack
    let service_builder = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            axum::http::StatusCode::REQUEST_TIMEOUT,
            std::time::Duration::from_secs(config.request_timeout),
        ))
        .layer(DefaultBodyLimit::max(config.max_body_size));

    // Add CORS if enabled
    let router = if config.enable_cors {
        router.layer(build_cors_layer(&config))
    } else {
        router
    };

    // Apply remaining middleware
    router.layer(service_builder)
}

/// Builds the CORS layer based on configuration.
fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let mut cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if config.cors_origins == "*" {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<_> = config
            .cors_origins
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_origin(origins);
    }

    cors
}

/// Initializes the tracing subscriber for logging.
///
/// This should be called once at application startup.
///
/// # Arguments
///
/// * `level` - The log level (error, warn, info, debug, trace)
pub fn init_logging(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "redarbor_rest={level},redarbor_store={level},tower_http=debug"
        ))
    });

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}
