//! Application state for the employee REST API.

use std::sync::Arc;

use redarbor_store::DocumentStore;

use crate::config::ServerConfig;

/// Shared application state for the REST API.
///
/// Holds the single long-lived store gateway and the server configuration.
/// The gateway is constructed once at process startup and injected here, so
/// request handlers never build their own connections.
///
/// # Type Parameters
///
/// * `S` - The store gateway type (must implement [`DocumentStore`])
pub struct AppState<S> {
    /// The store gateway.
    store: Arc<S>,

    /// Server configuration.
    config: Arc<ServerConfig>,
}

// Manually implement Clone since S is wrapped in Arc and doesn't need to be Clone
impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            config: Arc::clone(&self.config),
        }
    }
}

impl<S: DocumentStore> AppState<S> {
    /// Creates a new AppState with the given gateway and configuration.
    pub fn new(store: Arc<S>, config: ServerConfig) -> Self {
        Self {
            store,
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the store gateway.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Returns a clone of the store Arc.
    pub fn store_arc(&self) -> Arc<S> {
        Arc::clone(&self.store)
    }

    /// Returns a reference to the server configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }
}
