//! Redarbor employee API server.
//!
//! Employee CRUD over HTTP, backed by Elasticsearch.

use clap::Parser;
use redarbor_rest::{ServerConfig, create_app_with_config, employee, init_logging};
use redarbor_store::DocumentStore;
use redarbor_store::backends::elasticsearch::{
    ElasticsearchAuth, ElasticsearchConfig, ElasticsearchStore,
};
use tracing::{info, warn};

/// Creates the Elasticsearch gateway from the server configuration.
fn create_store(config: &ServerConfig) -> anyhow::Result<ElasticsearchStore> {
    let auth = match (&config.es_username, &config.es_password) {
        (Some(username), Some(password)) => Some(ElasticsearchAuth::Basic {
            username: username.clone(),
            password: password.clone(),
        }),
        _ => None,
    };

    let es_config = ElasticsearchConfig {
        url: config.es_url.clone(),
        request_timeout_ms: config.es_timeout_ms,
        auth,
        ..Default::default()
    };

    info!(url = %config.es_url, index = employee::INDEX_NAME, "Initializing Elasticsearch gateway");

    let store = ElasticsearchStore::new(
        es_config,
        employee::INDEX_NAME,
        employee::index_mapping(),
    )?;

    Ok(store)
}

/// Starts the Axum HTTP server.
async fn serve(app: axum::Router, config: &ServerConfig) -> anyhow::Result<()> {
    let addr = config.socket_addr();
    info!(address = %addr, "Server listening");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::parse();
    init_logging(&config.log_level);

    if let Err(errors) = config.validate() {
        for error in &errors {
            eprintln!("Configuration error: {}", error);
        }
        std::process::exit(1);
    }

    info!(
        port = config.port,
        host = %config.host,
        "Starting Redarbor employee API"
    );

    let store = create_store(&config)?;

    // Warm up the index; a failure here is non-fatal, the gateway retries
    // before the next mutating operation.
    if store.ensure_index().await {
        info!(index = store.index(), "Index ready");
    } else {
        warn!(
            index = store.index(),
            "Index not confirmed at startup, creation deferred to first use"
        );
    }

    let app = create_app_with_config(store, config.clone());
    serve(app, &config).await
}
