//! Elasticsearch client construction and configuration.

use std::fmt::Debug;
use std::sync::atomic::AtomicBool;
use std::time::Duration;

use elasticsearch::Elasticsearch;
use elasticsearch::auth::Credentials;
use elasticsearch::cert::CertificateValidation;
use elasticsearch::http::transport::{SingleNodeConnectionPool, TransportBuilder};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{StoreError, StoreResult};

/// Authentication configuration for Elasticsearch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ElasticsearchAuth {
    /// Basic username/password authentication.
    Basic {
        /// The username for basic auth.
        username: String,
        /// The password for basic auth.
        password: String,
    },
    /// Bearer token authentication.
    Bearer {
        /// The bearer token.
        token: String,
    },
}

/// Configuration for the Elasticsearch gateway.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ElasticsearchConfig {
    /// Elasticsearch node URL (e.g. `http://localhost:9200`).
    #[serde(default = "default_url")]
    pub url: String,

    /// Request timeout in milliseconds (default: 30000).
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,

    /// Optional authentication.
    #[serde(default)]
    pub auth: Option<ElasticsearchAuth>,

    /// Whether to disable certificate validation (default: false).
    /// Only use for development/testing.
    #[serde(default)]
    pub disable_certificate_validation: bool,
}

fn default_url() -> String {
    "http://localhost:9200".to_string()
}

fn default_request_timeout_ms() -> u64 {
    30000
}

impl Default for ElasticsearchConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            request_timeout_ms: default_request_timeout_ms(),
            auth: None,
            disable_certificate_validation: false,
        }
    }
}

/// Elasticsearch gateway scoped to one named index.
///
/// Owns the client connection and the index-existence state. The index name
/// and its mapping are fixed at construction time and immutable for the
/// lifetime of the gateway.
pub struct ElasticsearchStore {
    /// The Elasticsearch client.
    client: Elasticsearch,
    /// Configuration.
    config: ElasticsearchConfig,
    /// The index all operations are scoped to.
    index: String,
    /// The `mappings` body the index is created with.
    mapping: Value,
    /// Whether the index is known to exist.
    pub(crate) index_known: AtomicBool,
}

impl Debug for ElasticsearchStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ElasticsearchStore")
            .field("config", &self.config)
            .field("index", &self.index)
            .finish_non_exhaustive()
    }
}

impl ElasticsearchStore {
    /// Creates a new gateway for the given index and mapping.
    ///
    /// A missing mapping (`Value::Null`) creates the index with no declared
    /// schema.
    pub fn new(
        config: ElasticsearchConfig,
        index: impl Into<String>,
        mapping: Value,
    ) -> StoreResult<Self> {
        let client = Self::build_client(&config)?;

        Ok(Self {
            client,
            config,
            index: index.into(),
            mapping,
            index_known: AtomicBool::new(false),
        })
    }

    /// Builds the Elasticsearch client from configuration.
    fn build_client(config: &ElasticsearchConfig) -> StoreResult<Elasticsearch> {
        let parsed_url: elasticsearch::http::Url =
            config.url.parse().map_err(|e| StoreError::Connection {
                url: config.url.clone(),
                message: format!("Invalid URL: {}", e),
            })?;

        let conn_pool = SingleNodeConnectionPool::new(parsed_url);

        let mut builder = TransportBuilder::new(conn_pool)
            .timeout(Duration::from_millis(config.request_timeout_ms));

        if config.disable_certificate_validation {
            builder = builder.cert_validation(CertificateValidation::None);
        }

        if let Some(ref auth) = config.auth {
            builder = match auth {
                ElasticsearchAuth::Basic { username, password } => {
                    builder.auth(Credentials::Basic(username.clone(), password.clone()))
                }
                ElasticsearchAuth::Bearer { token } => {
                    builder.auth(Credentials::Bearer(token.clone()))
                }
            };
        }

        let transport = builder.build().map_err(|e| StoreError::Connection {
            url: config.url.clone(),
            message: format!("Failed to build transport: {}", e),
        })?;

        Ok(Elasticsearch::new(transport))
    }

    /// Returns the Elasticsearch client.
    pub(crate) fn client(&self) -> &Elasticsearch {
        &self.client
    }

    /// Returns the gateway configuration.
    pub fn config(&self) -> &ElasticsearchConfig {
        &self.config
    }

    /// Returns the index name this gateway is scoped to.
    pub fn index_name(&self) -> &str {
        &self.index
    }

    /// Builds the creation body for the index.
    pub(crate) fn index_body(&self) -> Value {
        let mappings = if self.mapping.is_null() {
            serde_json::json!({})
        } else {
            self.mapping.clone()
        };
        serde_json::json!({ "mappings": mappings })
    }

    pub(crate) fn transport_error(&self, message: String) -> StoreError {
        StoreError::Request {
            index: self.index.clone(),
            message,
        }
    }

    pub(crate) fn decode_error(&self, message: String) -> StoreError {
        StoreError::Decode {
            index: self.index.clone(),
            message,
        }
    }

    pub(crate) fn status_error(&self, status: u16, body: String) -> StoreError {
        StoreError::UnexpectedStatus {
            index: self.index.clone(),
            status,
            body,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_config_defaults() {
        let config = ElasticsearchConfig::default();
        assert_eq!(config.url, "http://localhost:9200");
        assert_eq!(config.request_timeout_ms, 30000);
        assert!(config.auth.is_none());
        assert!(!config.disable_certificate_validation);
    }

    #[test]
    fn test_index_body_wraps_mapping() {
        let store = ElasticsearchStore::new(
            ElasticsearchConfig::default(),
            "company",
            json!({ "properties": { "CompanyId": { "type": "keyword" } } }),
        )
        .unwrap();

        let body = store.index_body();
        assert_eq!(
            body["mappings"]["properties"]["CompanyId"]["type"],
            "keyword"
        );
    }

    #[test]
    fn test_index_body_without_mapping() {
        let store =
            ElasticsearchStore::new(ElasticsearchConfig::default(), "company", Value::Null)
                .unwrap();
        assert_eq!(store.index_body(), json!({ "mappings": {} }));
    }

    #[test]
    fn test_invalid_url_rejected() {
        let config = ElasticsearchConfig {
            url: "not a url".to_string(),
            ..Default::default()
        };
        assert!(ElasticsearchStore::new(config, "company", Value::Null).is_err());
    }
}
