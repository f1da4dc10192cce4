//! Server configuration for the employee REST API.
//!
//! Supports both programmatic configuration and environment variable
//! overrides.
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `REDARBOR_PORT` | 9999 | Server port |
//! | `REDARBOR_HOST` | 127.0.0.1 | Host to bind |
//! | `REDARBOR_LOG_LEVEL` | info | Log level |
//! | `REDARBOR_REQUEST_TIMEOUT` | 30 | Request timeout (seconds) |
//! | `REDARBOR_MAX_BODY_SIZE` | 10485760 | Maximum request body size (bytes) |
//! | `REDARBOR_ENABLE_CORS` | false | Enable CORS |
//! | `REDARBOR_CORS_ORIGINS` | * | Allowed origins |
//! | `REDARBOR_ES_URL` | http://localhost:9200 | Elasticsearch URL |
//! | `REDARBOR_ES_USERNAME` | — | Elasticsearch basic-auth username |
//! | `REDARBOR_ES_PASSWORD` | — | Elasticsearch basic-auth password |
//! | `REDARBOR_ES_TIMEOUT_MS` | 30000 | Elasticsearch request timeout (ms) |

use clap::Parser;

/// Server configuration for the employee REST API.
///
/// Can be constructed from command line arguments using
/// [`ServerConfig::parse`], from the environment via [`ServerConfig::from_env`],
/// or programmatically.
#[derive(Debug, Clone, Parser)]
#[command(name = "redarbor")]
#[command(about = "Employee CRUD gateway over Elasticsearch")]
pub struct ServerConfig {
    /// Port to listen on.
    #[arg(short, long, env = "REDARBOR_PORT", default_value = "9999")]
    pub port: u16,

    /// Host address to bind to.
    #[arg(long, env = "REDARBOR_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long, env = "REDARBOR_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Request timeout in seconds.
    #[arg(long, env = "REDARBOR_REQUEST_TIMEOUT", default_value = "30")]
    pub request_timeout: u64,

    /// Maximum request body size in bytes.
    #[arg(long, env = "REDARBOR_MAX_BODY_SIZE", default_value = "10485760")]
    pub max_body_size: usize,

    /// Enable CORS.
    #[arg(long, env = "REDARBOR_ENABLE_CORS", default_value = "false")]
    pub enable_cors: bool,

    /// Allowed CORS origins (comma-separated, or * for all).
    #[arg(long, env = "REDARBOR_CORS_ORIGINS", default_value = "*")]
    pub cors_origins: String,

    /// Elasticsearch node URL.
    #[arg(long, env = "REDARBOR_ES_URL", default_value = "http://localhost:9200")]
    pub es_url: String,

    /// Elasticsearch basic-auth username.
    #[arg(long, env = "REDARBOR_ES_USERNAME")]
    pub es_username: Option<String>,

    /// Elasticsearch basic-auth password.
    #[arg(long, env = "REDARBOR_ES_PASSWORD")]
    pub es_password: Option<String>,

    /// Elasticsearch request timeout in milliseconds.
    #[arg(long, env = "REDARBOR_ES_TIMEOUT_MS", default_value = "30000")]
    pub es_timeout_ms: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 9999,
            host: "127.0.0.1".to_string(),
            log_level: "info".to_string(),
            request_timeout: 30,
            max_body_size: 10 * 1024 * 1024,
            enable_cors: false,
            cors_origins: "*".to_string(),
            es_url: "http://localhost:9200".to_string(),
            es_username: None,
            es_password: None,
            es_timeout_ms: 30000,
        }
    }
}

impl ServerConfig {
    /// Creates a new ServerConfig from environment variables, falling back
    /// to defaults.
    pub fn from_env() -> Self {
        Self::try_parse().unwrap_or_default()
    }

    /// Returns the socket address to bind to.
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Validates the configuration and returns errors if any.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.port == 0 {
            errors.push("Port cannot be 0".to_string());
        }

        if self.request_timeout == 0 {
            errors.push("Request timeout cannot be 0".to_string());
        }

        if self.max_body_size == 0 {
            errors.push("Max body size cannot be 0".to_string());
        }

        if self.es_url.is_empty() {
            errors.push("Elasticsearch URL cannot be empty".to_string());
        }

        if self.es_timeout_ms == 0 {
            errors.push("Elasticsearch timeout cannot be 0".to_string());
        }

        if self.es_username.is_some() != self.es_password.is_some() {
            errors.push(
                "Elasticsearch username and password must be provided together".to_string(),
            );
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    /// Creates a configuration suitable for testing.
    pub fn for_testing() -> Self {
        Self {
            port: 0, // Let OS assign port
            log_level: "debug".to_string(),
            request_timeout: 5, // Shorter timeout for tests
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.port, 9999);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.es_url, "http://localhost:9200");
        assert!(!config.enable_cors);
    }

    #[test]
    fn test_socket_addr() {
        let config = ServerConfig {
            port: 3000,
            host: "0.0.0.0".to_string(),
            ..Default::default()
        };
        assert_eq!(config.socket_addr(), "0.0.0.0:3000");
    }

    #[test]
    fn test_validate_valid() {
        assert!(ServerConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_invalid_port() {
        let config = ServerConfig {
            port: 0,
            ..Default::default()
        };
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().iter().any(|e| e.contains("Port")));
    }

    #[test]
    fn test_validate_lopsided_credentials() {
        let config = ServerConfig {
            es_username: Some("elastic".to_string()),
            ..Default::default()
        };
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().iter().any(|e| e.contains("together")));
    }

    #[test]
    fn test_for_testing() {
        let config = ServerConfig::for_testing();
        assert_eq!(config.port, 0);
        assert_eq!(config.request_timeout, 5);
    }
}
