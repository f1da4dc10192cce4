//! Error types for the store gateway.

// Error enum variant fields are self-documenting via their #[error(...)] messages
#![allow(missing_docs)]

use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// The primary error type for all gateway operations.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The store client could not be constructed or reached.
    #[error("failed to connect to document store at {url}: {message}")]
    Connection { url: String, message: String },

    /// A request to the store failed at the transport level.
    #[error("request against index {index} failed: {message}")]
    Request { index: String, message: String },

    /// The store answered with a non-success status.
    #[error("index {index} returned status {status}: {body}")]
    UnexpectedStatus {
        index: String,
        status: u16,
        body: String,
    },

    /// The store's response body could not be decoded.
    #[error("failed to decode response from index {index}: {message}")]
    Decode { index: String, message: String },
}
