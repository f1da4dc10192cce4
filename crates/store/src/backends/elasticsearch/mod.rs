//! Elasticsearch backend.
//!
//! Implements [`crate::core::DocumentStore`] against a single Elasticsearch
//! index using the official client.

mod backend;
mod storage;

pub use backend::{ElasticsearchAuth, ElasticsearchConfig, ElasticsearchStore};
