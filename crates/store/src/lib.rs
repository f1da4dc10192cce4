//! # redarbor-store - Document store gateway
//!
//! This crate provides uniform access to one named index in a document store
//! for the Redarbor employee API. It defines the [`core::DocumentStore`]
//! trait — the seam the REST layer is generic over — and an Elasticsearch
//! implementation in [`backends::elasticsearch`].
//!
//! ## Design
//!
//! The gateway exclusively owns the store connection and the index-existence
//! state. Operations are scoped to the index fixed at construction time:
//!
//! - `ensure_index` - idempotent lazy index creation with a fixed mapping
//! - `search` - match query over given fields, or match-all
//! - `get` - document `_source` by id (`Ok(None)` means confirmed absent)
//! - `insert` / `update` / `delete` - mutations returning the store's
//!   outcome descriptor ([`core::WriteOutcome`])
//!
//! Mutating operations return typed errors instead of swallowing them, so
//! callers can distinguish "not found" from "backend failure". The one
//! exception is `ensure_index`, which reports a plain `bool` and never fails
//! the caller: index creation problems are logged and retried on the next
//! mutation.

#![warn(missing_docs)]

pub mod backends;
pub mod core;
pub mod error;

pub use crate::core::{DocumentStore, WriteOutcome, WriteResult};
pub use crate::error::{StoreError, StoreResult};
