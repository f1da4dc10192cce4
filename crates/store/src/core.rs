//! Core abstractions for the document-store gateway.
//!
//! The [`DocumentStore`] trait is the boundary between the REST layer and
//! the concrete store backend. The REST layer is generic over it, which also
//! makes it the natural seam for call-recording mocks in tests.

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::error::StoreResult;

/// The store's result word for a mutation, as reported in its response
/// (e.g. Elasticsearch's `"result"` field).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteResult {
    /// The document was created.
    Created,
    /// The document was replaced or merged.
    Updated,
    /// The document was deleted.
    Deleted,
    /// The mutation changed nothing (merge with identical content).
    NoOp,
    /// The target document did not exist.
    NotFound,
    /// A result word this gateway does not know.
    Other(String),
}

impl WriteResult {
    /// Parses the store's result word.
    pub fn parse(word: &str) -> Self {
        match word {
            "created" => WriteResult::Created,
            "updated" => WriteResult::Updated,
            "deleted" => WriteResult::Deleted,
            "noop" => WriteResult::NoOp,
            "not_found" => WriteResult::NotFound,
            other => WriteResult::Other(other.to_string()),
        }
    }
}

/// Outcome descriptor for a mutating operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteOutcome {
    /// The store's result word.
    pub result: WriteResult,
    /// The id of the affected document.
    pub id: String,
}

impl WriteOutcome {
    /// Creates an outcome from the store's result word.
    pub fn new(result_word: &str, id: impl Into<String>) -> Self {
        Self {
            result: WriteResult::parse(result_word),
            id: id.into(),
        }
    }

    /// Whether the store confirmed a creation.
    pub fn created(&self) -> bool {
        self.result == WriteResult::Created
    }

    /// Whether the store confirmed an update. A no-op merge counts: the
    /// document is already in the requested state.
    pub fn updated(&self) -> bool {
        matches!(self.result, WriteResult::Updated | WriteResult::NoOp)
    }

    /// Whether the store confirmed a deletion.
    pub fn deleted(&self) -> bool {
        self.result == WriteResult::Deleted
    }
}

/// Uniform access to one named index in a document store.
///
/// Implementations own the store connection and the index-existence state.
/// All operations are scoped to the index fixed at construction time.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Returns the backend name, for logging and health reporting.
    fn store_name(&self) -> &'static str;

    /// Returns the name of the index this gateway is scoped to.
    fn index(&self) -> &str;

    /// Ensures the index exists with the configured mapping.
    ///
    /// Idempotent: repeated calls issue at most one creation request against
    /// the store. Returns whether the index is known to exist after the call.
    /// Store errors (including already-exists races) are logged and never
    /// propagated.
    async fn ensure_index(&self) -> bool;

    /// Executes a match query combining the given fields, or a match-all
    /// query when `fields` is `None`. Returns the hits' source documents.
    async fn search(&self, fields: Option<&Map<String, Value>>) -> StoreResult<Vec<Value>>;

    /// Returns the stored document's source by id.
    ///
    /// `Ok(None)` means the store confirmed the document is absent;
    /// transport and server failures are `Err`.
    async fn get(&self, id: &str) -> StoreResult<Option<Value>>;

    /// Creates or replaces the document at `id`.
    ///
    /// Does not check any precondition; the caller must ensure the id is
    /// unused if insert (rather than upsert) semantics are wanted.
    async fn insert(&self, id: &str, document: Value) -> StoreResult<WriteOutcome>;

    /// Merges the given fields into the existing document at `id`.
    async fn update(&self, id: &str, partial: Value) -> StoreResult<WriteOutcome>;

    /// Deletes the document at `id`.
    async fn delete(&self, id: &str) -> StoreResult<WriteOutcome>;

    /// Checks that the backing store is reachable and serving.
    async fn health_check(&self) -> StoreResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_result_parse() {
        assert_eq!(WriteResult::parse("created"), WriteResult::Created);
        assert_eq!(WriteResult::parse("updated"), WriteResult::Updated);
        assert_eq!(WriteResult::parse("deleted"), WriteResult::Deleted);
        assert_eq!(WriteResult::parse("noop"), WriteResult::NoOp);
        assert_eq!(WriteResult::parse("not_found"), WriteResult::NotFound);
        assert_eq!(
            WriteResult::parse("shrug"),
            WriteResult::Other("shrug".to_string())
        );
    }

    #[test]
    fn test_outcome_predicates() {
        assert!(WriteOutcome::new("created", "1").created());
        assert!(!WriteOutcome::new("created", "1").updated());
        assert!(WriteOutcome::new("updated", "1").updated());
        assert!(WriteOutcome::new("noop", "1").updated());
        assert!(WriteOutcome::new("deleted", "1").deleted());
        assert!(!WriteOutcome::new("not_found", "1").deleted());
    }
}
