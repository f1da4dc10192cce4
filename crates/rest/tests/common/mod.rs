//! Common test utilities for the employee REST API.
//!
//! Provides a call-recording in-memory [`MockStore`] implementing the
//! gateway trait, and a helper building an `axum_test::TestServer` around it.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum_test::TestServer;
use redarbor_rest::{AppState, ServerConfig, routing};
use redarbor_store::{DocumentStore, StoreError, StoreResult, WriteOutcome};
use serde_json::{Map, Value};

/// Per-operation call counters.
#[derive(Default)]
pub struct CallCounts {
    pub ensure_index: AtomicUsize,
    pub index_creations: AtomicUsize,
    pub search: AtomicUsize,
    pub get: AtomicUsize,
    pub insert: AtomicUsize,
    pub update: AtomicUsize,
    pub delete: AtomicUsize,
}

/// In-memory store gateway recording every call.
#[derive(Default)]
pub struct MockStore {
    docs: Mutex<HashMap<String, Value>>,
    index_exists: AtomicBool,
    /// When set, every mutation and get fails with a transport error.
    pub fail_backend: AtomicBool,
    pub calls: CallCounts,
    /// The partial body the last update call received.
    pub last_update_body: Mutex<Option<Value>>,
}

impl MockStore {
    pub fn seeded(records: &[Value]) -> Self {
        let store = Self::default();
        {
            let mut docs = store.docs.lock().unwrap();
            for record in records {
                let id = record["CompanyId"].as_str().expect("seed needs CompanyId");
                docs.insert(id.to_string(), record.clone());
            }
        }
        store
    }

    pub fn contains(&self, id: &str) -> bool {
        self.docs.lock().unwrap().contains_key(id)
    }

    fn backend_error(&self) -> StoreError {
        StoreError::Request {
            index: "company".to_string(),
            message: "connection refused".to_string(),
        }
    }
}

#[async_trait]
impl DocumentStore for MockStore {
    fn store_name(&self) -> &'static str {
        "mock"
    }

    fn index(&self) -> &str {
        "company"
    }

    async fn ensure_index(&self) -> bool {
        self.calls.ensure_index.fetch_add(1, Ordering::SeqCst);
        if !self.index_exists.swap(true, Ordering::SeqCst) {
            self.calls.index_creations.fetch_add(1, Ordering::SeqCst);
        }
        true
    }

    async fn search(&self, _fields: Option<&Map<String, Value>>) -> StoreResult<Vec<Value>> {
        self.calls.search.fetch_add(1, Ordering::SeqCst);
        if self.fail_backend.load(Ordering::SeqCst) {
            return Err(self.backend_error());
        }
        let docs = self.docs.lock().unwrap();
        let mut ids: Vec<&String> = docs.keys().collect();
        ids.sort();
        Ok(ids.into_iter().map(|id| docs[id].clone()).collect())
    }

    async fn get(&self, id: &str) -> StoreResult<Option<Value>> {
        self.calls.get.fetch_add(1, Ordering::SeqCst);
        if self.fail_backend.load(Ordering::SeqCst) {
            return Err(self.backend_error());
        }
        Ok(self.docs.lock().unwrap().get(id).cloned())
    }

    async fn insert(&self, id: &str, document: Value) -> StoreResult<WriteOutcome> {
        self.ensure_index().await;
        self.calls.insert.fetch_add(1, Ordering::SeqCst);
        if self.fail_backend.load(Ordering::SeqCst) {
            return Err(self.backend_error());
        }
        self.docs.lock().unwrap().insert(id.to_string(), document);
        Ok(WriteOutcome::new("created", id))
    }

    async fn update(&self, id: &str, partial: Value) -> StoreResult<WriteOutcome> {
        self.ensure_index().await;
        self.calls.update.fetch_add(1, Ordering::SeqCst);
        *self.last_update_body.lock().unwrap() = Some(partial.clone());
        if self.fail_backend.load(Ordering::SeqCst) {
            return Err(self.backend_error());
        }

        let mut docs = self.docs.lock().unwrap();
        let Some(existing) = docs.get_mut(id) else {
            return Ok(WriteOutcome::new("not_found", id));
        };
        let before = existing.clone();
        if let (Some(target), Some(fields)) = (existing.as_object_mut(), partial.as_object()) {
            for (name, value) in fields {
                target.insert(name.clone(), value.clone());
            }
        }
        let word = if *existing == before { "noop" } else { "updated" };
        Ok(WriteOutcome::new(word, id))
    }

    async fn delete(&self, id: &str) -> StoreResult<WriteOutcome> {
        self.calls.delete.fetch_add(1, Ordering::SeqCst);
        if self.fail_backend.load(Ordering::SeqCst) {
            return Err(self.backend_error());
        }
        match self.docs.lock().unwrap().remove(id) {
            Some(_) => Ok(WriteOutcome::new("deleted", id)),
            None => Ok(WriteOutcome::new("not_found", id)),
        }
    }

    async fn health_check(&self) -> StoreResult<()> {
        if self.fail_backend.load(Ordering::SeqCst) {
            return Err(self.backend_error());
        }
        Ok(())
    }
}

/// Builds a test server over the given mock store, keeping the Arc so tests
/// can inspect recorded calls afterwards.
pub fn server_over(store: Arc<MockStore>) -> TestServer {
    let state = AppState::new(store, ServerConfig::for_testing());
    let app = routing::create_routes(state);
    TestServer::new(app).expect("Failed to create test server")
}
