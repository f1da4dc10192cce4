//! [`DocumentStore`] implementation for Elasticsearch.

use std::sync::atomic::Ordering;

use async_trait::async_trait;
use elasticsearch::http::response::Response;
use elasticsearch::indices::{IndicesCreateParts, IndicesExistsParts};
use elasticsearch::{DeleteParts, GetParts, IndexParts, SearchParts, UpdateParts};
use serde_json::{Map, Value, json};
use tracing::{debug, warn};

use crate::core::{DocumentStore, WriteOutcome};
use crate::error::{StoreError, StoreResult};

use super::backend::ElasticsearchStore;

impl ElasticsearchStore {
    /// Builds the search body for a match query over the given fields, or a
    /// match-all query when no fields are given.
    pub(crate) fn search_body(fields: Option<&Map<String, Value>>) -> Value {
        match fields {
            Some(fields) if !fields.is_empty() => {
                let mut clauses: Vec<Value> = fields
                    .iter()
                    .map(|(name, value)| json!({ "match": { name: value } }))
                    .collect();
                let query = if clauses.len() == 1 {
                    clauses.remove(0)
                } else {
                    json!({ "bool": { "must": clauses } })
                };
                json!({ "query": query })
            }
            _ => json!({ "query": { "match_all": {} } }),
        }
    }

    /// Extracts the outcome descriptor from a mutation response.
    ///
    /// Elasticsearch reports the result word in the body for successful
    /// mutations and for delete-of-missing (404 with `"result": "not_found"`).
    async fn parse_outcome(&self, response: Response, id: &str) -> StoreResult<WriteOutcome> {
        let status = response.status_code();
        let body: Value = response
            .json()
            .await
            .map_err(|e| self.decode_error(format!("Failed to parse mutation response: {}", e)))?;

        match body.get("result").and_then(|v| v.as_str()) {
            Some(word) => Ok(WriteOutcome::new(word, id)),
            None => Err(self.status_error(status.as_u16(), body.to_string())),
        }
    }
}

#[async_trait]
impl DocumentStore for ElasticsearchStore {
    fn store_name(&self) -> &'static str {
        "elasticsearch"
    }

    fn index(&self) -> &str {
        self.index_name()
    }

    async fn ensure_index(&self) -> bool {
        if self.index_known.load(Ordering::Acquire) {
            return true;
        }

        let exists = self
            .client()
            .indices()
            .exists(IndicesExistsParts::Index(&[self.index()]))
            .send()
            .await;

        match exists {
            Ok(response) if response.status_code().is_success() => {
                self.index_known.store(true, Ordering::Release);
                return true;
            }
            Ok(_) => {}
            Err(e) => {
                warn!(index = %self.index(), error = %e, "Failed to check index existence");
                return false;
            }
        }

        let created = self
            .client()
            .indices()
            .create(IndicesCreateParts::Index(self.index()))
            .body(self.index_body())
            .send()
            .await;

        match created {
            Ok(response) => {
                let status = response.status_code();
                if status.is_success() {
                    debug!(index = %self.index(), "Created index");
                    self.index_known.store(true, Ordering::Release);
                    return true;
                }
                let body = response.text().await.unwrap_or_default();
                // 400 with "resource_already_exists_exception" is OK (creation race)
                if body.contains("resource_already_exists_exception") {
                    self.index_known.store(true, Ordering::Release);
                    return true;
                }
                warn!(
                    index = %self.index(),
                    status = status.as_u16(),
                    body = %body,
                    "Failed to create index"
                );
                false
            }
            Err(e) => {
                warn!(index = %self.index(), error = %e, "Failed to create index");
                false
            }
        }
    }

    async fn search(&self, fields: Option<&Map<String, Value>>) -> StoreResult<Vec<Value>> {
        let response = self
            .client()
            .search(SearchParts::Index(&[self.index()]))
            .body(Self::search_body(fields))
            .send()
            .await
            .map_err(|e| self.transport_error(format!("Search failed: {}", e)))?;

        let status = response.status_code();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(self.status_error(status.as_u16(), body));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| self.decode_error(format!("Failed to parse search response: {}", e)))?;

        let hits = body
            .get("hits")
            .and_then(|h| h.get("hits"))
            .and_then(|h| h.as_array())
            .map(|hits| {
                hits.iter()
                    .filter_map(|hit| hit.get("_source").cloned())
                    .collect()
            })
            .unwrap_or_default();

        Ok(hits)
    }

    async fn get(&self, id: &str) -> StoreResult<Option<Value>> {
        let response = self
            .client()
            .get(GetParts::IndexId(self.index(), id))
            .send()
            .await
            .map_err(|e| self.transport_error(format!("Get failed for id {}: {}", id, e)))?;

        let status = response.status_code();
        if status.as_u16() == 404 {
            // Confirmed absent: missing document or missing index
            return Ok(None);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(self.status_error(status.as_u16(), body));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| self.decode_error(format!("Failed to parse get response: {}", e)))?;

        Ok(body.get("_source").cloned())
    }

    async fn insert(&self, id: &str, document: Value) -> StoreResult<WriteOutcome> {
        self.ensure_index().await;

        let response = self
            .client()
            .index(IndexParts::IndexId(self.index(), id))
            .body(document)
            .send()
            .await
            .map_err(|e| self.transport_error(format!("Insert failed for id {}: {}", id, e)))?;

        self.parse_outcome(response, id).await
    }

    async fn update(&self, id: &str, partial: Value) -> StoreResult<WriteOutcome> {
        self.ensure_index().await;

        let response = self
            .client()
            .update(UpdateParts::IndexId(self.index(), id))
            .body(json!({ "doc": partial }))
            .send()
            .await
            .map_err(|e| self.transport_error(format!("Update failed for id {}: {}", id, e)))?;

        self.parse_outcome(response, id).await
    }

    async fn delete(&self, id: &str) -> StoreResult<WriteOutcome> {
        let response = self
            .client()
            .delete(DeleteParts::IndexId(self.index(), id))
            .send()
            .await
            .map_err(|e| self.transport_error(format!("Delete failed for id {}: {}", id, e)))?;

        self.parse_outcome(response, id).await
    }

    async fn health_check(&self) -> StoreResult<()> {
        let response = self
            .client()
            .cluster()
            .health(elasticsearch::cluster::ClusterHealthParts::None)
            .send()
            .await
            .map_err(|e| self.transport_error(format!("Health check failed: {}", e)))?;

        let status = response.status_code();
        if !status.is_success() {
            return Err(self.status_error(status.as_u16(), "cluster health".to_string()));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| self.decode_error(format!("Failed to parse health response: {}", e)))?;

        let cluster_status = body
            .get("status")
            .and_then(|s| s.as_str())
            .unwrap_or("unknown");

        if cluster_status == "red" {
            return Err(StoreError::UnexpectedStatus {
                index: self.index().to_string(),
                status: status.as_u16(),
                body: format!("cluster status is red: {:?}", body),
            });
        }

        Ok(())
    }
}
