//! Collection repository implementation.
//!
//! This module provides the adapter the application layer talks to. It calls
//! the injected `SearchEngineClient` and reshapes responses into the shared
//! collection types or a JSON string.

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, instrument, warn};

use crate::config::CollectionRepositoryConfig;
use crate::errors::SearchError;
use crate::interfaces::SearchEngineClient;
use crate::types::SearchParams;
use collection_browser_shared::{Collection, CollectionEntry, Field};

/// Only the first page is ever requested.
const FIRST_PAGE: u32 = 1;

/// The adapter over the search service.
/// Application code uses this to list collections and read their documents.
pub struct CollectionRepository {
    client: Arc<dyn SearchEngineClient>,
    config: CollectionRepositoryConfig,
}

impl CollectionRepository {
    /// Create a new CollectionRepository with default configuration.
    pub fn new(client: Arc<dyn SearchEngineClient>) -> Self {
        Self {
            client,
            config: CollectionRepositoryConfig::default(),
        }
    }

    /// Create a new CollectionRepository with custom configuration.
    pub fn with_config(client: Arc<dyn SearchEngineClient>, config: CollectionRepositoryConfig) -> Self {
        Self { client, config }
    }

    /// List every collection with its fields and document count.
    ///
    /// Counts are looked up one collection at a time through the detail
    /// endpoint. A collection whose count is not reported gets `0` and a
    /// warning; any failed request fails the whole listing.
    #[instrument(skip(self))]
    pub async fn list_collections(&self) -> Result<Vec<Collection>, SearchError> {
        let schemas = self
            .client
            .retrieve_collections()
            .await
            .map_err(|e| e.with_context("failed to list collections"))?;

        let mut collections = Vec::with_capacity(schemas.len());
        for schema in schemas {
            let detail = self
                .client
                .retrieve_collection(&schema.name)
                .await
                .map_err(|e| e.with_context(&format!("failed to retrieve collection '{}'", schema.name)))?;

            let num_documents = match detail.num_documents {
                Some(count) => count,
                None => {
                    warn!(collection = %schema.name, "Collection has an unknown number of documents");
                    0
                }
            };

            let fields = schema
                .fields
                .into_iter()
                .map(|f| Field::new(f.name, f.field_type))
                .collect();

            collections.push(Collection::new(schema.name, fields, num_documents));
        }

        debug!(count = collections.len(), "Listed collections");
        Ok(collections)
    }

    /// Fetch one page of documents from a collection as pretty-printed JSON.
    ///
    /// The hits are returned verbatim. An empty or missing hit list yields `[]`.
    #[instrument(skip(self))]
    pub async fn fetch_documents(&self, collection_name: &str) -> Result<String, SearchError> {
        let hits = self.first_page(collection_name).await?;
        if hits.is_empty() {
            return Ok("[]".to_string());
        }

        serde_json::to_string_pretty(&hits).map_err(|e| {
            SearchError::serialization(format!(
                "failed to marshal search results to JSON: {}",
                e
            ))
        })
    }

    /// Fetch one page of documents from a collection, keeping only each
    /// document's `id` and `title`.
    #[instrument(skip(self))]
    pub async fn fetch_entries(&self, collection_name: &str) -> Result<Vec<CollectionEntry>, SearchError> {
        let hits = self.first_page(collection_name).await?;

        hits.into_iter()
            .map(|mut hit| {
                let document = hit
                    .get_mut("document")
                    .map(Value::take)
                    .ok_or_else(|| SearchError::parse("search hit has no document"))?;
                serde_json::from_value::<CollectionEntry>(document)
                    .map_err(|e| SearchError::parse(format!("failed to unmarshal document: {}", e)))
            })
            .collect()
    }

    /// Run the wildcard query and return at most `per_page` hits.
    async fn first_page(&self, collection_name: &str) -> Result<Vec<Value>, SearchError> {
        let params = SearchParams::wildcard(self.config.per_page, FIRST_PAGE);

        let result = self
            .client
            .search(collection_name, &params)
            .await
            .map_err(|e| e.with_context("failed to search collection"))?;

        let mut hits = result.hits.unwrap_or_default();
        hits.truncate(self.config.per_page as usize);

        debug!(
            collection = %collection_name,
            found = ?result.found,
            returned = hits.len(),
            "Fetched documents"
        );
        Ok(hits)
    }
}
