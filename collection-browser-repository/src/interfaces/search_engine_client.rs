//! Search engine client trait definition.
//!
//! This module defines the abstract interface over the remote document-search
//! service. It covers exactly the three endpoints the collection browser uses.

use async_trait::async_trait;

use crate::errors::SearchError;
use crate::types::{CollectionSchema, SearchParams, SearchResult};

/// Abstract interface for search service operations.
///
/// Implementations can be swapped for different backends (Typesense over
/// HTTP, mock, etc.) enabling easy testing.
///
/// # Thread Safety
///
/// All implementations must be `Send + Sync` so a single handle can serve
/// concurrent host invocations.
///
/// # Error Handling
///
/// All methods return `Result<T, SearchError>`. Nothing is retried.
#[async_trait]
pub trait SearchEngineClient: Send + Sync {
    /// List every collection known to the service.
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<CollectionSchema>)` - Collection schemas in service order
    /// * `Err(SearchError)` - If the request fails
    async fn retrieve_collections(&self) -> Result<Vec<CollectionSchema>, SearchError>;

    /// Retrieve the schema of a single collection, including its document count.
    ///
    /// # Arguments
    ///
    /// * `name` - The collection name
    async fn retrieve_collection(&self, name: &str) -> Result<CollectionSchema, SearchError>;

    /// Search documents in a collection.
    ///
    /// # Arguments
    ///
    /// * `name` - The collection name
    /// * `params` - Query text, fields to query and the single page to return
    ///
    /// # Example
    ///
    /// ```ignore
    /// let params = SearchParams::wildcard(250, 1);
    /// let result = client.search("books", &params).await?;
    /// println!("Found {:?} documents", result.found);
    /// ```
    async fn search(&self, name: &str, params: &SearchParams) -> Result<SearchResult, SearchError>;
}
