//! Application facade called by the host UI.

use std::sync::Arc;
use tracing::info;

use crate::config::AppConfig;
use crate::AppError;
use collection_browser_repository::{CollectionRepository, TypesenseClient};
use collection_browser_shared::{Collection, CollectionEntry};

/// Entry point for host events.
///
/// Holds a repository built once from configuration. Methods take `&self`
/// and share no mutable state, so concurrent invocations are independent.
pub struct App {
    repository: CollectionRepository,
}

impl App {
    /// Build the Typesense client and repository from configuration.
    ///
    /// # Returns
    ///
    /// * `Ok(App)` - Ready to serve host calls
    /// * `Err(AppError)` - If the server address is invalid
    pub fn new(config: &AppConfig) -> Result<Self, AppError> {
        let client = TypesenseClient::new(&config.typesense_url, config.api_key.clone())
            .map_err(|e| AppError::config(format!("Failed to create Typesense client: {}", e)))?;

        info!(typesense_url = %config.typesense_url, "Application initialized");

        Ok(Self {
            repository: CollectionRepository::with_config(Arc::new(client), config.repository),
        })
    }

    /// Create an App over an existing repository.
    pub fn with_repository(repository: CollectionRepository) -> Self {
        Self { repository }
    }

    /// Retrieve all collections with their fields and document counts.
    pub async fn get_collections(&self) -> Result<Vec<Collection>, AppError> {
        self.repository
            .list_collections()
            .await
            .map_err(AppError::GetCollections)
    }

    /// Retrieve one page of documents from a collection as pretty JSON.
    pub async fn get_collection_data(&self, collection_name: &str) -> Result<String, AppError> {
        self.repository
            .fetch_documents(collection_name)
            .await
            .map_err(AppError::GetCollectionData)
    }

    /// Retrieve the `id`/`title` entries of a collection.
    pub async fn get_collection_entries(
        &self,
        collection_name: &str,
    ) -> Result<Vec<CollectionEntry>, AppError> {
        self.repository
            .fetch_entries(collection_name)
            .await
            .map_err(AppError::GetCollectionEntries)
    }
}
