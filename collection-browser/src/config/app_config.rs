//! Application configuration read from the process environment.

use std::env;
use tracing::{info, warn};

use collection_browser_repository::CollectionRepositoryConfig;

/// Default Typesense server address.
pub const DEFAULT_TYPESENSE_URL: &str = "http://typesense.documentresearch.dev:8080";

const API_KEY_VAR: &str = "TYPESENSE_API_KEY";
const URL_VAR: &str = "TYPESENSE_URL";

/// Settings used to build the search-service client once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Typesense server address.
    pub typesense_url: String,
    /// API key sent with every request. May be empty.
    pub api_key: String,
    /// Paging settings for document fetches.
    pub repository: CollectionRepositoryConfig,
}

impl AppConfig {
    /// Read configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `TYPESENSE_API_KEY`: API key (a warning is logged when missing)
    /// - `TYPESENSE_URL`: server address (default: http://typesense.documentresearch.dev:8080)
    pub fn from_env() -> Self {
        Self::resolve(env::var(API_KEY_VAR).ok(), env::var(URL_VAR).ok())
    }

    /// Build the configuration from already-looked-up values.
    ///
    /// A missing or empty API key is not an error; requests go out with an
    /// empty key and the server decides.
    pub fn resolve(api_key: Option<String>, typesense_url: Option<String>) -> Self {
        let api_key = api_key.unwrap_or_default();
        if api_key.is_empty() {
            warn!("{} environment variable is not set", API_KEY_VAR);
        }

        let typesense_url = typesense_url
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_TYPESENSE_URL.to_string());

        info!(typesense_url = %typesense_url, "Loaded configuration");

        Self {
            typesense_url,
            api_key,
            repository: CollectionRepositoryConfig::default(),
        }
    }

    /// Override the server address.
    pub fn with_url(mut self, typesense_url: impl Into<String>) -> Self {
        self.typesense_url = typesense_url.into();
        self
    }
}
