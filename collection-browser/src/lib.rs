//! # Collection Browser
//!
//! Application layer for browsing the collections of a Typesense server.
//!
//! This crate wires configuration from the environment into a
//! `CollectionRepository` and exposes the operations a host UI calls.

pub mod app;
pub mod config;

pub use app::App;
pub use config::AppConfig;

use collection_browser_repository::SearchError;
use std::error::Error as StdError;
use thiserror::Error;

/// Errors returned to the host.
///
/// Each operation variant names what failed and keeps the underlying
/// `SearchError` as its source.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("failed to get collections")]
    GetCollections(#[source] SearchError),

    #[error("failed to get collection data")]
    GetCollectionData(#[source] SearchError),

    #[error("failed to get collection entries")]
    GetCollectionEntries(#[source] SearchError),

    /// Failed to render a result for output.
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl AppError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }
}

/// Render an error followed by each of its causes, outermost first.
pub fn error_chain(err: &dyn StdError) -> Vec<String> {
    let mut chain = vec![err.to_string()];
    let mut source = err.source();
    while let Some(cause) = source {
        chain.push(cause.to_string());
        source = cause.source();
    }
    chain
}
