//! # Collection Browser Repository
//!
//! This crate provides the interface to the remote document-search service,
//! a Typesense implementation of it, and the `CollectionRepository` adapter
//! that reshapes service responses for the application layer.

pub mod client;
pub mod config;
pub mod errors;
pub mod interfaces;
pub mod types;
pub mod typesense;

pub use client::CollectionRepository;
pub use config::CollectionRepositoryConfig;
pub use errors::SearchError;
pub use interfaces::SearchEngineClient;
pub use typesense::TypesenseClient;
