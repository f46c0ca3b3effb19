//! Interface definitions for the search engine client.
//!
//! This module defines the abstract `SearchEngineClient` trait that the
//! `CollectionRepository` is built over, so the HTTP backend can be swapped
//! for a mock in tests.

mod search_engine_client;

pub use search_engine_client::SearchEngineClient;
