//! Typesense implementation of the search engine client.
//!
//! This module contains the HTTP client that talks to a Typesense server's
//! collection and document-search endpoints.

mod client;

pub use client::{TypesenseClient, API_KEY_HEADER};
