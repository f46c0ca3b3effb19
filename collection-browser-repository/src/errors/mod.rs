//! Error types for the collection browser repository.

mod search_error;

pub use search_error::SearchError;
