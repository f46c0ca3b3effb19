//! Search error types.
//!
//! This module defines the error types that can occur while talking to the
//! search service or reshaping its responses.

use thiserror::Error;

/// Errors that can occur during search service operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The request never got a response (bad URL, DNS, refused connection, ...).
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// The service answered with a non-success status.
    #[error("Query error: {0}")]
    QueryError(String),

    /// Failed to parse a response body from the service.
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Failed to serialize data handed back to the caller.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl SearchError {
    /// Create a connection error.
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::ConnectionError(msg.into())
    }

    /// Create a query error.
    pub fn query(msg: impl Into<String>) -> Self {
        Self::QueryError(msg.into())
    }

    /// Create a parse error.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::ParseError(msg.into())
    }

    /// Create a serialization error.
    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::SerializationError(msg.into())
    }

    /// Prefix the message with a description of the failed operation,
    /// keeping the variant.
    pub fn with_context(self, context: &str) -> Self {
        match self {
            Self::ConnectionError(msg) => Self::ConnectionError(format!("{}: {}", context, msg)),
            Self::QueryError(msg) => Self::QueryError(format!("{}: {}", context, msg)),
            Self::ParseError(msg) => Self::ParseError(format!("{}: {}", context, msg)),
            Self::SerializationError(msg) => {
                Self::SerializationError(format!("{}: {}", context, msg))
            }
        }
    }
}
