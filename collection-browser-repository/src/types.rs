//! Wire types exchanged with the search service.
//!
//! These mirror the JSON bodies of the collection and search endpoints.
//! Unknown keys are ignored so newer service versions still decode.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A collection schema as reported by the listing and detail endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionSchema {
    pub name: String,
    #[serde(default)]
    pub fields: Vec<FieldSchema>,
    /// Absent when the service does not know the count.
    #[serde(default)]
    pub num_documents: Option<i64>,
}

impl CollectionSchema {
    pub fn new(name: impl Into<String>, fields: Vec<FieldSchema>) -> Self {
        Self {
            name: name.into(),
            fields,
            num_documents: None,
        }
    }

    pub fn with_num_documents(mut self, num_documents: i64) -> Self {
        self.num_documents = Some(num_documents);
        self
    }
}

/// A field in a collection schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSchema {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: String,
}

impl FieldSchema {
    pub fn new(name: impl Into<String>, field_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            field_type: field_type.into(),
        }
    }
}

/// Query-string parameters of the document search endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchParams {
    pub q: String,
    pub query_by: String,
    pub per_page: u32,
    pub page: u32,
}

impl SearchParams {
    /// Match every document, returning the given page.
    pub fn wildcard(per_page: u32, page: u32) -> Self {
        Self {
            q: "*".to_string(),
            query_by: String::new(),
            per_page,
            page,
        }
    }
}

/// Response body of the document search endpoint.
///
/// Hits are kept untyped; the adapter returns them verbatim.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    #[serde(default)]
    pub found: Option<u64>,
    #[serde(default)]
    pub hits: Option<Vec<Value>>,
}

impl SearchResult {
    pub fn with_hits(hits: Vec<Value>) -> Self {
        Self {
            found: Some(hits.len() as u64),
            hits: Some(hits),
        }
    }
}
