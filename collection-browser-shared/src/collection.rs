//! Collection and field descriptors.

use serde::{Deserialize, Serialize};

/// A field declared in a collection schema.
///
/// The type string follows the search service's own taxonomy
/// (`string`, `int32`, `string[]`, ...) and is not validated here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: String,
}

impl Field {
    pub fn new(name: impl Into<String>, field_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            field_type: field_type.into(),
        }
    }
}

/// A named group of documents with its declared fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collection {
    /// Unique per service instance.
    pub name: String,
    /// Fields in the order the service reports them.
    pub fields: Vec<Field>,
    /// Informational only. Zero when the service does not report a count.
    pub num_documents: i64,
}

impl Collection {
    /// Create a collection descriptor.
    pub fn new(name: impl Into<String>, fields: Vec<Field>, num_documents: i64) -> Self {
        Self {
            name: name.into(),
            fields,
            num_documents,
        }
    }
}
