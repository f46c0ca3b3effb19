//! Two-field projection of a search hit.

use serde::{Deserialize, Serialize};

/// A document reduced to its identifier and title.
///
/// Deserializing from a full document keeps only `id` and `title`; every
/// other key is ignored. Missing keys become empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionEntry {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
}

impl CollectionEntry {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }
}
