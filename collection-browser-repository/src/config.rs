//! Configuration types for the CollectionRepository.

/// Largest page the search service will return for one query.
pub const DEFAULT_PER_PAGE: u32 = 250;

/// Configuration for the CollectionRepository.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollectionRepositoryConfig {
    /// Number of documents requested per fetch. Only the first page is ever read.
    pub per_page: u32,
}

impl Default for CollectionRepositoryConfig {
    fn default() -> Self {
        Self {
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

impl CollectionRepositoryConfig {
    /// Create a config with a custom page size.
    pub fn with_per_page(per_page: u32) -> Self {
        Self { per_page }
    }
}
