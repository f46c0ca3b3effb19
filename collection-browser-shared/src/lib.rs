//! # Collection Browser Shared
//!
//! Data types handed from the search-service adapter to the host layer.
//! Everything here is constructed per call and never cached.

mod collection;
mod entry;

pub use collection::{Collection, Field};
pub use entry::CollectionEntry;
