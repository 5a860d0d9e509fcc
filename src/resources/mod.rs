//! API resource implementations for the Elasticsearch client

/// Index lifecycle resources
pub mod indices;

pub use indices::{CloseIndex, Indices, OpenIndex};
