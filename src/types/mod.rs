//! Request and response types for the Elasticsearch API

/// Index lifecycle endpoint types
pub mod indices;

pub use indices::{AcknowledgedResponse, ExpandWildcards};
