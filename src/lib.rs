#![deny(warnings)]
#![deny(clippy::all)]
#![deny(missing_docs)]

//! Async Elasticsearch API client with typed per-endpoint request builders,
//! aggregation sources, and wiremock tests.

/// Aggregation definition builders
pub mod aggs;
/// HTTP client implementation
pub mod client;
/// Configuration types for the client
pub mod config;
/// Error types
pub mod error;
/// API resource implementations
pub mod resources;
/// Test support utilities (for use in tests)
#[doc(hidden)]
pub mod test_support;
/// Request and response types
pub mod types;
mod url;

pub use crate::client::Client;
pub use crate::config::ElasticConfig;
pub use crate::error::{ApiErrorObject, ElasticError};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::aggs::{Aggregation, MissingAggregation};
    pub use crate::types::*;
    pub use crate::{Client, ElasticConfig, ElasticError};
}
