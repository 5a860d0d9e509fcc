//! Aggregation definition builders
//!
//! An aggregation builder produces the JSON fragment embedded under a name in
//! a search body's `aggregations` object; it performs no I/O of its own.

/// Missing aggregation
pub mod missing;

pub use missing::MissingAggregation;

/// A named aggregation definition
pub trait Aggregation {
    /// Returns the JSON source of this aggregation, as embedded in a search
    /// body (e.g. `{"missing":{"field":"price"}}`).
    fn source(&self) -> serde_json::Value;
}
