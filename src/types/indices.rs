//! Types for the index lifecycle endpoints

use serde::{Deserialize, Serialize};

/// Cluster acknowledgement of an index lifecycle operation
///
/// Returned by `POST /{index}/_close` and `POST /{index}/_open`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AcknowledgedResponse {
    /// Whether the operation was accepted/applied cluster-side
    pub acknowledged: bool,
}

/// Wildcard expansion behavior for index-name patterns
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ExpandWildcards {
    /// Expand to open indices only
    Open,
    /// Expand to closed indices only
    Closed,
    /// Expand to both open and closed indices
    All,
    /// Do not expand wildcard expressions
    None,
}

impl ExpandWildcards {
    /// The query-string value the server expects
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Closed => "closed",
            Self::All => "all",
            Self::None => "none",
        }
    }
}
