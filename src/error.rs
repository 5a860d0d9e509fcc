use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when using the Elasticsearch client
///
/// The variants are disjoint by construction: a failed validation never
/// reaches the transport, a non-success status is always [`ElasticError::Api`]
/// regardless of what the body contains, and [`ElasticError::Decode`] only
/// occurs on a success status.
#[derive(Debug, Error)]
pub enum ElasticError {
    /// Required request fields were left unset; no request was issued
    #[error("missing required fields: {missing:?}")]
    Validation {
        /// Names of every required-but-unset field
        missing: Vec<&'static str>,
    },

    /// The request could not be sent or no response was received
    #[error("transport error: {0}")]
    Transport(#[source] reqwest::Error),

    /// The server responded with a non-success status
    #[error("server returned {}: {}", .0.status, .0.message)]
    Api(ApiErrorObject),

    /// A success response body could not be decoded into the expected shape
    #[error("decode error: {0}")]
    Decode(String),

    /// The query string could not be encoded
    #[error("failed to encode query string: {0}")]
    QueryEncoding(#[from] serde_urlencoded::ser::Error),

    /// Configuration error (e.g., credentials with invalid characters)
    #[error("invalid configuration: {0}")]
    Config(String),
}

/// Error details extracted from an Elasticsearch error response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiErrorObject {
    /// HTTP status code of the response
    pub status: u16,
    /// Server-supplied error message, or a capped body snippet when the body
    /// carried no recognizable message
    pub message: String,
}

/// Error body shapes sent by the server: 1.x uses a plain string under
/// `error`, later versions an object with a `reason`.
#[derive(Debug, Deserialize)]
struct RawErrorBody {
    #[serde(default)]
    error: Option<serde_json::Value>,
    #[serde(default)]
    status: Option<u16>,
}

fn snippet(body: &[u8]) -> String {
    String::from_utf8_lossy(&body[..body.len().min(400)]).into_owned()
}

fn error_message(error: &serde_json::Value) -> Option<String> {
    match error {
        serde_json::Value::String(s) => Some(s.clone()),
        serde_json::Value::Object(obj) => obj
            .get("reason")
            .and_then(serde_json::Value::as_str)
            .map(str::to_owned),
        _ => None,
    }
}

/// Maps a serde deserialization error to an [`ElasticError::Decode`] with a
/// capped body snippet for context.
pub(crate) fn map_deser(e: &serde_json::Error, body: &[u8]) -> ElasticError {
    ElasticError::Decode(format!("{e}: {}", snippet(body)))
}

/// Builds an [`ElasticError::Api`] from a non-success response.
///
/// Attempts to extract the server-supplied message from the JSON error body,
/// falling back to a capped plain-text snippet.
pub(crate) fn deserialize_api_error(status: StatusCode, body: &[u8]) -> ElasticError {
    if let Ok(raw) = serde_json::from_slice::<RawErrorBody>(body)
        && let Some(message) = raw.error.as_ref().and_then(error_message)
    {
        return ElasticError::Api(ApiErrorObject {
            status: raw.status.unwrap_or_else(|| status.as_u16()),
            message,
        });
    }

    ElasticError::Api(ApiErrorObject {
        status: status.as_u16(),
        message: snippet(body),
    })
}
