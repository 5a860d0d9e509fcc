//! Path-segment encoding and query-string assembly shared by all endpoints.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::error::ElasticError;

/// RFC 3986 unreserved characters pass through untouched; everything else is
/// percent-encoded so index names with slashes or spaces cannot alter the
/// path structure.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// URL-encodes a value substituted into a path template placeholder.
pub(crate) fn encode_path_segment(value: &str) -> String {
    utf8_percent_encode(value, PATH_SEGMENT).to_string()
}

/// Accumulator for query parameters that were explicitly set.
///
/// Parameters appear in insertion order, so a given set of inputs always
/// renders the identical query string. Unset parameters contribute nothing,
/// which keeps "not specified" distinguishable from "specified as false".
#[derive(Debug, Default)]
pub(crate) struct QueryString {
    params: Vec<(&'static str, String)>,
}

impl QueryString {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Adds a string parameter if it was set.
    pub(crate) fn set_opt(&mut self, key: &'static str, value: Option<&str>) {
        if let Some(v) = value {
            self.params.push((key, v.to_string()));
        }
    }

    /// Adds a tri-state flag: absent flags are omitted, explicit `false`
    /// still renders `key=false`.
    pub(crate) fn set_flag(&mut self, key: &'static str, value: Option<bool>) {
        if let Some(v) = value {
            self.params.push((key, v.to_string()));
        }
    }

    /// Appends `?key=value&...` to `url`, or nothing when no parameter was set.
    pub(crate) fn append_to(&self, url: &mut String) -> Result<(), ElasticError> {
        if self.params.is_empty() {
            return Ok(());
        }
        let encoded = serde_urlencoded::to_string(&self.params)?;
        url.push('?');
        url.push_str(&encoded);
        Ok(())
    }
}
