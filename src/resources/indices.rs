//! Index lifecycle endpoints: close and open.
//!
//! Each endpoint is its own builder type: required fields are validated
//! before any I/O, optional query parameters are omitted entirely when unset,
//! and a builder is configured, executed once, and discarded.

use reqwest::Method;

use crate::{
    client::Client,
    config::Config,
    error::ElasticError,
    types::indices::{AcknowledgedResponse, ExpandWildcards},
    url::{QueryString, encode_path_segment},
};

/// Accessor for the index lifecycle resources
pub struct Indices<'c, C: Config> {
    client: &'c Client<C>,
}

impl<C: Config> Client<C> {
    /// Returns the index lifecycle API resources
    #[must_use]
    pub const fn indices(&self) -> Indices<'_, C> {
        Indices { client: self }
    }
}

impl<'c, C: Config> Indices<'c, C> {
    /// Starts a close-index request
    #[must_use]
    pub fn close(&self) -> CloseIndex<'c, C> {
        CloseIndex::new(self.client)
    }

    /// Starts an open-index request
    #[must_use]
    pub fn open(&self) -> OpenIndex<'c, C> {
        OpenIndex::new(self.client)
    }
}

/// Shared parameter accumulator for the close/open twins; both take the same
/// query parameters and return the same acknowledgement shape.
#[derive(Debug, Default)]
struct LifecycleParams {
    index: Option<String>,
    timeout: Option<String>,
    master_timeout: Option<String>,
    ignore_unavailable: Option<bool>,
    allow_no_indices: Option<bool>,
    expand_wildcards: Option<ExpandWildcards>,
}

impl LifecycleParams {
    fn validate(&self) -> Result<(), ElasticError> {
        let mut missing = Vec::new();
        if self.index.is_none() {
            missing.push("index");
        }
        if missing.is_empty() {
            Ok(())
        } else {
            Err(ElasticError::Validation { missing })
        }
    }

    /// Renders `/{index}/{suffix}?...` with only the parameters that were set,
    /// using the server's camelCase query keys.
    fn build_url(&self, suffix: &str) -> Result<String, ElasticError> {
        let index = self.index.as_deref().ok_or(ElasticError::Validation {
            missing: vec!["index"],
        })?;

        let mut url = format!("/{}/{suffix}", encode_path_segment(index));

        let mut qs = QueryString::new();
        qs.set_opt("timeout", self.timeout.as_deref());
        qs.set_opt("masterTimeout", self.master_timeout.as_deref());
        qs.set_flag("ignoreUnavailable", self.ignore_unavailable);
        qs.set_flag("allowNoIndices", self.allow_no_indices);
        qs.set_opt(
            "expandWildcards",
            self.expand_wildcards.map(ExpandWildcards::as_str),
        );
        qs.append_to(&mut url)?;

        Ok(url)
    }
}

macro_rules! lifecycle_setters {
    () => {
        /// Sets the name of the index to operate on (required)
        #[must_use]
        pub fn with_index(mut self, index: impl Into<String>) -> Self {
            self.params.index = Some(index.into());
            self
        }

        /// Sets an explicit operation timeout (e.g. `"5s"`), advisory to the
        /// server rather than a local deadline
        #[must_use]
        pub fn with_timeout(mut self, timeout: impl Into<String>) -> Self {
            self.params.timeout = Some(timeout.into());
            self
        }

        /// Sets the timeout for the connection to the master node
        #[must_use]
        pub fn with_master_timeout(mut self, master_timeout: impl Into<String>) -> Self {
            self.params.master_timeout = Some(master_timeout.into());
            self
        }

        /// Sets whether unavailable concrete indices should be ignored
        #[must_use]
        pub const fn with_ignore_unavailable(mut self, ignore_unavailable: bool) -> Self {
            self.params.ignore_unavailable = Some(ignore_unavailable);
            self
        }

        /// Sets whether a wildcard expression resolving to no concrete
        /// indices is acceptable
        #[must_use]
        pub const fn with_allow_no_indices(mut self, allow_no_indices: bool) -> Self {
            self.params.allow_no_indices = Some(allow_no_indices);
            self
        }

        /// Sets how wildcard expressions expand to concrete indices
        #[must_use]
        pub const fn with_expand_wildcards(mut self, expand_wildcards: ExpandWildcards) -> Self {
            self.params.expand_wildcards = Some(expand_wildcards);
            self
        }
    };
}

/// Request builder for `POST /{index}/_close`
pub struct CloseIndex<'c, C: Config> {
    client: &'c Client<C>,
    params: LifecycleParams,
}

impl<'c, C: Config> CloseIndex<'c, C> {
    /// Creates a new close-index builder
    #[must_use]
    pub fn new(client: &'c Client<C>) -> Self {
        Self {
            client,
            params: LifecycleParams::default(),
        }
    }

    lifecycle_setters!();

    fn build_url(&self) -> Result<String, ElasticError> {
        self.params.build_url("_close")
    }

    /// Closes the index.
    ///
    /// # Errors
    ///
    /// Returns [`ElasticError::Validation`] without issuing a request when
    /// the index name is unset; otherwise transport, server, and decode
    /// failures from the round trip.
    pub async fn send(self) -> Result<AcknowledgedResponse, ElasticError> {
        self.params.validate()?;
        let url = self.build_url()?;
        self.client.request(Method::POST, &url).await
    }
}

/// Request builder for `POST /{index}/_open`
pub struct OpenIndex<'c, C: Config> {
    client: &'c Client<C>,
    params: LifecycleParams,
}

impl<'c, C: Config> OpenIndex<'c, C> {
    /// Creates a new open-index builder
    #[must_use]
    pub fn new(client: &'c Client<C>) -> Self {
        Self {
            client,
            params: LifecycleParams::default(),
        }
    }

    lifecycle_setters!();

    fn build_url(&self) -> Result<String, ElasticError> {
        self.params.build_url("_open")
    }

    /// Opens the index.
    ///
    /// # Errors
    ///
    /// Returns [`ElasticError::Validation`] without issuing a request when
    /// the index name is unset; otherwise transport, server, and decode
    /// failures from the round trip.
    pub async fn send(self) -> Result<AcknowledgedResponse, ElasticError> {
        self.params.validate()?;
        let url = self.build_url()?;
        self.client.request(Method::POST, &url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ElasticConfig;

    fn client() -> Client<ElasticConfig> {
        Client::with_config(ElasticConfig::new().with_base_url("http://localhost:9200"))
    }

    #[test]
    fn close_url_with_only_timeout() {
        let client = client();
        let req = client
            .indices()
            .close()
            .with_index("myindex")
            .with_timeout("5s");

        let url = req.build_url().unwrap();
        assert_eq!(url, "/myindex/_close?timeout=5s");
        assert!(!url.contains("allowNoIndices"));
        assert!(!url.contains("expandWildcards"));
        assert!(!url.contains("masterTimeout"));
        assert!(!url.contains("ignoreUnavailable"));
    }

    #[test]
    fn close_url_with_all_params() {
        let client = client();
        let req = client
            .indices()
            .close()
            .with_index("myindex")
            .with_timeout("5s")
            .with_master_timeout("10s")
            .with_ignore_unavailable(true)
            .with_allow_no_indices(false)
            .with_expand_wildcards(ExpandWildcards::Closed);

        assert_eq!(
            req.build_url().unwrap(),
            "/myindex/_close?timeout=5s&masterTimeout=10s&ignoreUnavailable=true\
             &allowNoIndices=false&expandWildcards=closed"
        );
    }

    #[test]
    fn build_url_is_deterministic() {
        let client = client();
        let req = client
            .indices()
            .close()
            .with_index("myindex")
            .with_allow_no_indices(true)
            .with_timeout("1m");

        assert_eq!(req.build_url().unwrap(), req.build_url().unwrap());
    }

    #[test]
    fn index_name_is_path_encoded() {
        let client = client();
        let req = client.indices().close().with_index("logs/2024 q1");
        assert_eq!(req.build_url().unwrap(), "/logs%2F2024%20q1/_close");
    }

    #[test]
    fn open_url_uses_open_suffix() {
        let client = client();
        let req = client.indices().open().with_index("myindex");
        assert_eq!(req.build_url().unwrap(), "/myindex/_open");
    }

    #[test]
    fn validate_lists_missing_index() {
        let client = client();
        let err = client.indices().close().params.validate().unwrap_err();
        match err {
            ElasticError::Validation { missing } => assert_eq!(missing, vec!["index"]),
            other => panic!("expected Validation error, got {other:?}"),
        }
    }

    #[test]
    fn validate_passes_with_index_set() {
        let client = client();
        let req = client.indices().open().with_index("myindex");
        assert!(req.params.validate().is_ok());
    }
}
