use reqwest::Method;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::{config::Config, error, error::ElasticError};

/// Elasticsearch API client
///
/// The client is generic over a [`Config`] implementation that provides
/// authentication and URL resolution. It performs exactly one round trip per
/// call: no retries, no backoff, no caching.
#[derive(Debug, Clone)]
pub struct Client<C: Config> {
    http: reqwest::Client,
    config: C,
}

impl Client<crate::config::ElasticConfig> {
    /// Creates a new client with default configuration
    ///
    /// Uses the `ELASTICSEARCH_URL` environment variable for the cluster
    /// base URL.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(crate::config::ElasticConfig::new())
    }
}

impl<C: Config + Default> Default for Client<C> {
    fn default() -> Self {
        Self::with_config(C::default())
    }
}

impl<C: Config> Client<C> {
    /// Creates a new client with the given configuration.
    ///
    /// # Panics
    ///
    /// Panics if the reqwest client cannot be built.
    #[must_use]
    pub fn with_config(config: C) -> Self {
        Self {
            http: reqwest::Client::builder()
                .connect_timeout(std::time::Duration::from_secs(5))
                .timeout(std::time::Duration::from_secs(60))
                .build()
                .expect("reqwest client"),
            config,
        }
    }

    /// Replaces the HTTP client with a custom one
    #[must_use]
    pub fn with_http_client(mut self, http: reqwest::Client) -> Self {
        self.http = http;
        self
    }

    /// Returns a reference to the client's configuration
    #[must_use]
    pub const fn config(&self) -> &C {
        &self.config
    }

    /// Issues a bodyless request and decodes the JSON response.
    pub(crate) async fn request<O>(
        &self,
        method: Method,
        path_and_query: &str,
    ) -> Result<O, ElasticError>
    where
        O: DeserializeOwned,
    {
        let bytes = self.request_raw(method, path_and_query).await?;
        serde_json::from_slice(&bytes).map_err(|e| error::map_deser(&e, &bytes))
    }

    async fn request_raw(
        &self,
        method: Method,
        path_and_query: &str,
    ) -> Result<bytes::Bytes, ElasticError> {
        let url = self.config.url(path_and_query);
        let headers = self.config.headers()?;

        let request = self
            .http
            .request(method.clone(), url.as_str())
            .headers(headers)
            .build()
            .map_err(ElasticError::Transport)?;

        debug!(%method, %url, "sending request");

        let response = self
            .http
            .execute(request)
            .await
            .map_err(ElasticError::Transport)?;

        let status = response.status();
        // bytes() drains the body on every path, error statuses included
        let bytes = response.bytes().await.map_err(ElasticError::Transport)?;

        debug!(
            status = status.as_u16(),
            body = %String::from_utf8_lossy(&bytes),
            "received response"
        );

        if status.is_success() {
            return Ok(bytes);
        }

        Err(error::deserialize_api_error(status, &bytes))
    }
}
