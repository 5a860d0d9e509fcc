use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use secrecy::{ExposeSecret, SecretString};

/// Default Elasticsearch base URL
pub const ELASTIC_DEFAULT_BASE: &str = "http://127.0.0.1:9200";

/// Configuration for the Elasticsearch client
///
/// Debug output automatically redacts the basic-auth password via
/// [`SecretString`].
#[derive(Clone, Debug)]
pub struct ElasticConfig {
    base_url: String,
    username: Option<String>,
    password: Option<SecretString>,
}

impl Default for ElasticConfig {
    fn default() -> Self {
        let base_url = std::env::var("ELASTICSEARCH_URL")
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| ELASTIC_DEFAULT_BASE.into());

        Self {
            base_url,
            username: None,
            password: None,
        }
    }
}

impl ElasticConfig {
    /// Creates a new configuration with default settings
    ///
    /// Reads `ELASTICSEARCH_URL` for the cluster base URL (defaults to
    /// `http://127.0.0.1:9200`). Credentials are unset; many clusters accept
    /// unauthenticated requests.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the cluster base URL
    #[must_use]
    pub fn with_base_url(mut self, base: impl Into<String>) -> Self {
        self.base_url = base.into();
        self
    }

    /// Sets basic-auth credentials
    #[must_use]
    pub fn with_basic_auth(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.username = Some(username.into());
        self.password = Some(SecretString::from(password.into()));
        self
    }

    /// Returns the configured base URL
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

/// Configuration trait for the Elasticsearch client
///
/// Implement this trait to provide custom authentication and URL resolution.
pub trait Config: Send + Sync {
    /// Returns HTTP headers to include in every request
    ///
    /// # Errors
    ///
    /// Returns an error if header values contain invalid characters.
    fn headers(&self) -> Result<HeaderMap, crate::error::ElasticError>;

    /// Constructs the full URL for a path (with query string already attached)
    fn url(&self, path_and_query: &str) -> String;
}

impl Config for ElasticConfig {
    fn headers(&self) -> Result<HeaderMap, crate::error::ElasticError> {
        use crate::error::ElasticError;

        let mut h = HeaderMap::new();

        if let Some(username) = &self.username {
            let password = self
                .password
                .as_ref()
                .map(ExposeSecret::expose_secret)
                .unwrap_or_default();
            let token = BASE64.encode(format!("{username}:{password}"));
            let mut value = HeaderValue::from_str(&format!("Basic {token}"))
                .map_err(|_| ElasticError::Config("Invalid basic-auth credentials".into()))?;
            value.set_sensitive(true);
            h.insert(AUTHORIZATION, value);
        }

        Ok(h)
    }

    fn url(&self, path_and_query: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path_and_query.trim_start_matches('/');
        format!("{base}/{path}")
    }
}
