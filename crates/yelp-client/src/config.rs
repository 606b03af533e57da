//! Configuration for the Yelp API client.

use crate::oauth::Credentials;

/// API configuration constants.
pub mod api {
    /// Base URL for the Yelp v2 API. Endpoint paths are joined onto it.
    pub const BASE_URL: &str = "http://api.yelp.com/v2/";

    /// Search endpoint path.
    pub const SEARCH_PATH: &str = "search";

    /// Business lookup endpoint path.
    pub const BUSINESS_PATH: &str = "business/";

    /// Result limit used when the caller leaves `limit` at zero.
    pub const DEFAULT_LIMIT: u32 = 20;
}

/// Client configuration.
///
/// Holds the two OAuth credential pairs: the consumer pair identifies the
/// application and the token pair identifies the authorized user.
#[derive(Clone)]
pub struct Config {
    /// Consumer key.
    pub consumer_key: String,

    /// Consumer secret.
    pub consumer_secret: String,

    /// Access token.
    pub token: String,

    /// Access token secret.
    pub token_secret: String,

    /// Base API URL (overridable for testing with mock servers).
    pub api_url: String,

    /// Limit sent when a search leaves `limit` at zero.
    pub default_limit: u32,
}

impl Config {
    /// Create a configuration for the live API endpoint.
    #[must_use]
    pub fn new(
        consumer_key: impl Into<String>,
        consumer_secret: impl Into<String>,
        token: impl Into<String>,
        token_secret: impl Into<String>,
    ) -> Self {
        Self {
            consumer_key: consumer_key.into(),
            consumer_secret: consumer_secret.into(),
            token: token.into(),
            token_secret: token_secret.into(),
            api_url: api::BASE_URL.to_string(),
            default_limit: api::DEFAULT_LIMIT,
        }
    }

    /// Create a test configuration pointing at a mock server.
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            api_url: format!("{}/v2/", base_url.trim_end_matches('/')),
            ..Self::new("test-consumer-key", "test-consumer-secret", "test-token", "test-token-secret")
        }
    }

    /// Override the base API URL. A trailing slash is added if missing.
    #[must_use]
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        let mut api_url = api_url.into();
        if !api_url.ends_with('/') {
            api_url.push('/');
        }
        self.api_url = api_url;
        self
    }

    /// Override the default search limit. Zero keeps [`api::DEFAULT_LIMIT`].
    #[must_use]
    pub const fn with_default_limit(mut self, limit: u32) -> Self {
        self.default_limit = if limit == 0 { api::DEFAULT_LIMIT } else { limit };
        self
    }

    /// Credentials identifying the calling application.
    #[must_use]
    pub fn consumer_credentials(&self) -> Credentials {
        Credentials::new(&self.consumer_key, &self.consumer_secret)
    }

    /// Credentials identifying the authorized end user.
    #[must_use]
    pub fn token_credentials(&self) -> Credentials {
        Credentials::new(&self.token, &self.token_secret)
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("consumer_key", &self.consumer_key)
            .field("api_url", &self.api_url)
            .field("default_limit", &self.default_limit)
            .finish()
    }
}
