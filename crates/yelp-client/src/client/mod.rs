//! Yelp v2 API client.
//!
//! Provides async signed requests with:
//! - OAuth 1.0a HMAC-SHA1 signing via a pluggable [`RequestSigner`]
//! - A pluggable [`HttpTransport`] (shared `reqwest` transport by default)
//! - Raw body passthrough; decoding is left to the caller

use std::sync::Arc;

use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use reqwest::{Method, StatusCode};
use url::Url;

use crate::config::{Config, api};
use crate::error::{ClientError, ClientResult};
use crate::models::SearchCriteria;
use crate::oauth::{Credentials, HmacSha1Signer, RequestSigner, percent_encode};
use crate::transport::{HttpTransport, TransportResponse, default_transport};

/// Yelp API client.
#[derive(Clone)]
pub struct YelpClient {
    /// HTTP transport.
    transport: Arc<dyn HttpTransport>,

    /// Request signer.
    signer: Arc<dyn RequestSigner>,

    /// Application credentials, used to sign every request.
    consumer: Credentials,

    /// End-user credentials, the resource owner in the signature.
    token: Credentials,

    /// API base URL.
    api_url: Url,

    /// Limit sent when a search leaves it at zero.
    default_limit: u32,
}

impl YelpClient {
    /// Create a client that uses the shared default transport.
    ///
    /// # Errors
    ///
    /// Returns error if the configured API URL is invalid.
    pub fn new(config: Config) -> ClientResult<Self> {
        Self::with_transport(config, default_transport())
    }

    /// Create a client with an injected transport.
    ///
    /// A base URL without a trailing slash gets one, and a zero default limit
    /// falls back to [`api::DEFAULT_LIMIT`].
    ///
    /// # Errors
    ///
    /// Returns error if the configured API URL is invalid.
    pub fn with_transport(config: Config, transport: Arc<dyn HttpTransport>) -> ClientResult<Self> {
        let mut api_url = Url::parse(&config.api_url)?;
        // Endpoint paths are joined onto the base, which drops a last segment
        // without a trailing slash.
        if !api_url.path().ends_with('/') {
            let path = format!("{}/", api_url.path());
            api_url.set_path(&path);
        }

        let default_limit = match config.default_limit {
            0 => api::DEFAULT_LIMIT,
            limit => limit,
        };

        Ok(Self {
            transport,
            signer: Arc::new(HmacSha1Signer),
            consumer: config.consumer_credentials(),
            token: config.token_credentials(),
            api_url,
            default_limit,
        })
    }

    /// Replace the request signer.
    #[must_use]
    pub fn with_signer(mut self, signer: Arc<dyn RequestSigner>) -> Self {
        self.signer = signer;
        self
    }

    /// API base URL.
    #[must_use]
    pub const fn api_url(&self) -> &Url {
        &self.api_url
    }

    /// Limit used for searches that leave it at zero.
    #[must_use]
    pub const fn default_limit(&self) -> u32 {
        self.default_limit
    }

    /// Search for businesses.
    ///
    /// Returns the raw response body for any HTTP status; decode it with
    /// [`SearchResult::from_slice`](crate::models::SearchResult::from_slice).
    ///
    /// # Errors
    ///
    /// Returns error if signing, the request, or reading the body fails.
    pub async fn search(&self, criteria: &SearchCriteria) -> ClientResult<Vec<u8>> {
        let url = self.api_url.join(api::SEARCH_PATH)?;
        let params = criteria.to_query(self.default_limit);

        let response = self.get(url, &params).await?;
        response.bytes().await
    }

    /// Look up a single business by its Yelp ID.
    ///
    /// The ID is percent-encoded into one path segment; an empty ID requests
    /// `business/` as is.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidId`] without sending anything for `.` and
    /// `..`, which URLs always resolve as dot segments.
    /// Returns [`ClientError::NotFound`] on a 404, otherwise error if signing,
    /// the request, or reading the body fails.
    pub async fn business(&self, id: &str) -> ClientResult<Vec<u8>> {
        if matches!(id, "." | "..") {
            return Err(ClientError::invalid_id(id));
        }

        let url = self.api_url.join(&format!("{}{}", api::BUSINESS_PATH, percent_encode(id)))?;

        let response = self.get(url, &[]).await?;
        if response.status() == StatusCode::NOT_FOUND {
            tracing::debug!(id, "Business not found");
            return Err(ClientError::not_found(format!("business/{id}")));
        }

        response.bytes().await
    }

    /// Sign and send a GET request.
    ///
    /// `url` must not carry a query; `params` are signed and then appended.
    async fn get(
        &self,
        mut url: Url,
        params: &[(String, String)],
    ) -> ClientResult<Box<dyn TransportResponse>> {
        let authorization = self.signer.authorization(
            &Method::GET,
            &url,
            params,
            &self.consumer,
            Some(&self.token),
        )?;

        if !params.is_empty() {
            url.query_pairs_mut().extend_pairs(params);
        }

        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&authorization)
                .map_err(|e| ClientError::InvalidHeader(e.to_string()))?,
        );
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        tracing::debug!(path = %url.path(), "Sending signed request");
        let response = self.transport.get(url, headers).await?;
        tracing::debug!(status = response.status().as_u16(), "Received response");

        Ok(response)
    }
}

impl std::fmt::Debug for YelpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("YelpClient")
            .field("api_url", &self.api_url.as_str())
            .field("consumer_key", &self.consumer.token)
            .field("default_limit", &self.default_limit)
            .finish()
    }
}
