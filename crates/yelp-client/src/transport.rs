//! Pluggable HTTP transport.
//!
//! The client only needs "GET with headers, give me a status and a body".
//! [`ReqwestTransport`] is the default; tests and embedders can inject their
//! own [`HttpTransport`].
//!
//! A [`TransportResponse`] owns the underlying connection resource. Dropping
//! the box releases it, so every response is released exactly once whether
//! its body is read or discarded.

use std::sync::{Arc, OnceLock};
use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use reqwest::header::HeaderMap;
use url::Url;

use crate::error::ClientResult;

/// An HTTP client capable of issuing GET requests.
#[async_trait]
pub trait HttpTransport: Send + Sync + std::fmt::Debug {
    /// Perform a GET request.
    ///
    /// A response is returned for every HTTP status; only failures to obtain
    /// a response at all are errors.
    async fn get(&self, url: Url, headers: HeaderMap) -> ClientResult<Box<dyn TransportResponse>>;
}

/// A received response whose body has not been read yet.
#[async_trait]
pub trait TransportResponse: Send {
    /// HTTP status code.
    fn status(&self) -> StatusCode;

    /// Read the full body, consuming (and releasing) the response.
    async fn bytes(self: Box<Self>) -> ClientResult<Vec<u8>>;
}

/// [`HttpTransport`] backed by `reqwest`.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Wrap an existing `reqwest` client.
    #[must_use]
    pub const fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Build a transport with request and connect timeouts.
    ///
    /// The library sets no timeouts of its own; use this when bounded latency
    /// is needed.
    pub fn with_timeouts(request_timeout: Duration, connect_timeout: Duration) -> ClientResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(request_timeout)
            .connect_timeout(connect_timeout)
            .gzip(true)
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, url: Url, headers: HeaderMap) -> ClientResult<Box<dyn TransportResponse>> {
        let response = self.client.get(url).headers(headers).send().await?;
        Ok(Box::new(ReqwestResponse(response)))
    }
}

struct ReqwestResponse(reqwest::Response);

#[async_trait]
impl TransportResponse for ReqwestResponse {
    fn status(&self) -> StatusCode {
        self.0.status()
    }

    async fn bytes(self: Box<Self>) -> ClientResult<Vec<u8>> {
        Ok(self.0.bytes().await?.to_vec())
    }
}

/// Process-wide default transport, created on first use.
///
/// Shares one connection pool across every client built without an explicit
/// transport.
#[must_use]
pub fn default_transport() -> Arc<dyn HttpTransport> {
    static DEFAULT: OnceLock<Arc<ReqwestTransport>> = OnceLock::new();
    DEFAULT.get_or_init(|| Arc::new(ReqwestTransport::default())).clone()
}
