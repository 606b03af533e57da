//! Shared test transport that records requests and counts response releases.
#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use reqwest::StatusCode;
use reqwest::header::HeaderMap;
use url::Url;

use yelp_client::error::{ClientError, ClientResult};
use yelp_client::transport::{HttpTransport, TransportResponse};

/// How the double should behave on each request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Respond with the configured status and body.
    Respond,
    /// Respond, but fail while reading the body.
    BodyFails,
    /// Fail before any response exists.
    RequestFails,
}

/// Transport double.
#[derive(Debug)]
pub struct RecordingTransport {
    status: StatusCode,
    body: Vec<u8>,
    outcome: Outcome,
    releases: Arc<AtomicUsize>,
    requests: Mutex<Vec<(Url, HeaderMap)>>,
}

impl RecordingTransport {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status: StatusCode::from_u16(status).expect("valid status"),
            body: body.into(),
            outcome: Outcome::Respond,
            releases: Arc::new(AtomicUsize::new(0)),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn with_outcome(mut self, outcome: Outcome) -> Self {
        self.outcome = outcome;
        self
    }

    /// Number of responses released (dropped) so far.
    pub fn releases(&self) -> usize {
        self.releases.load(Ordering::SeqCst)
    }

    /// URLs of every request received.
    pub fn urls(&self) -> Vec<Url> {
        self.requests.lock().unwrap().iter().map(|(u, _)| u.clone()).collect()
    }

    /// Headers of the most recent request.
    pub fn last_headers(&self) -> HeaderMap {
        self.requests.lock().unwrap().last().map(|(_, h)| h.clone()).unwrap_or_default()
    }

    /// Value of a query parameter on the most recent request.
    pub fn last_param(&self, key: &str) -> Option<String> {
        let urls = self.urls();
        let url = urls.last()?;
        url.query_pairs().find(|(k, _)| k == key).map(|(_, v)| v.into_owned())
    }
}

#[async_trait]
impl HttpTransport for RecordingTransport {
    async fn get(&self, url: Url, headers: HeaderMap) -> ClientResult<Box<dyn TransportResponse>> {
        self.requests.lock().unwrap().push((url, headers));

        if self.outcome == Outcome::RequestFails {
            return Err(ClientError::transport("connection refused"));
        }

        Ok(Box::new(CountingResponse {
            status: self.status,
            body: self.body.clone(),
            fail_body: self.outcome == Outcome::BodyFails,
            releases: Arc::clone(&self.releases),
        }))
    }
}

struct CountingResponse {
    status: StatusCode,
    body: Vec<u8>,
    fail_body: bool,
    releases: Arc<AtomicUsize>,
}

impl Drop for CountingResponse {
    fn drop(&mut self) {
        self.releases.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl TransportResponse for CountingResponse {
    fn status(&self) -> StatusCode {
        self.status
    }

    async fn bytes(self: Box<Self>) -> ClientResult<Vec<u8>> {
        if self.fail_body {
            return Err(ClientError::body_read("connection reset while reading body"));
        }
        Ok(self.body.clone())
    }
}
