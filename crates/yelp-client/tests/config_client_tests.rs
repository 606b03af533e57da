//! Configuration and client tests.
//!
//! Tests actual behavior, not constants.

use std::sync::Arc;

use reqwest::Method;
use url::Url;
use yelp_client::client::YelpClient;
use yelp_client::config::{Config, api};
use yelp_client::error::{ClientError, ClientResult};
use yelp_client::models::SearchCriteria;
use yelp_client::oauth::{Credentials, RequestSigner};
use yelp_client::transport::ReqwestTransport;

mod common;
use common::RecordingTransport;

// =============================================================================
// Config Behavior Tests
// =============================================================================

#[test]
fn test_config_targets_live_endpoint() {
    let config = Config::new("ck", "cs", "t", "ts");
    assert_eq!(config.api_url, "http://api.yelp.com/v2/");
    assert_eq!(config.default_limit, api::DEFAULT_LIMIT);
}

#[test]
fn test_config_clone_preserves_credentials() {
    let config = Config::new("ck", "cs", "t", "ts");
    let cloned = config.clone();
    assert_eq!(config.consumer_credentials(), cloned.consumer_credentials());
    assert_eq!(config.token_credentials(), cloned.token_credentials());
}

// =============================================================================
// Client Behavior Tests
// =============================================================================

#[test]
fn test_client_creation_succeeds() {
    let client = YelpClient::new(Config::new("ck", "cs", "t", "ts"));
    assert!(client.is_ok());
}

#[test]
fn test_client_invalid_api_url() {
    let config = Config::new("ck", "cs", "t", "ts").with_api_url("not a url");
    let result = YelpClient::new(config);
    assert!(matches!(result, Err(ClientError::InvalidUrl(_))));
}

#[test]
fn test_client_exposes_config() {
    let config = Config::new("ck", "cs", "t", "ts").with_default_limit(5);
    let client = YelpClient::new(config).unwrap();
    assert_eq!(client.api_url().as_str(), "http://api.yelp.com/v2/");
    assert_eq!(client.default_limit(), 5);
}

#[tokio::test]
async fn test_client_base_url_without_trailing_slash() {
    let transport = Arc::new(RecordingTransport::new(200, "{}"));

    let mut config = Config::new("ck", "cs", "t", "ts");
    config.api_url = "http://localhost:8080/v2".to_string();
    let client = YelpClient::with_transport(config, transport.clone()).unwrap();
    assert_eq!(client.api_url().as_str(), "http://localhost:8080/v2/");

    let config = Config::new("ck", "cs", "t", "ts").with_api_url("http://localhost:8080/v2");
    let client = YelpClient::with_transport(config, transport.clone()).unwrap();

    client.search(&SearchCriteria::new("a", "b")).await.unwrap();
    client.business("yelp-san-francisco").await.unwrap();

    let urls = transport.urls();
    assert_eq!(urls[0].path(), "/v2/search");
    assert_eq!(urls[1].path(), "/v2/business/yelp-san-francisco");
}

#[tokio::test]
async fn test_zero_default_limit_sends_standard_limit() {
    let transport = Arc::new(RecordingTransport::new(200, "{}"));

    let config = Config::new("ck", "cs", "t", "ts").with_default_limit(0);
    let client = YelpClient::with_transport(config, transport.clone()).unwrap();
    assert_eq!(client.default_limit(), api::DEFAULT_LIMIT);

    client.search(&SearchCriteria::new("a", "b")).await.unwrap();
    assert_eq!(transport.last_param("limit").as_deref(), Some("20"));

    let mut config = Config::new("ck", "cs", "t", "ts");
    config.default_limit = 0;
    let client = YelpClient::with_transport(config, transport.clone()).unwrap();

    client.search(&SearchCriteria::new("a", "b")).await.unwrap();
    assert_eq!(transport.last_param("limit").as_deref(), Some("20"));
}

#[test]
fn test_client_debug_hides_secrets() {
    let config = Config::new("public-key", "consumer-secret-xyz", "token-abc", "token-secret-xyz");
    let client = YelpClient::new(config).unwrap();
    let debug = format!("{client:?}");
    assert!(debug.contains("public-key"));
    assert!(!debug.contains("consumer-secret-xyz"));
    assert!(!debug.contains("token-secret-xyz"));
}

#[test]
fn test_client_with_custom_reqwest_transport() {
    let transport = ReqwestTransport::new(reqwest::Client::new());
    let client = YelpClient::with_transport(Config::new("ck", "cs", "t", "ts"), Arc::new(transport));
    assert!(client.is_ok());
}

#[test]
fn test_client_is_cloneable() {
    let client = YelpClient::new(Config::new("ck", "cs", "t", "ts")).unwrap();
    let cloned = client.clone();
    assert_eq!(client.api_url(), cloned.api_url());
}

// =============================================================================
// Pluggable Signer Tests
// =============================================================================

#[derive(Debug)]
struct StaticSigner;

impl RequestSigner for StaticSigner {
    fn authorization(
        &self,
        method: &Method,
        _url: &Url,
        params: &[(String, String)],
        consumer: &Credentials,
        token: Option<&Credentials>,
    ) -> ClientResult<String> {
        Ok(format!(
            "Static {} {} {} {}",
            method,
            consumer.token,
            token.map(|t| t.token.as_str()).unwrap_or("-"),
            params.len()
        ))
    }
}

#[tokio::test]
async fn test_custom_signer_is_used() {
    let transport = Arc::new(RecordingTransport::new(200, "{}"));
    let client = YelpClient::with_transport(Config::new("ck", "cs", "tok", "ts"), transport.clone())
        .unwrap()
        .with_signer(Arc::new(StaticSigner));

    client.search(&SearchCriteria::new("a", "b")).await.unwrap();
    let headers = transport.last_headers();
    assert_eq!(headers.get("authorization").unwrap(), "Static GET ck tok 5");

    client.business("x").await.unwrap();
    let headers = transport.last_headers();
    assert_eq!(headers.get("authorization").unwrap(), "Static GET ck tok 0");
}

#[derive(Debug)]
struct FailingSigner;

impl RequestSigner for FailingSigner {
    fn authorization(
        &self,
        _method: &Method,
        _url: &Url,
        _params: &[(String, String)],
        _consumer: &Credentials,
        _token: Option<&Credentials>,
    ) -> ClientResult<String> {
        Err(ClientError::signing("key unavailable"))
    }
}

#[tokio::test]
async fn test_signing_failure_sends_nothing() {
    let transport = Arc::new(RecordingTransport::new(200, "{}"));
    let client = YelpClient::with_transport(Config::new("ck", "cs", "t", "ts"), transport.clone())
        .unwrap()
        .with_signer(Arc::new(FailingSigner));

    let err = client.business("x").await.unwrap_err();

    assert!(matches!(err, ClientError::Signing(_)));
    assert!(transport.urls().is_empty());
    assert_eq!(transport.releases(), 0);
}

#[tokio::test]
async fn test_invalid_header_value_is_rejected() {
    #[derive(Debug)]
    struct NewlineSigner;

    impl RequestSigner for NewlineSigner {
        fn authorization(
            &self,
            _method: &Method,
            _url: &Url,
            _params: &[(String, String)],
            _consumer: &Credentials,
            _token: Option<&Credentials>,
        ) -> ClientResult<String> {
            Ok("OAuth bad\nvalue".to_string())
        }
    }

    let transport = Arc::new(RecordingTransport::new(200, "{}"));
    let client = YelpClient::with_transport(Config::new("ck", "cs", "t", "ts"), transport.clone())
        .unwrap()
        .with_signer(Arc::new(NewlineSigner));

    let err = client.search(&SearchCriteria::default()).await.unwrap_err();
    assert!(matches!(err, ClientError::InvalidHeader(_)));
    assert!(transport.urls().is_empty());
}
