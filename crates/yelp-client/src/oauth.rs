//! OAuth 1.0a request signing.
//!
//! Yelp v2 authenticates every call with a two-credential HMAC-SHA1 signature
//! (RFC 5849) carried in the `Authorization` header. Only signing with
//! pre-obtained static credentials is supported; there is no token exchange.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use hmac::{Hmac, Mac};
use reqwest::Method;
use sha1::Sha1;
use url::Url;

use crate::error::{ClientError, ClientResult};

type HmacSha1 = Hmac<Sha1>;

/// A token/secret pair.
///
/// Used both for the consumer (application) credentials and the access
/// (end user) credentials.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Public half (consumer key or access token).
    pub token: String,

    /// Shared secret.
    pub secret: String,
}

impl Credentials {
    /// Create a credential pair.
    #[must_use]
    pub fn new(token: impl Into<String>, secret: impl Into<String>) -> Self {
        Self { token: token.into(), secret: secret.into() }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials").field("token", &self.token).finish()
    }
}

/// Computes the `Authorization` header value for a request.
///
/// Implement this to plug in a different signing library or scheme without
/// touching the client.
pub trait RequestSigner: Send + Sync + std::fmt::Debug {
    /// Sign `method url?params` with the consumer credentials and, when given,
    /// the resource-owner token.
    fn authorization(
        &self,
        method: &Method,
        url: &Url,
        params: &[(String, String)],
        consumer: &Credentials,
        token: Option<&Credentials>,
    ) -> ClientResult<String>;
}

/// OAuth 1.0a signer using the HMAC-SHA1 signature method.
#[derive(Debug, Clone, Copy, Default)]
pub struct HmacSha1Signer;

impl HmacSha1Signer {
    /// Sign with an explicit nonce and timestamp.
    #[allow(clippy::too_many_arguments)]
    pub fn sign_with(
        &self,
        nonce: &str,
        timestamp: i64,
        method: &Method,
        url: &Url,
        params: &[(String, String)],
        consumer: &Credentials,
        token: Option<&Credentials>,
    ) -> ClientResult<String> {
        let mut oauth_params = vec![
            ("oauth_consumer_key", consumer.token.clone()),
            ("oauth_nonce", nonce.to_string()),
            ("oauth_signature_method", "HMAC-SHA1".to_string()),
            ("oauth_timestamp", timestamp.to_string()),
        ];
        if let Some(token) = token {
            oauth_params.push(("oauth_token", token.token.clone()));
        }
        oauth_params.push(("oauth_version", "1.0".to_string()));

        let base = signature_base_string(method, url, params, &oauth_params);
        let signature = hmac_sha1_signature(&base, consumer, token)?;
        oauth_params.push(("oauth_signature", signature));
        oauth_params.sort_by(|a, b| a.0.cmp(b.0));

        let header = oauth_params
            .iter()
            .map(|(k, v)| format!("{}=\"{}\"", k, percent_encode(v)))
            .collect::<Vec<_>>()
            .join(", ");

        Ok(format!("OAuth {header}"))
    }
}

impl RequestSigner for HmacSha1Signer {
    fn authorization(
        &self,
        method: &Method,
        url: &Url,
        params: &[(String, String)],
        consumer: &Credentials,
        token: Option<&Credentials>,
    ) -> ClientResult<String> {
        let nonce = uuid::Uuid::new_v4().simple().to_string();
        let timestamp = chrono::Utc::now().timestamp();
        self.sign_with(&nonce, timestamp, method, url, params, consumer, token)
    }
}

/// RFC 3986 percent-encoding (everything but `A-Z a-z 0-9 - . _ ~`).
#[must_use]
pub fn percent_encode(input: &str) -> String {
    urlencoding::encode(input).into_owned()
}

/// Build the signature base string: `METHOD&uri&params`.
///
/// Query pairs already present on `url` take part in the signature alongside
/// `params` and the protocol parameters.
#[must_use]
pub fn signature_base_string(
    method: &Method,
    url: &Url,
    params: &[(String, String)],
    oauth_params: &[(&str, String)],
) -> String {
    let mut pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| (percent_encode(&k), percent_encode(&v)))
        .collect();
    pairs.extend(params.iter().map(|(k, v)| (percent_encode(k), percent_encode(v))));
    pairs.extend(oauth_params.iter().map(|(k, v)| (percent_encode(k), percent_encode(v))));
    pairs.sort();

    let normalized = pairs.iter().map(|(k, v)| format!("{k}={v}")).collect::<Vec<_>>().join("&");

    format!(
        "{}&{}&{}",
        method.as_str().to_ascii_uppercase(),
        percent_encode(&base_uri(url)),
        percent_encode(&normalized)
    )
}

/// Scheme, host, non-default port and path; no query or fragment.
fn base_uri(url: &Url) -> String {
    let host = url.host_str().unwrap_or_default().to_ascii_lowercase();
    match url.port() {
        Some(port) => format!("{}://{}:{}{}", url.scheme(), host, port, url.path()),
        None => format!("{}://{}{}", url.scheme(), host, url.path()),
    }
}

fn hmac_sha1_signature(
    base: &str,
    consumer: &Credentials,
    token: Option<&Credentials>,
) -> ClientResult<String> {
    let key = format!(
        "{}&{}",
        percent_encode(&consumer.secret),
        token.map(|t| percent_encode(&t.secret)).unwrap_or_default()
    );

    let mut mac = HmacSha1::new_from_slice(key.as_bytes())
        .map_err(|e| ClientError::signing(e.to_string()))?;
    mac.update(base.as_bytes());

    Ok(STANDARD.encode(mac.finalize().into_bytes()))
}
