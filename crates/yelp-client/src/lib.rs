//! Yelp v2 API Client
//!
//! A thin async client for the Yelp v2 business search API. Every request is
//! signed with OAuth 1.0a (HMAC-SHA1) using pre-obtained consumer and access
//! credentials, and the raw JSON body is handed back to the caller.
//!
//! # Features
//!
//! - **Two operations**: business search and business lookup by ID
//! - **Pluggable transport**: inject any [`transport::HttpTransport`], or use the shared `reqwest` default
//! - **Pluggable signing**: swap the [`oauth::RequestSigner`] without touching the client
//! - **Typed records**: [`models::SearchResult`] and [`models::Business`] for decoding bodies
//!
//! # Example
//!
//! ```no_run
//! use yelp_client::{Config, YelpClient, models::{SearchCriteria, SearchResult}};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::new("consumer-key", "consumer-secret", "token", "token-secret");
//!     let client = YelpClient::new(config)?;
//!
//!     let body = client.search(&SearchCriteria::new("tacos", "San Francisco, CA")).await?;
//!     let result = SearchResult::from_slice(&body)?;
//!     println!("{} matches", result.total);
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod oauth;
pub mod transport;

pub use client::YelpClient;
pub use config::Config;
pub use error::{ClientError, ClientResult};
