//! Fuzzing library for yelp-client.
//!
//! This crate provides fuzzing targets for response decoding and request
//! signing in the Yelp client.
//!
//! # Usage
//!
//! ```bash
//! cd crates/yelp-fuzz
//! cargo +nightly fuzz run fuzz_search_result_parse -- -max_total_time=60
//! ```

pub use yelp_client::models;
pub use yelp_client::oauth;
