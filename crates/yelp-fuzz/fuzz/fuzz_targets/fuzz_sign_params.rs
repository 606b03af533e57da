#![no_main]

use libfuzzer_sys::fuzz_target;
use reqwest::Method;
use url::Url;
use yelp_client::oauth::{Credentials, HmacSha1Signer};

fuzz_target!(|data: &[u8]| {
    // Arbitrary UTF-8 params and secrets must always sign without panicking
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let mut parts = text.splitn(4, '\u{0}');
    let key = parts.next().unwrap_or_default().to_string();
    let value = parts.next().unwrap_or_default().to_string();
    let secret = parts.next().unwrap_or_default();
    let token_secret = parts.next().unwrap_or_default();

    let url = Url::parse("http://api.yelp.com/v2/search").expect("static url");
    let header = HmacSha1Signer.sign_with(
        "nonce",
        0,
        &Method::GET,
        &url,
        &[(key, value)],
        &Credentials::new("ck", secret),
        Some(&Credentials::new("t", token_secret)),
    );
    assert!(header.is_ok());
});
