#![no_main]

use libfuzzer_sys::fuzz_target;
use yelp_client::models::SearchResult;

fuzz_target!(|data: &[u8]| {
    // Should never panic, only return Ok or Err
    let _ = SearchResult::from_slice(data);
});
