#![no_main]

use libfuzzer_sys::fuzz_target;
use yelp_client::models::{Business, BusinessLocation};

fuzz_target!(|data: &[u8]| {
    if let Ok(json) = serde_json::from_slice::<serde_json::Value>(data) {
        if let Ok(business) = serde_json::from_value::<Business>(json.clone()) {
            let _ = business.category_names();
            let _ = business.category_aliases();
            if let Some(location) = &business.location {
                let _ = location.display_address();
            }
        }
        let _ = serde_json::from_value::<BusinessLocation>(json);
    }
});
