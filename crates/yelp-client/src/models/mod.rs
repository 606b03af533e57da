//! Data models for Yelp API requests and responses.
//!
//! Response models use `#[serde(default)]` for optional fields; field names
//! already match the API's snake_case JSON.

mod business;
mod criteria;
mod enums;

pub use business::{Business, BusinessLocation, SearchResult};
pub use criteria::{GeoLocation, SearchCriteria};
pub use enums::SortOrder;
