//! Search criteria supplied by the caller.

use serde::{Deserialize, Serialize};

use super::SortOrder;

/// A latitude/longitude pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    /// Latitude in degrees.
    pub latitude: f64,

    /// Longitude in degrees.
    pub longitude: f64,
}

impl GeoLocation {
    /// Create a coordinate.
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

/// Parameters for a business search.
///
/// Zero and empty values mean "not set": a zero `limit` falls back to the
/// client's default limit and an empty `category_filter` is not sent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchCriteria {
    /// Search term (e.g. "tacos").
    pub term: String,

    /// Free-form location (e.g. "San Francisco, CA").
    pub location: String,

    /// Optional coordinate to search around.
    pub lat_lng: Option<GeoLocation>,

    /// Maximum number of results.
    pub limit: u32,

    /// Offset into the result list.
    pub offset: u32,

    /// Result ordering.
    pub sort: SortOrder,

    /// Comma-separated category aliases (e.g. "mexican,foodtrucks").
    pub category_filter: String,

    /// Search radius in meters.
    pub radius_filter: Option<u32>,
}

impl SearchCriteria {
    /// Criteria for `term` near `location`.
    #[must_use]
    pub fn new(term: impl Into<String>, location: impl Into<String>) -> Self {
        Self { term: term.into(), location: location.into(), ..Self::default() }
    }

    /// Set the result limit.
    #[must_use]
    pub const fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    /// Set the result offset.
    #[must_use]
    pub const fn with_offset(mut self, offset: u32) -> Self {
        self.offset = offset;
        self
    }

    /// Set the sort order.
    #[must_use]
    pub const fn with_sort(mut self, sort: SortOrder) -> Self {
        self.sort = sort;
        self
    }

    /// Set the category filter.
    #[must_use]
    pub fn with_category_filter(mut self, filter: impl Into<String>) -> Self {
        self.category_filter = filter.into();
        self
    }

    /// Set the search coordinate.
    #[must_use]
    pub const fn with_lat_lng(mut self, latitude: f64, longitude: f64) -> Self {
        self.lat_lng = Some(GeoLocation::new(latitude, longitude));
        self
    }

    /// Set the search radius in meters.
    #[must_use]
    pub const fn with_radius_filter(mut self, meters: u32) -> Self {
        self.radius_filter = Some(meters);
        self
    }

    /// Limit to send, substituting `default_limit` for zero.
    #[must_use]
    pub const fn effective_limit(&self, default_limit: u32) -> u32 {
        if self.limit == 0 { default_limit } else { self.limit }
    }

    /// Query parameters for the search endpoint, in wire order.
    #[must_use]
    pub fn to_query(&self, default_limit: u32) -> Vec<(String, String)> {
        let mut params = vec![
            ("term".to_string(), self.term.clone()),
            ("sort".to_string(), self.sort.code().to_string()),
            ("location".to_string(), self.location.clone()),
            ("limit".to_string(), self.effective_limit(default_limit).to_string()),
            ("offset".to_string(), self.offset.to_string()),
        ];

        if !self.category_filter.is_empty() {
            params.push(("category_filter".to_string(), self.category_filter.clone()));
        }

        if let Some(ll) = self.lat_lng {
            params.push(("ll".to_string(), format!("{},{}", ll.latitude, ll.longitude)));
        }

        if let Some(radius) = self.radius_filter {
            params.push(("radius_filter".to_string(), radius.to_string()));
        }

        params
    }
}
