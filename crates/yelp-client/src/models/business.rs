//! Business and search result models matching the Yelp v2 API schema.

use serde::{Deserialize, Deserializer, Serialize};

use super::GeoLocation;
use crate::error::ClientResult;

/// Response of the search endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Total number of matches (may exceed `businesses.len()`).
    #[serde(default, deserialize_with = "null_as_default")]
    pub total: u64,

    /// Matching businesses for the requested page.
    #[serde(default, deserialize_with = "null_as_default")]
    pub businesses: Vec<Business>,
}

impl SearchResult {
    /// Decode a search response body.
    pub fn from_slice(body: &[u8]) -> ClientResult<Self> {
        Ok(serde_json::from_slice(body)?)
    }
}

/// A single business listing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Business {
    /// Yelp business ID (e.g. "yelp-san-francisco"), empty when absent.
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,

    /// Business name.
    #[serde(default)]
    pub name: Option<String>,

    /// Star rating (1–5, half steps).
    #[serde(default)]
    pub rating: Option<f32>,

    /// Number of reviews.
    #[serde(default)]
    pub review_count: Option<u32>,

    /// Address and coordinate.
    #[serde(default)]
    pub location: Option<BusinessLocation>,

    /// Phone number.
    #[serde(default)]
    pub phone: Option<String>,

    /// Yelp page URL.
    #[serde(default)]
    pub url: Option<String>,

    /// Mobile Yelp page URL.
    #[serde(default)]
    pub mobile_url: Option<String>,

    /// Category groups, each `[display name, alias]`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub categories: Vec<Vec<String>>,
}

impl Business {
    /// Decode a business lookup response body.
    pub fn from_slice(body: &[u8]) -> ClientResult<Self> {
        Ok(serde_json::from_slice(body)?)
    }

    /// Get the name, falling back to the ID.
    #[must_use]
    pub fn name_or_id(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }

    /// Category display names (first entry of each group).
    #[must_use]
    pub fn category_names(&self) -> Vec<&str> {
        self.categories.iter().filter_map(|c| c.first()).map(String::as_str).collect()
    }

    /// Category aliases (second entry of each group).
    #[must_use]
    pub fn category_aliases(&self) -> Vec<&str> {
        self.categories.iter().filter_map(|c| c.get(1)).map(String::as_str).collect()
    }

    /// Get the coordinate if available.
    #[must_use]
    pub fn coordinate(&self) -> Option<GeoLocation> {
        self.location.as_ref()?.coordinate
    }
}

/// Location block of a business.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BusinessLocation {
    /// Street address lines.
    #[serde(default, deserialize_with = "null_as_default")]
    pub address: Vec<String>,

    /// City.
    #[serde(default)]
    pub city: Option<String>,

    /// State or region code.
    #[serde(default)]
    pub state_code: Option<String>,

    /// Postal code.
    #[serde(default)]
    pub postal_code: Option<String>,

    /// ISO country code.
    #[serde(default)]
    pub country_code: Option<String>,

    /// Neighborhood names.
    #[serde(default)]
    pub neighborhoods: Option<Vec<String>>,

    /// Coordinate of the business.
    #[serde(default)]
    pub coordinate: Option<GeoLocation>,
}

impl BusinessLocation {
    /// Single-line address: street lines, city, state and postal code.
    #[must_use]
    pub fn display_address(&self) -> String {
        let mut parts: Vec<&str> = self.address.iter().map(String::as_str).collect();
        parts.extend(self.city.as_deref());

        let region = [self.state_code.as_deref(), self.postal_code.as_deref()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" ");

        let mut line = parts.join(", ");
        if !region.is_empty() {
            if !line.is_empty() {
                line.push_str(", ");
            }
            line.push_str(&region);
        }
        line
    }
}

/// Treat an explicit JSON `null` like a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
