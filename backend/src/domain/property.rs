//! Rental property data model and search criteria.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::user::UserId;

/// Stable property identifier assigned by the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertyId(i32);

impl PropertyId {
    /// Wrap a server-assigned identifier.
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    /// Access the raw identifier.
    pub const fn value(self) -> i32 {
        self.0
    }
}

impl fmt::Display for PropertyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Monetary amount in minor currency units (cents).
///
/// The store keeps every price as an integer of minor units. Callers quote
/// prices in whole currency units; [`MinorUnits::from_major`] is the single
/// place the times-one-hundred convention lives, so the write and read paths
/// cannot drift apart.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct MinorUnits(i32);

impl MinorUnits {
    /// Wrap an amount already expressed in minor units.
    pub const fn new(minor: i32) -> Self {
        Self(minor)
    }

    /// Scale an amount in whole currency units into minor units.
    pub const fn from_major(major: i32) -> Self {
        Self(major.saturating_mul(100))
    }

    /// Amount in minor units, as stored.
    pub const fn minor(self) -> i32 {
        self.0
    }
}

impl fmt::Display for MinorUnits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Persisted rental property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    /// Server-assigned identifier.
    pub id: PropertyId,
    /// Owning user.
    pub owner_id: UserId,
    /// Listing title.
    pub title: String,
    /// Listing description.
    pub description: String,
    /// Thumbnail image shown in search results.
    pub thumbnail_photo_url: String,
    /// Cover image shown on the listing page.
    pub cover_photo_url: String,
    /// Nightly price in minor currency units.
    pub cost_per_night: MinorUnits,
    /// Street address.
    pub street: String,
    /// City.
    pub city: String,
    /// Province or state.
    pub province: String,
    /// Postal code.
    pub post_code: String,
    /// Country.
    pub country: String,
    /// Number of parking spaces.
    pub parking_spaces: i32,
    /// Number of bathrooms.
    pub number_of_bathrooms: i32,
    /// Number of bedrooms.
    pub number_of_bedrooms: i32,
}

/// Attributes for a property that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProperty {
    /// Owning user.
    pub owner_id: UserId,
    /// Listing title.
    pub title: String,
    /// Listing description.
    pub description: String,
    /// Thumbnail image shown in search results.
    pub thumbnail_photo_url: String,
    /// Cover image shown on the listing page.
    pub cover_photo_url: String,
    /// Nightly price in minor currency units.
    pub cost_per_night: MinorUnits,
    /// Street address.
    pub street: String,
    /// City.
    pub city: String,
    /// Province or state.
    pub province: String,
    /// Postal code.
    pub post_code: String,
    /// Country.
    pub country: String,
    /// Number of parking spaces.
    pub parking_spaces: i32,
    /// Number of bathrooms.
    pub number_of_bathrooms: i32,
    /// Number of bedrooms.
    pub number_of_bedrooms: i32,
}

/// Search result row: a property together with its average review rating.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyListing {
    /// The matching property.
    pub property: Property,
    /// Average of all review ratings for the property.
    pub average_rating: f64,
}

/// Default number of rows returned by listing queries.
pub const DEFAULT_RESULT_LIMIT: i64 = 10;

/// Optional filter criteria for the property search.
///
/// Every filter is optional; an absent filter contributes no predicate.
/// A city value that is empty after trimming counts as absent. Price bounds
/// are quoted in whole currency units and scaled by the search itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertySearch {
    /// Case-insensitive substring match on the city.
    pub city: Option<String>,
    /// Restrict to properties owned by this user.
    pub owner_id: Option<UserId>,
    /// Lower bound on the nightly price, in whole currency units.
    pub minimum_price_per_night: Option<i32>,
    /// Upper bound on the nightly price, in whole currency units.
    pub maximum_price_per_night: Option<i32>,
    /// Lower bound on the average review rating.
    pub minimum_rating: Option<f64>,
    /// Maximum number of rows returned.
    pub limit: i64,
}

impl Default for PropertySearch {
    fn default() -> Self {
        Self {
            city: None,
            owner_id: None,
            minimum_price_per_night: None,
            maximum_price_per_night: None,
            minimum_rating: None,
            limit: DEFAULT_RESULT_LIMIT,
        }
    }
}

impl PropertySearch {
    /// The city filter, with empty and whitespace-only values treated as
    /// absent.
    pub fn city_filter(&self) -> Option<&str> {
        self.city
            .as_deref()
            .map(str::trim)
            .filter(|city| !city.is_empty())
    }
}
