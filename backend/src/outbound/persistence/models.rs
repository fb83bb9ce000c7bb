//! Row structs decoded from query results.
//!
//! These structs mirror the column lists of the statements in this module
//! and stay internal to the persistence layer; conversion functions produce
//! the domain types the ports promise.

use chrono::NaiveDate;
use tracing::warn;

use crate::domain::{
    CompletedStay, Email, MinorUnits, Property, PropertyId, PropertyListing, Reservation,
    ReservationId, User, UserId,
};

/// One `users` row.
#[derive(Debug, Clone, sqlx::FromRow)]
pub(super) struct UserRow {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub password: String,
}

/// One `properties` row.
#[derive(Debug, Clone, sqlx::FromRow)]
pub(super) struct PropertyRow {
    pub id: i32,
    pub owner_id: i32,
    pub title: String,
    pub description: String,
    pub thumbnail_photo_url: String,
    pub cover_photo_url: String,
    pub cost_per_night: i32,
    pub street: String,
    pub city: String,
    pub province: String,
    pub post_code: String,
    pub country: String,
    pub parking_spaces: i32,
    pub number_of_bathrooms: i32,
    pub number_of_bedrooms: i32,
}

/// A property row joined with its aggregated review rating.
#[derive(Debug, Clone, sqlx::FromRow)]
pub(super) struct PropertyListingRow {
    #[sqlx(flatten)]
    pub property: PropertyRow,
    pub average_rating: Option<f64>,
}

/// A completed reservation joined with its property and the property's
/// aggregated review rating. Reservation columns are aliased to avoid
/// colliding with the property's.
#[derive(Debug, Clone, sqlx::FromRow)]
pub(super) struct CompletedStayRow {
    pub reservation_id: i32,
    pub guest_id: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[sqlx(flatten)]
    pub property: PropertyRow,
    pub average_rating: Option<f64>,
}

/// Convert a user row into the domain type.
pub(super) fn row_to_user(row: UserRow) -> User {
    User {
        id: UserId::new(row.id),
        name: row.name,
        email: Email::from_stored(row.email),
        password: row.password,
    }
}

/// Convert a property row into the domain type.
pub(super) fn row_to_property(row: PropertyRow) -> Property {
    Property {
        id: PropertyId::new(row.id),
        owner_id: UserId::new(row.owner_id),
        title: row.title,
        description: row.description,
        thumbnail_photo_url: row.thumbnail_photo_url,
        cover_photo_url: row.cover_photo_url,
        cost_per_night: MinorUnits::new(row.cost_per_night),
        street: row.street,
        city: row.city,
        province: row.province,
        post_code: row.post_code,
        country: row.country,
        parking_spaces: row.parking_spaces,
        number_of_bathrooms: row.number_of_bathrooms,
        number_of_bedrooms: row.number_of_bedrooms,
    }
}

/// Convert a search result row into the domain type.
pub(super) fn row_to_listing(row: PropertyListingRow) -> PropertyListing {
    let average_rating = rating_or_default(row.average_rating, row.property.id);
    PropertyListing {
        property: row_to_property(row.property),
        average_rating,
    }
}

/// Convert a reservation history row into the domain type.
pub(super) fn row_to_completed_stay(row: CompletedStayRow) -> CompletedStay {
    let average_rating = rating_or_default(row.average_rating, row.property.id);
    let property = row_to_property(row.property);
    let reservation = Reservation {
        id: ReservationId::new(row.reservation_id),
        guest_id: UserId::new(row.guest_id),
        property_id: property.id,
        start_date: row.start_date,
        end_date: row.end_date,
    };
    CompletedStay {
        reservation,
        property,
        average_rating,
    }
}

/// The review join guarantees at least one rating per group; a NULL
/// aggregate means the data drifted from that invariant.
fn rating_or_default(average_rating: Option<f64>, property_id: i32) -> f64 {
    average_rating.unwrap_or_else(|| {
        warn!(property_id, "property row had no aggregated rating");
        0.0
    })
}
