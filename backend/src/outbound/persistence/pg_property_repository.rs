//! PostgreSQL-backed `PropertyRepository` implementation.
//!
//! The search assembles its statement through [`SelectBuilder`], one
//! predicate per supplied filter, in a fixed order: city, minimum price,
//! maximum price, owner. City matching is a case-insensitive substring
//! match; price bounds arrive in whole currency units and are scaled to the
//! stored minor units before comparison. A minimum-rating filter becomes a
//! HAVING clause on the aggregated review rating. Results are always
//! grouped per property, ordered by ascending nightly cost, and capped by
//! the bound limit.

use async_trait::async_trait;

use crate::domain::ports::{PropertyPersistenceError, PropertyRepository};
use crate::domain::{MinorUnits, NewProperty, Property, PropertyListing, PropertySearch};

use super::models::{PropertyListingRow, PropertyRow, row_to_listing, row_to_property};
use super::pool::DbPool;
use super::select_builder::{Comparison, Predicate, PreparedSelect, SelectBuilder, SqlValue};
use super::sqlx_error_mapping::map_basic_sqlx_error;

const SEARCH_BASE: &str =
    "SELECT properties.id, properties.owner_id, properties.title, properties.description, \
     properties.thumbnail_photo_url, properties.cover_photo_url, properties.cost_per_night, \
     properties.street, properties.city, properties.province, properties.post_code, \
     properties.country, properties.parking_spaces, properties.number_of_bathrooms, \
     properties.number_of_bedrooms, avg(property_reviews.rating)::float8 AS average_rating \
     FROM properties JOIN property_reviews ON property_reviews.property_id = properties.id";

const INSERT: &str =
    "INSERT INTO properties (owner_id, title, description, thumbnail_photo_url, \
     cover_photo_url, cost_per_night, street, city, province, post_code, country, \
     parking_spaces, number_of_bathrooms, number_of_bedrooms) \
     VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14) \
     RETURNING id, owner_id, title, description, thumbnail_photo_url, cover_photo_url, \
     cost_per_night, street, city, province, post_code, country, parking_spaces, \
     number_of_bathrooms, number_of_bedrooms";

/// sqlx-backed implementation of the `PropertyRepository` port.
#[derive(Clone)]
pub struct PgPropertyRepository {
    pool: DbPool,
}

impl PgPropertyRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Build the search statement for the given criteria.
fn search_statement(criteria: &PropertySearch) -> PreparedSelect {
    let mut builder = SelectBuilder::new(SEARCH_BASE);

    if let Some(city) = criteria.city_filter() {
        builder = builder.filter(Predicate::bound(
            "LOWER(properties.city)",
            Comparison::Like,
            SqlValue::Text(format!("%{}%", city.to_lowercase())),
        ));
    }
    if let Some(minimum) = criteria.minimum_price_per_night {
        builder = builder.filter(Predicate::bound(
            "properties.cost_per_night",
            Comparison::AtLeast,
            SqlValue::Int(MinorUnits::from_major(minimum).minor()),
        ));
    }
    if let Some(maximum) = criteria.maximum_price_per_night {
        builder = builder.filter(Predicate::bound(
            "properties.cost_per_night",
            Comparison::AtMost,
            SqlValue::Int(MinorUnits::from_major(maximum).minor()),
        ));
    }
    if let Some(owner) = criteria.owner_id {
        builder = builder.filter(Predicate::bound(
            "properties.owner_id",
            Comparison::Equal,
            SqlValue::Int(owner.value()),
        ));
    }

    builder = builder.group_by("properties.id");

    if let Some(rating) = criteria.minimum_rating {
        builder = builder.having(
            "avg(property_reviews.rating)",
            Comparison::AtLeast,
            SqlValue::Float(rating),
        );
    }

    builder
        .order_by("properties.cost_per_night")
        .limit(criteria.limit)
        .build()
}

/// Map sqlx errors to domain property persistence errors.
fn map_sqlx_error(error: sqlx::Error) -> PropertyPersistenceError {
    map_basic_sqlx_error(
        error,
        PropertyPersistenceError::query,
        PropertyPersistenceError::connection,
    )
}

#[async_trait]
impl PropertyRepository for PgPropertyRepository {
    async fn search(
        &self,
        criteria: &PropertySearch,
    ) -> Result<Vec<PropertyListing>, PropertyPersistenceError> {
        let rows: Vec<PropertyListingRow> = search_statement(criteria)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(rows.into_iter().map(row_to_listing).collect())
    }

    async fn insert(
        &self,
        new_property: &NewProperty,
    ) -> Result<Property, PropertyPersistenceError> {
        let row: PropertyRow = sqlx::query_as(INSERT)
            .bind(new_property.owner_id.value())
            .bind(new_property.title.clone())
            .bind(new_property.description.clone())
            .bind(new_property.thumbnail_photo_url.clone())
            .bind(new_property.cover_photo_url.clone())
            .bind(new_property.cost_per_night.minor())
            .bind(new_property.street.clone())
            .bind(new_property.city.clone())
            .bind(new_property.province.clone())
            .bind(new_property.post_code.clone())
            .bind(new_property.country.clone())
            .bind(new_property.parking_spaces)
            .bind(new_property.number_of_bathrooms)
            .bind(new_property.number_of_bedrooms)
            .fetch_one(self.pool.executor())
            .await
            .map_err(map_sqlx_error)?;

        Ok(row_to_property(row))
    }
}
