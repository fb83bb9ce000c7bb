//! PostgreSQL-backed `ReservationRepository` implementation.
//!
//! The history listing only counts stays whose checkout date is strictly in
//! the past; the cutoff is evaluated server-side against `CURRENT_DATE` so
//! it binds no parameter. Rows join the reservation to its property and the
//! property's aggregated review rating.

use async_trait::async_trait;

use crate::domain::ports::{ReservationPersistenceError, ReservationRepository};
use crate::domain::{CompletedStay, UserId};

use super::models::{CompletedStayRow, row_to_completed_stay};
use super::pool::DbPool;
use super::select_builder::{Comparison, Predicate, PreparedSelect, SelectBuilder, SqlValue};
use super::sqlx_error_mapping::map_basic_sqlx_error;

const COMPLETED_STAYS_BASE: &str =
    "SELECT reservations.id AS reservation_id, reservations.guest_id, \
     reservations.start_date, reservations.end_date, \
     properties.id, properties.owner_id, properties.title, properties.description, \
     properties.thumbnail_photo_url, properties.cover_photo_url, properties.cost_per_night, \
     properties.street, properties.city, properties.province, properties.post_code, \
     properties.country, properties.parking_spaces, properties.number_of_bathrooms, \
     properties.number_of_bedrooms, avg(property_reviews.rating)::float8 AS average_rating \
     FROM reservations \
     JOIN properties ON properties.id = reservations.property_id \
     JOIN property_reviews ON property_reviews.property_id = properties.id";

/// sqlx-backed implementation of the `ReservationRepository` port.
#[derive(Clone)]
pub struct PgReservationRepository {
    pool: DbPool,
}

impl PgReservationRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Build the completed-stay listing statement for the given guest.
fn completed_stays_statement(guest: UserId, limit: i64) -> PreparedSelect {
    SelectBuilder::new(COMPLETED_STAYS_BASE)
        .filter(Predicate::bound(
            "reservations.guest_id",
            Comparison::Equal,
            SqlValue::Int(guest.value()),
        ))
        .filter(Predicate::fixed("reservations.end_date < CURRENT_DATE"))
        .group_by("reservations.id, properties.id")
        .order_by("reservations.start_date")
        .limit(limit)
        .build()
}

/// Map sqlx errors to domain reservation persistence errors.
fn map_sqlx_error(error: sqlx::Error) -> ReservationPersistenceError {
    map_basic_sqlx_error(
        error,
        ReservationPersistenceError::query,
        ReservationPersistenceError::connection,
    )
}

#[async_trait]
impl ReservationRepository for PgReservationRepository {
    async fn completed_for_guest(
        &self,
        guest: UserId,
        limit: i64,
    ) -> Result<Vec<CompletedStay>, ReservationPersistenceError> {
        let rows: Vec<CompletedStayRow> = completed_stays_statement(guest, limit)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(rows.into_iter().map(row_to_completed_stay).collect())
    }
}
