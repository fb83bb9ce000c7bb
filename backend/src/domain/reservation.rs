//! Reservation data model.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::property::{Property, PropertyId};
use super::user::UserId;

/// Stable reservation identifier assigned by the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReservationId(i32);

impl ReservationId {
    /// Wrap a server-assigned identifier.
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    /// Access the raw identifier.
    pub const fn value(self) -> i32 {
        self.0
    }
}

impl fmt::Display for ReservationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Persisted reservation of a property by a guest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    /// Server-assigned identifier.
    pub id: ReservationId,
    /// The guest who booked the stay.
    pub guest_id: UserId,
    /// The booked property.
    pub property_id: PropertyId,
    /// First night of the stay.
    pub start_date: NaiveDate,
    /// Checkout date. A stay counts as completed only once this date is
    /// strictly in the past.
    pub end_date: NaiveDate,
}

/// Reservation history row: a completed stay together with the property it
/// was for and that property's average review rating.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletedStay {
    /// The completed reservation.
    pub reservation: Reservation,
    /// The property that was stayed at.
    pub property: Property,
    /// Average of all review ratings for the property.
    pub average_rating: f64,
}
