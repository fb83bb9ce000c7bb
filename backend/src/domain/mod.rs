//! Domain primitives and aggregates.
//!
//! Purpose: Define strongly typed domain entities used by the inbound and
//! persistence layers. Keep types immutable and document invariants and
//! serialisation contracts (serde) in each type's Rustdoc.
//!
//! Public surface:
//! - User, NewUser, Email (alias to `user::*`) — guest and host accounts.
//! - Property, NewProperty, PropertyListing, PropertySearch, MinorUnits
//!   (alias to `property::*`) — rental listings and search criteria.
//! - Reservation, CompletedStay (alias to `reservation::*`) — booked stays.

pub mod ports;
pub mod property;
pub mod reservation;
pub mod user;

pub use self::property::{
    DEFAULT_RESULT_LIMIT, MinorUnits, NewProperty, Property, PropertyId, PropertyListing,
    PropertySearch,
};
pub use self::reservation::{CompletedStay, Reservation, ReservationId};
pub use self::user::{Email, EmailValidationError, NewUser, User, UserId};
