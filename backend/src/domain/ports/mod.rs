//! Domain ports defining the edges of the hexagon.
//!
//! Ports describe how the domain expects to interact with the persistence
//! adapters. Each trait exposes strongly typed errors so adapters map their
//! failures into predictable variants instead of returning `anyhow::Result`.
//! Read paths return `Option` for absence: a caller can always tell a
//! missing row from a failed query.

mod macros;
mod property_repository;
mod reservation_repository;
mod user_repository;

pub(crate) use macros::define_port_error;

pub use property_repository::{PropertyPersistenceError, PropertyRepository};
pub use reservation_repository::{ReservationPersistenceError, ReservationRepository};
pub use user_repository::{UserPersistenceError, UserRepository};

#[cfg(test)]
mod tests;
