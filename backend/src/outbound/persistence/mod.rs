//! PostgreSQL persistence adapters using sqlx.
//!
//! This module provides concrete implementations of domain repository ports
//! backed by PostgreSQL, reached through hand-built parameterized SQL
//! executed over a shared `sqlx` connection pool.
//!
//! # Architecture
//!
//! The persistence layer follows these principles:
//!
//! - **Thin adapters**: Repository implementations only build statements and
//!   translate rows into domain types. No business logic resides here.
//! - **Internal models**: Row structs (`models.rs`) and statement assembly
//!   (`select_builder.rs`) are internal implementation details, never
//!   exposed to the domain layer.
//! - **Positional parameters only**: Every caller-supplied value reaches the
//!   server as a bound `$n` parameter; the builder owns the numbering.
//! - **Strongly typed errors**: All database errors are mapped to domain
//!   persistence error types. Failures are logged and surfaced, never
//!   collapsed into an empty result.
//!
//! # Example
//!
//! ```ignore
//! use backend::outbound::persistence::{DbPool, PoolConfig, PgUserRepository};
//!
//! let config = PoolConfig::new("postgres://localhost/stayside");
//! let pool = DbPool::connect(config).await?;
//! let repo = PgUserRepository::new(pool);
//! ```

mod models;
mod pg_property_repository;
mod pg_reservation_repository;
mod pg_user_repository;
mod pool;
mod select_builder;
mod sqlx_error_mapping;

pub use pg_property_repository::PgPropertyRepository;
pub use pg_reservation_repository::PgReservationRepository;
pub use pg_user_repository::PgUserRepository;
pub use pool::{DbPool, PoolConfig, PoolError};
