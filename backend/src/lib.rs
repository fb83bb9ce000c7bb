//! Stayside backend data-access layer.
//!
//! Persists users, properties, and reservations for a short-term property
//! rental application. The domain layer defines strongly typed entities and
//! persistence ports; the outbound layer implements those ports against
//! PostgreSQL with hand-built parameterized SQL executed over a shared async
//! connection pool. The HTTP tier consuming this crate lives elsewhere.

pub mod domain;
pub mod outbound;

#[cfg(test)]
pub(crate) mod test_support;
