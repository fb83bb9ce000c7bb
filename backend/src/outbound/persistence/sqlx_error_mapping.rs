//! Shared sqlx error mapping for repositories with basic query semantics.

use tracing::debug;

/// Map common sqlx error variants into query/connection constructors.
///
/// This helper captures the repeated mapping used by repositories: transport
/// and pool failures become connection errors, everything else a query
/// error. The raw driver failure is logged before it is flattened into a
/// port error message.
pub(super) fn map_basic_sqlx_error<E, Q, C>(error: sqlx::Error, query: Q, connection: C) -> E
where
    Q: Fn(String) -> E,
    C: Fn(String) -> E,
{
    match &error {
        sqlx::Error::Database(db_error) => {
            debug!(
                code = db_error.code().as_deref(),
                message = db_error.message(),
                "database operation failed"
            );
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "database operation failed"
        ),
    }

    match error {
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed => connection(error.to_string()),
        sqlx::Error::Io(inner) => connection(inner.to_string()),
        sqlx::Error::Tls(inner) => connection(inner.to_string()),
        sqlx::Error::Database(db_error) => query(db_error.message().to_owned()),
        other => query(other.to_string()),
    }
}

/// Whether the error is a unique-constraint violation, checked before the
/// basic mapping by adapters that surface conflicts as their own variant.
pub(super) fn is_unique_violation(error: &sqlx::Error) -> bool {
    match error {
        sqlx::Error::Database(db_error) => db_error.is_unique_violation(),
        _ => false,
    }
}
