//! PostgreSQL-backed `UserRepository` implementation.
//!
//! Lookups are exact on the identifier and case-insensitive on the email
//! address: the stored value is compared lowercased against the normalized
//! form of the caller's address, so `A@X.com` finds a row written as
//! `a@x.com`.

use async_trait::async_trait;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{Email, NewUser, User, UserId};

use super::models::{UserRow, row_to_user};
use super::pool::DbPool;
use super::sqlx_error_mapping::{is_unique_violation, map_basic_sqlx_error};

const FIND_BY_EMAIL: &str = "SELECT id, name, email, password FROM users WHERE LOWER(email) = $1";

const FIND_BY_ID: &str = "SELECT id, name, email, password FROM users WHERE id = $1";

const INSERT: &str = "INSERT INTO users (name, email, password) VALUES ($1, $2, $3) \
                      RETURNING id, name, email, password";

/// sqlx-backed implementation of the `UserRepository` port.
#[derive(Clone)]
pub struct PgUserRepository {
    pool: DbPool,
}

impl PgUserRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Map sqlx errors to domain user persistence errors.
fn map_sqlx_error(error: sqlx::Error) -> UserPersistenceError {
    map_basic_sqlx_error(
        error,
        UserPersistenceError::query,
        UserPersistenceError::connection,
    )
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, UserPersistenceError> {
        let row: Option<UserRow> = sqlx::query_as(FIND_BY_EMAIL)
            .bind(email.normalized())
            .fetch_optional(self.pool.executor())
            .await
            .map_err(map_sqlx_error)?;

        Ok(row.map(row_to_user))
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError> {
        let row: Option<UserRow> = sqlx::query_as(FIND_BY_ID)
            .bind(id.value())
            .fetch_optional(self.pool.executor())
            .await
            .map_err(map_sqlx_error)?;

        Ok(row.map(row_to_user))
    }

    async fn insert(&self, new_user: &NewUser) -> Result<User, UserPersistenceError> {
        let row: UserRow = sqlx::query_as(INSERT)
            .bind(new_user.name.clone())
            .bind(new_user.email.as_str().to_owned())
            .bind(new_user.password.clone())
            .fetch_one(self.pool.executor())
            .await
            .map_err(|error| {
                if is_unique_violation(&error) {
                    UserPersistenceError::duplicate_email(new_user.email.as_str())
                } else {
                    map_sqlx_error(error)
                }
            })?;

        Ok(row_to_user(row))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_lookup_compares_lowercased_column() {
        assert!(FIND_BY_EMAIL.contains("LOWER(email) = $1"));
    }

    #[test]
    fn insert_returns_the_persisted_row() {
        assert!(INSERT.contains("RETURNING id, name, email, password"));
    }

    #[test]
    fn transport_errors_surface_as_connection_failures() {
        let mapped = map_sqlx_error(sqlx::Error::PoolTimedOut);

        assert!(matches!(mapped, UserPersistenceError::Connection { .. }));
    }
}
