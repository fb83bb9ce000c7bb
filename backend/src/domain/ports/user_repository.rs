//! Port abstraction for user persistence adapters and their errors.
use async_trait::async_trait;

use crate::domain::{Email, NewUser, User, UserId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "user repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "user repository query failed: {message}",
        /// Insert violated the unique constraint on the email column.
        DuplicateEmail { email: String } => "email address is already registered: {email}",
    }
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fetch the user whose email matches, ignoring case.
    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, UserPersistenceError>;

    /// Fetch a user by identifier.
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError>;

    /// Insert a new user and return the persisted record.
    async fn insert(&self, new_user: &NewUser) -> Result<User, UserPersistenceError>;
}
