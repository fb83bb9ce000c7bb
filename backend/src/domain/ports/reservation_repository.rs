//! Port abstraction for reservation persistence adapters and their errors.
use async_trait::async_trait;

use crate::domain::{CompletedStay, UserId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by reservation repository adapters.
    pub enum ReservationPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "reservation repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "reservation repository query failed: {message}",
    }
}

#[async_trait]
pub trait ReservationRepository: Send + Sync {
    /// List the guest's completed stays (checkout strictly in the past),
    /// oldest first, each with the property stayed at and its average
    /// review rating.
    async fn completed_for_guest(
        &self,
        guest: UserId,
        limit: i64,
    ) -> Result<Vec<CompletedStay>, ReservationPersistenceError>;
}
