//! Port abstraction for property persistence adapters and their errors.
use async_trait::async_trait;

use crate::domain::{NewProperty, Property, PropertyListing, PropertySearch};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by property repository adapters.
    pub enum PropertyPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "property repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "property repository query failed: {message}",
    }
}

#[async_trait]
pub trait PropertyRepository: Send + Sync {
    /// List properties matching the search criteria, each with its average
    /// review rating, ordered by ascending nightly cost.
    async fn search(
        &self,
        criteria: &PropertySearch,
    ) -> Result<Vec<PropertyListing>, PropertyPersistenceError>;

    /// Insert a new property and return the persisted record.
    async fn insert(&self, new_property: &NewProperty)
    -> Result<Property, PropertyPersistenceError>;
}
