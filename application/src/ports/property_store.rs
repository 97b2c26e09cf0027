//! Port for the external property store.
//!
//! The search/compare core never fetches or validates listings itself;
//! it consumes already-validated [`Property`] values from whatever
//! backend the infrastructure layer wires in.

use async_trait::async_trait;
use stayscout_domain::{Property, PropertyId};
use thiserror::Error;

/// Errors from the property store collaborator.
#[derive(Error, Debug)]
pub enum PropertyStoreError {
    #[error("Property data unavailable: {0}")]
    Unavailable(String),
}

/// Read-only access to the property collection.
#[async_trait]
pub trait PropertyStore: Send + Sync {
    /// All known listings.
    async fn list_properties(&self) -> Result<Vec<Property>, PropertyStoreError>;

    /// One listing by id, or `None` if unknown.
    async fn get_property(&self, id: &PropertyId) -> Result<Option<Property>, PropertyStoreError>;
}
