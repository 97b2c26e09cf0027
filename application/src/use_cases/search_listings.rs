//! Search Listings use case
//!
//! Fetches the property collection and runs the filter engine over it.

use crate::ports::property_store::{PropertyStore, PropertyStoreError};
use std::sync::Arc;
use stayscout_domain::{filter_properties, FilterCriteria, Property};
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while searching listings.
#[derive(Error, Debug)]
pub enum SearchError {
    #[error(transparent)]
    Store(#[from] PropertyStoreError),
}

/// Input for the SearchListings use case.
#[derive(Debug, Clone, Default)]
pub struct SearchListingsInput {
    pub criteria: FilterCriteria,
}

impl SearchListingsInput {
    pub fn new(criteria: FilterCriteria) -> Self {
        Self { criteria }
    }
}

/// Output of the SearchListings use case.
#[derive(Debug, Clone)]
pub struct SearchListingsOutput {
    /// Matching properties, ordered per the requested sort key.
    pub properties: Vec<Property>,
    /// Size of the unfiltered collection, for "N of M listings" displays.
    pub total_available: usize,
}

/// Use case for browsing listings through the filter engine.
pub struct SearchListingsUseCase<S: PropertyStore> {
    store: Arc<S>,
}

impl<S: PropertyStore> SearchListingsUseCase<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    pub async fn execute(
        &self,
        input: SearchListingsInput,
    ) -> Result<SearchListingsOutput, SearchError> {
        let all = self.store.list_properties().await?;
        let total_available = all.len();

        debug!(
            "Filtering {} properties with {} active facets",
            total_available,
            input.criteria.active_facet_count()
        );

        let properties = filter_properties(&all, &input.criteria);
        info!(
            "Search matched {} of {} properties",
            properties.len(),
            total_available
        );

        Ok(SearchListingsOutput {
            properties,
            total_available,
        })
    }
}
