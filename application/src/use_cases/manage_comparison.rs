//! Manage Comparison use case
//!
//! Resolves property ids through the store, drives the comparison set,
//! and maps every mutation outcome to a user-facing event.

use crate::ports::notifier::{CompareEvent, CompareNotifier};
use crate::ports::property_store::{PropertyStore, PropertyStoreError};
use std::sync::Arc;
use stayscout_domain::{
    build_matrix, CompareOutcome, CompareStore, ComparisonMatrix, PropertyId, MAX_COMPARE,
};
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while managing the comparison set.
///
/// Only [`CompareError::LimitExceeded`] requires caller action (prompt
/// the user to remove an entry first); the set itself is unchanged.
#[derive(Error, Debug)]
pub enum CompareError {
    #[error("Comparison is limited to {limit} properties")]
    LimitExceeded { limit: usize },

    #[error("Unknown property: {0}")]
    UnknownProperty(PropertyId),

    #[error(transparent)]
    Store(#[from] PropertyStoreError),
}

/// Use case driving [`CompareStore`] mutations and notifications.
pub struct ManageComparisonUseCase<S: PropertyStore> {
    store: Arc<S>,
    notifier: Arc<dyn CompareNotifier>,
}

impl<S: PropertyStore> ManageComparisonUseCase<S> {
    pub fn new(store: Arc<S>, notifier: Arc<dyn CompareNotifier>) -> Self {
        Self { store, notifier }
    }

    /// Add the property with the given id to the comparison set.
    ///
    /// Adding an id already in the set is reported as a no-op event and
    /// succeeds. A full set yields [`CompareError::LimitExceeded`].
    pub async fn add(
        &self,
        compare: &mut CompareStore,
        id: &PropertyId,
    ) -> Result<(), CompareError> {
        let property = self
            .store
            .get_property(id)
            .await?
            .ok_or_else(|| CompareError::UnknownProperty(id.clone()))?;
        let name = property.name.clone();

        match compare.add(property) {
            CompareOutcome::Added => {
                info!("Added {} to comparison ({} compared)", id, compare.len());
                self.notifier.notify(CompareEvent::Added { name });
                Ok(())
            }
            CompareOutcome::AlreadyPresent => {
                debug!("Property {} already in comparison", id);
                self.notifier.notify(CompareEvent::AlreadyPresent { name });
                Ok(())
            }
            CompareOutcome::LimitReached => {
                self.notifier.notify(CompareEvent::LimitReached {
                    limit: MAX_COMPARE,
                });
                Err(CompareError::LimitExceeded {
                    limit: MAX_COMPARE,
                })
            }
            // add() only returns the three outcomes above
            other => unreachable!("unexpected add outcome: {:?}", other),
        }
    }

    /// Remove the property with the given id; absent ids are a no-op.
    pub fn remove(&self, compare: &mut CompareStore, id: &PropertyId) {
        match compare.remove(id) {
            CompareOutcome::Removed => {
                info!("Removed {} from comparison", id);
                self.notifier.notify(CompareEvent::Removed { id: id.clone() });
            }
            _ => {
                self.notifier
                    .notify(CompareEvent::NotPresent { id: id.clone() });
            }
        }
    }

    /// Add the property if absent, remove it if present.
    pub async fn toggle(
        &self,
        compare: &mut CompareStore,
        id: &PropertyId,
    ) -> Result<(), CompareError> {
        if compare.contains(id) {
            self.remove(compare, id);
            Ok(())
        } else {
            self.add(compare, id).await
        }
    }

    /// Empty the comparison set.
    pub fn clear(&self, compare: &mut CompareStore) {
        compare.clear();
        info!("Cleared comparison set");
        self.notifier.notify(CompareEvent::Cleared);
    }

    /// The comparison matrix for the current set.
    pub fn matrix(&self, compare: &CompareStore) -> ComparisonMatrix {
        build_matrix(compare.properties())
    }
}
