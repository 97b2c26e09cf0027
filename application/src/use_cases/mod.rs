//! Use cases orchestrating the domain core against the ports.

pub mod manage_comparison;
pub mod search_listings;

pub use manage_comparison::{CompareError, ManageComparisonUseCase};
pub use search_listings::{SearchError, SearchListingsInput, SearchListingsOutput, SearchListingsUseCase};

/// Shared fakes for this crate's unit tests.
#[cfg(test)]
pub(crate) mod test_support {
    use crate::ports::notifier::{CompareEvent, CompareNotifier};
    use crate::ports::property_store::{PropertyStore, PropertyStoreError};
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};
    use stayscout_domain::{
        GenderPolicy, Location, Property, PropertyId, PropertyKind, RoomDetails, RoomType,
    };

    /// A plain private co-ed PG listing with the given id, name and price.
    pub fn property(id: &str, name: &str, price: f64) -> Property {
        Property::new(
            id,
            name,
            PropertyKind::Pg,
            price,
            Location {
                address: format!("{} Main St", id),
                city: "Bengaluru".to_string(),
                state: "KA".to_string(),
                zip_code: "560001".to_string(),
                coordinates: None,
            },
            RoomDetails {
                room_type: RoomType::Private,
                bedrooms: 1,
                bathrooms: 1,
                gender_policy: GenderPolicy::CoEd,
                max_occupancy: 2,
                room_size: 150,
            },
        )
    }

    /// Property store fake serving a fixed in-memory collection.
    pub struct FixedPropertyStore {
        properties: Vec<Property>,
    }

    impl FixedPropertyStore {
        pub fn new(properties: Vec<Property>) -> Self {
            Self { properties }
        }
    }

    #[async_trait]
    impl PropertyStore for FixedPropertyStore {
        async fn list_properties(&self) -> Result<Vec<Property>, PropertyStoreError> {
            Ok(self.properties.clone())
        }

        async fn get_property(
            &self,
            id: &PropertyId,
        ) -> Result<Option<Property>, PropertyStoreError> {
            Ok(self.properties.iter().find(|p| p.id == *id).cloned())
        }
    }

    /// Notifier fake that records every event.
    #[derive(Clone, Default)]
    pub struct RecordingNotifier {
        events: Arc<Mutex<Vec<CompareEvent>>>,
    }

    impl RecordingNotifier {
        pub fn events(&self) -> Vec<CompareEvent> {
            self.events.lock().unwrap().clone()
        }
    }

    impl CompareNotifier for RecordingNotifier {
        fn notify(&self, event: CompareEvent) {
            self.events.lock().unwrap().push(event);
        }
    }
}
