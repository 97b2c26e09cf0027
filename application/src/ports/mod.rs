//! Ports: the interfaces this layer expects the outside world to implement.

pub mod notifier;
pub mod property_store;

pub use notifier::{CompareEvent, CompareNotifier, NoCompareNotifier};
pub use property_store::{PropertyStore, PropertyStoreError};
