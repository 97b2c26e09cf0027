//! Application layer for stayscout
//!
//! This crate contains use cases and port definitions.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    notifier::{CompareEvent, CompareNotifier, NoCompareNotifier},
    property_store::{PropertyStore, PropertyStoreError},
};
pub use use_cases::manage_comparison::{CompareError, ManageComparisonUseCase};
pub use use_cases::search_listings::{
    SearchError, SearchListingsInput, SearchListingsOutput, SearchListingsUseCase,
};
