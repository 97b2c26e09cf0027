//! Infrastructure layer for stayscout
//!
//! This crate contains adapters that implement the ports defined in the
//! domain and application layers, plus configuration file loading.

pub mod config;
pub mod persist;
pub mod store;

// Re-export commonly used types
pub use config::{CompareConfig, ConfigLoader, DataConfig, FileConfig, SearchConfig};
pub use persist::{FileComparePersister, InMemoryComparePersister};
pub use store::{JsonPropertyStore, PropertyDataError};
