//! Property store adapters.

pub mod json_store;

pub use json_store::{JsonPropertyStore, PropertyDataError};
