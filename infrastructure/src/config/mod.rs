//! Configuration loading for the stayscout CLI.

pub mod file_config;
pub mod loader;

pub use file_config::{CompareConfig, DataConfig, FileConfig, SearchConfig};
pub use loader::ConfigLoader;
