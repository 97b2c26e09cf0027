//! Comparison-state persistence adapters.

pub mod file_persister;
pub mod in_memory;

pub use file_persister::FileComparePersister;
pub use in_memory::InMemoryComparePersister;
