//! Search: filter criteria and the pure filter engine.

pub mod criteria;
pub mod engine;

pub use criteria::{FilterCriteria, PriceRange, SortKey};
pub use engine::{featured_properties, filter_properties, matches};
